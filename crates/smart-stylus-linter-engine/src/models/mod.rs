pub mod stylesheet_file;

pub use stylesheet_file::StylesheetFile;
