// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_stylesheet(blocks: usize) -> String {
    let base = ".card\n  width: 100%;\n  padding 8px\n  color #333\n  &:hover\n    opacity 0.8\n    cursor pointer\n  .title\n    font-size 2em\n    display block\n\n";
    base.repeat(blocks)
}

#[allow(dead_code)]
pub fn generate_long_block(declarations: usize) -> String {
    let mut content = String::from("div.container\n");
    for i in (0..declarations).rev() {
        content.push_str(&format!("  prop-{i:05}: {i}px;\n"));
    }
    content
}
