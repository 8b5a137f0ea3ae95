// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold** and __italic__ content.\n\n- Bullet point\n- Another item\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_emphasis_heavy_line(spans: usize) -> String {
    let mut line = String::new();
    for i in 0..spans {
        line.push_str(&format!("word **strong {i}** and __italic {i}__ "));
    }
    line
}
