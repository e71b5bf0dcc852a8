// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_note(size: usize) -> String {
    let base = "# Title\n\nSome **bold** and *italic* words with `code`.\n---\n- Bullet point\n  - Nested [link](https://example.com)\n- Another item \\*escaped\\*\n\n```rust\nfn example() {}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_delimiter_storm(size: usize) -> String {
    "*_`[".repeat(size)
}
