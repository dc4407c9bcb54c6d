//! Build script to generate embedded word lists
//!
//! Reads the corpus files under `data/` and generates Rust source code with const arrays.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Basic English corpus
    generate_word_list(
        "data/basic.txt",
        &Path::new(&out_dir).join("basic.rs"),
        "BASIC",
        "Basic English word corpus",
    );

    // Full corpus (superset of the basic one)
    generate_word_list(
        "data/full.txt",
        &Path::new(&out_dir).join("full.rs"),
        "FULL",
        "Full English word corpus",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/basic.txt");
    println!("cargo:rerun-if-changed=data/full.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Normalize the same way runtime-loaded lists are normalized
    let words: BTreeSet<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} words)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in &words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
