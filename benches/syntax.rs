//! Benchmarks for keyword highlighting
//!
//! Run with: cargo bench --bench syntax

use albert::syntax::{Highlighter, KEYWORD};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Sample source
// ============================================================================

const PYTHON_SAMPLE: &str = r#"
import os
from pathlib import Path as P

class Walker:
    def __init__(self, root):
        self.root = P(root)

    def files(self):
        for entry in os.scandir(self.root):
            if entry.is_dir():
                yield from Walker(entry.path).files()
            elif entry.name.endswith(".py"):
                yield entry.path
            else:
                continue

def main():
    try:
        for path in Walker(".").files():
            print(path)
    except OSError as err:
        return 1
    while False:
        pass
    return 0
"#;

fn generate_python(lines: usize) -> String {
    let mut out = String::new();
    for i in 0..lines {
        out.push_str(&format!(
            "def function_{}(x):\n    if x > {}:\n        return x\n    else:\n        return {}\n",
            i, i, i
        ));
    }
    out
}

// ============================================================================
// Highlighting
// ============================================================================

#[divan::bench]
fn build_python_table() -> Highlighter {
    Highlighter::python()
}

#[divan::bench]
fn highlight_sample(bencher: divan::Bencher) {
    let highlighter = Highlighter::python();
    bencher.bench_local(|| {
        for line in PYTHON_SAMPLE.lines() {
            divan::black_box(highlighter.highlight(line));
        }
    });
}

/// One frame's worth of visible lines out of a large file
#[divan::bench(args = [40, 200, 1000])]
fn highlight_visible_lines(bencher: divan::Bencher, lines: usize) {
    let highlighter = Highlighter::python();
    let source = generate_python(lines);
    bencher.bench_local(|| {
        for line in source.lines() {
            divan::black_box(highlighter.highlight_line(line).segments(line));
        }
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn highlight_long_line(bencher: divan::Bencher, words: usize) {
    let highlighter = Highlighter::python();
    let line = "value if flag else other ".repeat(words);
    bencher.bench_local(|| divan::black_box(highlighter.highlight(&line)));
}

#[divan::bench(args = [13, 100])]
fn highlight_custom_table(bencher: divan::Bencher, keywords: usize) {
    let words: Vec<String> = (0..keywords).map(|i| format!("kw{}", i)).collect();
    let highlighter = Highlighter::new(&words, KEYWORD);
    bencher.bench_local(|| {
        for line in PYTHON_SAMPLE.lines() {
            divan::black_box(highlighter.highlight(line));
        }
    });
}
