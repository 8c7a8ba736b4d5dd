//! Benchmarks for the highlight pass pipeline
//!
//! Run with: cargo bench --bench highlight

use resterm::catalog::builtin_demos;
use resterm::{highlight, LanguageId};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

#[divan::bench]
fn highlight_java_controller(bencher: divan::Bencher) {
    let demos = builtin_demos();
    let code = demos[0].backend.code.clone();
    bencher.bench_local(|| highlight(divan::black_box(&code), LanguageId::Java));
}

#[divan::bench]
fn highlight_typescript_fetch(bencher: divan::Bencher) {
    let demos = builtin_demos();
    let code = demos[1].frontend.code.clone();
    bencher.bench_local(|| highlight(divan::black_box(&code), LanguageId::TypeScript));
}

#[divan::bench]
fn highlight_plain_passthrough(bencher: divan::Bencher) {
    let demos = builtin_demos();
    let code = demos[0].frontend.code.clone();
    bencher.bench_local(|| highlight(divan::black_box(&code), LanguageId::PlainText));
}

#[divan::bench]
fn highlight_large_input(bencher: divan::Bencher) {
    // Pathological-ish input: the whole catalog concatenated many times
    let blob: String = builtin_demos()
        .iter()
        .map(|d| d.backend.code.as_str())
        .collect::<Vec<_>>()
        .join("\n")
        .repeat(50);
    bencher.bench_local(|| highlight(divan::black_box(&blob), LanguageId::Java));
}
