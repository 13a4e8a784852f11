//! Lexer benchmarks
//!
//! Run with: `cargo bench --package dfalex-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dfalex_lex::{tokenize, Engine, ReaderSource, TokenStream};

const PROGRAM: &str = r#"
package demo;

import java.util.List;

/**
 * Sums and filters values.
 */
public final class Stats {
    private static final long LIMIT = 0x7FFF_FFFFL;

    public static double mean(int[] values) {
        if (values.length == 0) {
            return 0.0d;
        }
        long total = 0;
        for (int i = 0; i < values.length; i++) {
            total += values[i]; // accumulate
        }
        return (double) total / values.length;
    }

    public static boolean inRange(long v) {
        return v >= 0 && v <= LIMIT && (v >>> 31) == 0;
    }

    public static String label(char c) {
        return c == '\n' ? "newline" : "char: " + c;
    }
}
"#;

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");
    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));

    group.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(PROGRAM)).len()));

    group.bench_function("stream", |b| {
        b.iter(|| TokenStream::new(black_box(PROGRAM).chars()).count())
    });

    group.bench_function("reader_source", |b| {
        b.iter(|| {
            Engine::new()
                .tokenize_source(ReaderSource::new(black_box(PROGRAM).as_bytes()))
                .map(|tokens| tokens.len())
        })
    });

    group.finish();
}

fn bench_lexer_literals(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("numbers", |b| {
        b.iter(|| tokenize(black_box("0 07 0x1F 0b1010 123456789L 3.14159f .5 2d")).len())
    });

    group.bench_function("long_string", |b| {
        let source = format!("\"{}\"", "string body with \\t escapes ".repeat(64));
        b.iter(|| tokenize(black_box(&source)).len())
    });

    group.bench_function("long_comment", |b| {
        let source = format!("/* {} */", "* comment text ".repeat(64));
        b.iter(|| tokenize(black_box(&source)).len())
    });

    group.finish();
}

fn bench_lexer_errors(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_errors");

    let source = "a#b @ 08 '' =>".repeat(64);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("error_recovery", |b| {
        b.iter(|| tokenize(black_box(&source)).len())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_program,
    bench_lexer_literals,
    bench_lexer_errors
);
criterion_main!(benches);
