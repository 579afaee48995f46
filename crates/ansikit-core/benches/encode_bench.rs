//! Benchmarks for the sequence encoder and the output buffer.
//!
//! Run with: cargo bench -p ansikit-core --bench encode_bench

use ansikit_core::ansi;
use ansikit_core::buffer::Buffer;
use ansikit_core::color::Color;
use ansikit_core::encode::{encode, encode_to};
use ansikit_core::token::{Count, Token};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn styled_row(len: usize) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(len * 3);
    for i in 0..len {
        let color = Color::from((i % 256) as u8);
        tokens.push(Token::foreground(color));
        tokens.push(Token::raw("x"));
        tokens.extend(Token::cursor_forward(Count::ONE));
    }
    tokens
}

// =============================================================================
// Encoder
// =============================================================================

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode/styled_row");

    for len in [16usize, 80, 200] {
        let tokens = styled_row(len);
        group.throughput(Throughput::Elements(tokens.len() as u64));

        group.bench_with_input(BenchmarkId::new("string", len), &tokens, |b, tokens| {
            b.iter(|| black_box(encode(tokens)))
        });

        let mut sink = Vec::with_capacity(len * 16);
        group.bench_with_input(BenchmarkId::new("writer", len), &tokens, |b, tokens| {
            b.iter(|| {
                sink.clear();
                encode_to(&mut sink, tokens).unwrap();
                black_box(&sink);
            })
        });
    }

    group.finish();
}

// =============================================================================
// Buffer
// =============================================================================

fn bench_buffer(c: &mut Criterion) {
    c.bench_function("buffer/frame", |b| {
        let mut out = Vec::with_capacity(4096);
        let mut buffer = Buffer::new();
        b.iter(|| {
            out.clear();
            buffer.cursor_position(1, 1).erase_screen();
            for row in 0..24 {
                buffer
                    .bold(row % 2 == 0)
                    .foreground(Color::GRAY0)
                    .line("the quick brown fox");
            }
            buffer.flush(&mut out).unwrap();
            black_box(&out);
        })
    });

    c.bench_function("ansi/cursor_up", |b| {
        b.iter(|| black_box(ansi::cursor_up(black_box(42))))
    });
}

criterion_group!(benches, bench_encode, bench_buffer);
criterion_main!(benches);
