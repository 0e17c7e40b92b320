//! Micro-benchmarks for board parsing and beam tracing.
//!
//! This suite measures the cost of parsing the textual board format and of
//! tracing every labeled beam on representative boards.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench trace
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lumelace_core::{Board, Position};

const DAILY_BOARD: &str = concat!(
    "..B...\n",
    "......\n",
    "Do\\..B\n",
    "C./...\n",
    "......\n",
    ".A....\n",
);

/// Builds an `n` x `n` board with a labeled beam per top cell and a mirror
/// diagonal, so every beam crosses the whole interior.
fn mirror_diagonal(n: usize) -> String {
    let mut text = String::with_capacity((n + 2) * (n + 3));
    text.push('.');
    for x in 0..n {
        text.push(char::from(b'A' + u8::try_from(x).expect("board fits the alphabet")));
    }
    text.push_str(".\n");
    for y in 1..=n {
        text.push('.');
        for x in 1..=n {
            text.push(if x == y { '\\' } else { '.' });
        }
        text.push_str(".\n");
    }
    text.push('.');
    text.push_str(&".".repeat(n));
    text.push('.');
    text
}

fn bench_parse(c: &mut Criterion) {
    let boards = [
        ("daily", DAILY_BOARD.to_owned()),
        ("diagonal_8", mirror_diagonal(8)),
    ];

    for (param, text) in boards {
        c.bench_with_input(BenchmarkId::new("parse", param), &text, |b, text| {
            b.iter(|| {
                let board: Board = hint::black_box(text).parse().unwrap();
                hint::black_box(board)
            });
        });
    }
}

fn bench_beams(c: &mut Criterion) {
    let boards = [
        ("daily", DAILY_BOARD.parse::<Board>().unwrap()),
        ("diagonal_8", mirror_diagonal(8).parse::<Board>().unwrap()),
    ];

    for (param, board) in boards {
        c.bench_with_input(BenchmarkId::new("beams", param), &board, |b, board| {
            b.iter(|| hint::black_box(board.beams().unwrap()));
        });
    }
}

fn bench_trace_from(c: &mut Criterion) {
    let board: Board = mirror_diagonal(8).parse().unwrap();
    let start = Position::new(1, 0);

    c.bench_function("trace_from", |b| {
        b.iter(|| hint::black_box(board.trace_from(hint::black_box(start)).unwrap()));
    });
}

criterion_group!(benches, bench_parse, bench_beams, bench_trace_from);
criterion_main!(benches);
