//! Benchmarks for move generation and notation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::board::Board;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(10);

    let mut board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut kiwipete = Board::from_fen(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        (
            "middlegame",
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        ),
        ("kiwipete", KIWIPETE),
    ];

    for (name, fen) in positions {
        let board = Board::from_fen(fen);
        group.bench_with_input(BenchmarkId::new("legal", name), &board, |b, board| {
            b.iter(|| black_box(board.legal_moves()))
        });
        group.bench_with_input(BenchmarkId::new("pseudo_legal", name), &board, |b, board| {
            b.iter(|| black_box(board.pseudo_legal_moves()))
        });
    }

    group.finish();
}

fn bench_notation(c: &mut Criterion) {
    let mut group = c.benchmark_group("notation");

    let board = Board::from_fen(KIWIPETE);
    let moves = board.legal_moves();
    group.bench_function("to_san", |b| {
        b.iter(|| {
            for mv in moves.iter() {
                black_box(board.move_to_san(mv));
            }
        })
    });
    group.bench_function("parse_san", |b| b.iter(|| black_box(board.parse_san("Bxa6"))));
    group.bench_function("fen_round_trip", |b| {
        b.iter(|| black_box(Board::try_from_fen(&board.to_fen())))
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_notation);
criterion_main!(benches);
