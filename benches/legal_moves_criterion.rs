use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::game_state::board::Board;
use chess_rules::game_state::chess_rules::STARTING_POSITION_FEN;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start",
        fen: STARTING_POSITION_FEN,
    },
    BenchCase {
        name: "middlegame",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    },
    BenchCase {
        name: "endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    },
    BenchCase {
        name: "in_check",
        fen: "4k3/8/8/8/1b6/8/3P4/4K3 w - - 0 1",
    },
];

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(30);

    // Correctness guard before benchmarking.
    let mut start = Board::from_fen(STARTING_POSITION_FEN).expect("benchmark FEN should parse");
    let color = start.active_color();
    let total: usize = start
        .legal_moves_for(color)
        .expect("start position moves")
        .iter()
        .map(|(_, moves)| moves.len())
        .sum();
    assert_eq!(total, 20);

    for case in CASES {
        let board = Board::from_fen(case.fen).expect("benchmark FEN should parse");
        let color = board.active_color();

        group.bench_with_input(BenchmarkId::new("side", case.name), &board, |b, board| {
            b.iter(|| {
                let mut board = board.clone();
                let moves = board
                    .legal_moves_for(black_box(color))
                    .expect("legal move generation should succeed");
                black_box(moves.len())
            });
        });

        group.bench_with_input(BenchmarkId::new("refresh_check", case.name), &board, |b, board| {
            let mut board = board.clone();
            b.iter(|| {
                board.refresh_check_state();
                black_box(board.is_in_check(color))
            });
        });
    }

    group.finish();
}

criterion_group!(legal_move_benches, bench_legal_moves);
criterion_main!(legal_move_benches);
