use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use ply_chess::game_state::chess_board::ChessBoard;
use ply_chess::search::minimax::{find_best_move, SearchConfig};
use ply_chess::utils::move_text::parse_move_list;

const OPENINGS: &[(&str, &str)] = &[
    ("start", ""),
    ("open_game", "(e2, e4) (e7, e5) (g1, f3) (b8, c6)"),
    ("queens_pawn", "(d2, d4) (d7, d5) (c2, c4) (e7, e6)"),
];

fn board_after(moves: &str) -> ChessBoard {
    let mut board = ChessBoard::new_game();
    for mv in parse_move_list(moves).expect("benchmark moves should parse") {
        board.apply_move(&mv).expect("benchmark moves should be legal");
    }
    board
}

fn bench_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for &(name, moves) in OPENINGS {
        for depth in [2u8, 3] {
            let mut board = board_after(moves);
            let config = SearchConfig::with_depth(depth);
            group.bench_with_input(
                BenchmarkId::new(name, format!("d{depth}")),
                &config,
                |b, config| {
                    b.iter(|| {
                        let outcome = find_best_move(black_box(&mut board), config)
                            .expect("search should succeed");
                        black_box(outcome.weight)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(minimax_benches, bench_minimax);
criterion_main!(minimax_benches);
