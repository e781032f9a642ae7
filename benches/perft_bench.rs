use checkers3d::engine::rules;
use checkers3d::selfplay::{play_random_game, SelfPlayParams};
use checkers3d::{Board, Color};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_perft(c: &mut Criterion) {
    let b = Board::standard();
    c.bench_function("perft_depth_5_startpos", |ben| {
        ben.iter(|| black_box(checkers3d::perft::perft(black_box(&b), Color::White, 5)))
    });
}

fn bench_side_moves(c: &mut Criterion) {
    let b = Board::standard();
    c.bench_function("side_moves_startpos", |ben| {
        ben.iter(|| black_box(rules::side_moves(black_box(&b), Color::White).len()))
    });
}

fn bench_random_game(c: &mut Criterion) {
    let params = SelfPlayParams::default();
    let mut seed = 0u64;
    c.bench_function("random_game_200_plies", |ben| {
        ben.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(play_random_game(&params, seed).moves.len())
        })
    });
}

criterion_group!(benches, bench_perft, bench_side_moves, bench_random_game);
criterion_main!(benches);
