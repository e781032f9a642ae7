use crate::board::{Board, Color};
use crate::engine::{rules, GameEvent, MoveEngine};
use crate::record::GameRecord;
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub threads: usize,
    pub seed: u64,
    pub first_side: Color,
    pub board: Board,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, max_plies: 200, threads: 1, seed: 42, first_side: Color::White, board: Board::standard() }
    }
}

/// Plays `params.games` random games in parallel. Game `i` draws from its own
/// stream seeded by `seed ^ i`, so results do not depend on thread count.
pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    let run = || -> Vec<GameRecord> {
        (0..params.games)
            .into_par_iter()
            .map(|gi| play_random_game(params, params.seed ^ gi as u64))
            .collect()
    };
    match rayon::ThreadPoolBuilder::new().num_threads(params.threads.max(1)).build() {
        Ok(pool) => pool.install(run),
        Err(e) => {
            warn!("thread pool unavailable ({e}), using the global pool");
            run()
        }
    }
}

pub fn play_random_game(params: &SelfPlayParams, seed: u64) -> GameRecord {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = MoveEngine::new(params.board.clone(), params.first_side);
    for _ in 0..params.max_plies {
        let moves = rules::side_moves(engine.board(), engine.current_side());
        if moves.is_empty() {
            debug!("{} is blocked after {} plies", engine.current_side(), engine.history().len());
            break;
        }
        let (piece, mv) = moves[rng.gen_range(0..moves.len())];
        match engine.play(piece, mv.to) {
            Ok(GameEvent::GameEnded { .. }) => break,
            Ok(GameEvent::MoveCompleted { .. }) => {}
            Err(e) => {
                warn!("self-play move rejected: {e}");
                break;
            }
        }
    }
    engine.record()
}
