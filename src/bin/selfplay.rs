use anyhow::Context;
use checkers3d::board::Color;
use checkers3d::config::GameConfig;
use checkers3d::record::{write_records, GameResult};
use checkers3d::selfplay::{generate_games, SelfPlayParams};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "checkers3d-selfplay", about = "Generate random self-play games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long)]
    max_plies: Option<usize>,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// JSON game config (first side, layout, seed, ply limit)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "out/games.jsonl")]
    out: PathBuf,
    /// Games per batch between progress updates
    #[arg(long, default_value_t = 64)]
    batch: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let cfg = match &a.config {
        Some(p) => GameConfig::load(p)?,
        None => GameConfig::default(),
    };
    let base = SelfPlayParams {
        games: 0,
        max_plies: a.max_plies.unwrap_or(cfg.max_plies),
        threads: a.threads,
        seed: a.seed.unwrap_or(cfg.seed),
        first_side: cfg.first_side,
        board: cfg.initial_board()?,
    };

    eprintln!("Generating {} games (threads={}, max_plies={}, seed={})", a.games, a.threads, base.max_plies, base.seed);
    let bar = ProgressBar::new(a.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games ({eta})")?);
    let mut games = Vec::with_capacity(a.games);
    let batch = a.batch.max(1);
    let mut start = 0usize;
    while start < a.games {
        let n = batch.min(a.games - start);
        let params = SelfPlayParams { games: n, seed: base.seed.wrapping_add(start as u64), ..base.clone() };
        games.extend(generate_games(&params));
        start += n;
        bar.set_position(start as u64);
    }
    bar.finish();

    let (mut white, mut black, mut other) = (0usize, 0usize, 0usize);
    for g in &games {
        match g.result {
            GameResult::Won { winner: Color::White, .. } => white += 1,
            GameResult::Won { winner: Color::Black, .. } => black += 1,
            _ => other += 1,
        }
    }
    eprintln!("White {white}  Black {black}  unfinished/blocked {other}");

    if let Some(dir) = a.out.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    write_records(&games, &a.out).with_context(|| format!("writing {}", a.out.display()))?;
    eprintln!("Wrote {} games to {}", games.len(), a.out.display());
    Ok(())
}
