use anyhow::Context;
use checkers3d::board::{Board, Color};
use checkers3d::engine::rules;
use checkers3d::perft::{divide, perft};
use clap::Parser;
use rayon::prelude::*;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Move-tree node counter for checkers3d")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Layout file; standard opening when omitted
    #[arg(long)]
    layout: Option<PathBuf>,
    /// Side to move first
    #[arg(long, value_enum, default_value_t = Side::White)]
    side: Side,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print per-root-move counts
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(s: Side) -> Self {
        match s {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let side = Color::from(args.side);
    let base = match &args.layout {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            Board::from_layout(&text)?
        }
        None => Board::standard(),
    };

    if args.divide {
        let mut total = 0u64;
        for (mv, n) in divide(&base, side, args.depth) {
            println!("{mv}: {n}");
            total += n;
        }
        println!("nodes: {total}");
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || args.depth == 0 {
            perft(&base, side, args.depth)
        } else {
            rules::side_moves(&base, side).par_iter().map(|&(piece, mv)| {
                let mut b = base.clone();
                match rules::commit(&mut b, piece, mv) {
                    Some(c) if c.end.is_some() => u64::from(args.depth == 1),
                    Some(_) => perft(&b, side.opponent(), args.depth - 1),
                    None => 0,
                }
            }).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
