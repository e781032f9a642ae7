use anyhow::Result;
use checkers3d::board::Color;
use checkers3d::config::{GameConfig, Opponent};
use checkers3d::console::Console;
use checkers3d::engine::{LogPresenter, MoveEngine};
use checkers3d::record::write_records;
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play checkers in the terminal", long_about = None)]
struct Args {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Layout file overriding the config
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Side that moves first: 'w' for white, 'b' for black
    #[arg(long)]
    first: Option<String>,

    /// Who plays the second side
    #[arg(long, value_enum)]
    opponent: Option<Opponent>,

    /// Seed for the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Write the finished game record here (JSON lines)
    #[arg(long)]
    record: Option<PathBuf>,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(p) => GameConfig::load(p)?,
        None => GameConfig::default(),
    };
    if let Some(l) = args.layout { cfg.layout = Some(l); }
    if let Some(f) = &args.first { cfg.first_side = parse_color(f)?; }
    if let Some(o) = args.opponent { cfg.opponent = o; }
    if let Some(s) = args.seed { cfg.seed = s; }

    let engine = MoveEngine::with_presenter(cfg.initial_board()?, cfg.first_side, LogPresenter);
    let mut console = Console::new(engine, cfg.opponent, cfg.seed);

    println!("Checkers ({} moves first, opponent: {:?})", cfg.first_side, cfg.opponent);
    println!("Type 'help' for commands");
    println!();
    println!("{}", console.engine().board());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console.run(stdin.lock(), &mut stdout)?;

    if let Some(path) = args.record {
        write_records(&[console.engine().record()], &path)?;
        println!("Game written to {}", path.display());
    }
    Ok(())
}
