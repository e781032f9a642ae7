use crate::board::{Board, Color};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    #[default]
    Human,
    Random,
}

/// Game settings, read from JSON. Every field is optional in the file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub first_side: Color,
    /// Text layout file; the standard opening when absent.
    pub layout: Option<PathBuf>,
    pub opponent: Opponent,
    pub seed: u64,
    pub max_plies: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { first_side: Color::White, layout: None, opponent: Opponent::Human, seed: 42, max_plies: 200 }
    }
}

impl GameConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn initial_board(&self) -> Result<Board> {
        match &self.layout {
            Some(p) => {
                let text = std::fs::read_to_string(p)
                    .with_context(|| format!("reading layout {}", p.display()))?;
                Ok(Board::from_layout(&text)?)
            }
            None => Ok(Board::standard()),
        }
    }
}
