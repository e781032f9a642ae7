use crate::board::{CellId, Color};
use crate::config::Opponent;
use crate::engine::{rules, GameEvent, MoveEngine, Presenter};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};

/// Line-oriented front-end: turns text commands into select/confirm calls and
/// settles every committed move immediately.
pub struct Console<P: Presenter> {
    engine: MoveEngine<P>,
    opponent: Opponent,
    /// Side played by the console itself when the opponent is `Random`.
    auto_side: Color,
    rng: SmallRng,
}

impl<P: Presenter> Console<P> {
    pub fn new(engine: MoveEngine<P>, opponent: Opponent, seed: u64) -> Self {
        let auto_side = engine.first_side().opponent();
        Self { engine, opponent, auto_side, rng: SmallRng::seed_from_u64(seed) }
    }

    pub fn engine(&self) -> &MoveEngine<P> { &self.engine }

    fn cmd_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "commands: board | select <row> <col> | move <row> <col> | moves | new | quit")
    }

    fn cmd_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.engine.board())?;
        match self.engine.winner() {
            Some(w) => writeln!(out, "game over: {w} wins"),
            None if !self.engine.has_moves() => self.blocked(out),
            None => writeln!(out, "{} to move", self.engine.current_side()),
        }
    }

    fn blocked<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "game blocked: {} has no legal move (`new` to restart)", self.engine.current_side())
    }

    fn cmd_moves<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let cells: Vec<String> = self.engine.legal_destinations().iter().map(|m| m.to.to_string()).collect();
        match self.engine.selected() {
            Some(p) => writeln!(out, "piece {p}: {}", if cells.is_empty() { "no moves".to_string() } else { cells.join(" ") }),
            None => writeln!(out, "nothing selected"),
        }
    }

    fn cmd_select<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        let Some(cell) = parse_cell(args) else { return writeln!(out, "expected: select <row> <col>") };
        match self.engine.select_at(cell) {
            Ok(_) => self.cmd_moves(out),
            Err(e) => writeln!(out, "error: {e}"),
        }
    }

    fn cmd_move<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        let Some(cell) = parse_cell(args) else { return writeln!(out, "expected: move <row> <col>") };
        let Some(rec) = self.engine.confirm(cell) else { return writeln!(out, "illegal destination {cell}") };
        writeln!(out, "{} {} -> {}", rec.side, rec.from, rec.to)?;
        if let Some(event) = self.engine.finish_animation() {
            self.report(event, out)?;
        }
        self.auto_reply(out)
    }

    fn report<W: Write>(&self, event: GameEvent, out: &mut W) -> io::Result<()> {
        match event {
            GameEvent::MoveCompleted { .. } if !self.engine.has_moves() => self.blocked(out),
            GameEvent::MoveCompleted { .. } => Ok(()),
            GameEvent::GameEnded { winner, reason } => writeln!(out, "game over: {winner} wins ({reason:?})"),
        }
    }

    fn auto_reply<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        while self.opponent == Opponent::Random
            && self.engine.winner().is_none()
            && self.engine.current_side() == self.auto_side
        {
            let moves = rules::side_moves(self.engine.board(), self.auto_side);
            // Already reported by `report`; the turn does not pass.
            if moves.is_empty() { return Ok(()); }
            let (piece, mv) = moves[self.rng.gen_range(0..moves.len())];
            match self.engine.play(piece, mv.to) {
                Ok(event) => {
                    if let Some(rec) = self.engine.history().last() {
                        writeln!(out, "{} plays {} -> {}", rec.side, rec.from, rec.to)?;
                    }
                    self.report(event, out)?;
                }
                Err(e) => return writeln!(out, "error: {e}"),
            }
        }
        Ok(())
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.auto_reply(out)?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() { continue; }
            if line == "quit" { break; }
            if line == "help" { self.cmd_help(out)?; continue; }
            if line == "board" { self.cmd_board(out)?; continue; }
            if line == "moves" { self.cmd_moves(out)?; continue; }
            if line == "new" { self.engine.restart(); self.auto_reply(out)?; self.cmd_board(out)?; continue; }
            if let Some(rest) = line.strip_prefix("select ") { self.cmd_select(rest, out)?; continue; }
            if let Some(rest) = line.strip_prefix("move ") { self.cmd_move(rest, out)?; continue; }
            writeln!(out, "unknown command: {line}")?;
        }
        Ok(())
    }
}

/// `"<row> <col>"` or `"<row>,<col>"`.
fn parse_cell(args: &str) -> Option<CellId> {
    let mut it = args.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty());
    let row = it.next()?.parse::<u8>().ok()?;
    let col = it.next()?.parse::<u8>().ok()?;
    if it.next().is_some() { return None; }
    CellId::new(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_parse_in_both_forms() {
        assert_eq!(parse_cell("2 3"), CellId::new(2, 3));
        assert_eq!(parse_cell("2,3"), CellId::new(2, 3));
        assert_eq!(parse_cell("8 0"), None);
        assert_eq!(parse_cell("2"), None);
        assert_eq!(parse_cell("1 2 3"), None);
    }
}
