//! Text layouts: 8 rows, first line is row 7. `w`/`b` pieces, `.`/`-` empty.

use super::{Board, CellId, Color, SIZE};
use crate::error::SetupError;
use std::fmt;

const CELLS_TEXT: usize = SIZE * (SIZE + 1);

impl Board {
    /// Opening position: White on the dark cells of rows 0-2, Black on rows 5-7.
    pub fn standard() -> Self {
        let mut placements = Vec::with_capacity(24);
        for id in CellId::all().filter(|c| c.is_dark()) {
            match id.row() {
                0..=2 => placements.push((Color::White, id)),
                5..=7 => placements.push((Color::Black, id)),
                _ => {}
            }
        }
        // The standard grid is valid by construction.
        Self::from_placements(&placements).unwrap_or_else(|_| Self::empty())
    }

    pub fn from_layout(text: &str) -> Result<Self, SetupError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        if rows.len() != SIZE {
            return Err(SetupError::RowCount(rows.len()));
        }
        let mut placements = Vec::new();
        for (i, line) in rows.iter().enumerate() {
            let row = (SIZE - 1 - i) as u8;
            if line.len() != SIZE {
                return Err(SetupError::RowWidth { row: row as usize, width: line.len() });
            }
            for (col, &ch) in line.iter().enumerate() {
                let color = match ch {
                    'w' | 'W' => Color::White,
                    'b' | 'B' => Color::Black,
                    '.' | '-' => continue,
                    _ => return Err(SetupError::UnknownChar { row: row as usize, ch }),
                };
                let cell = CellId::new(row, col as u8)
                    .ok_or(SetupError::OutOfRange { row: row as i32, col: col as i32 })?;
                placements.push((color, cell));
            }
        }
        Self::from_placements(&placements)
    }

    /// Inverse of `from_layout` for the live pieces.
    pub fn layout(&self) -> String {
        let mut out = String::with_capacity(CELLS_TEXT);
        for row in (0..SIZE as u8).rev() {
            for col in 0..SIZE as u8 {
                out.push(self.glyph(row, col));
            }
            out.push('\n');
        }
        out
    }

    fn glyph(&self, row: u8, col: u8) -> char {
        let Some(id) = CellId::new(row, col) else { return ' ' };
        match self.occupant(id).and_then(|p| self.piece(p)) {
            Some(p) if p.color == Color::White => 'w',
            Some(_) => 'b',
            None if id.is_dark() => '.',
            None => '-',
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for row in (0..SIZE as u8).rev() {
            write!(f, "{}", row)?;
            for col in 0..SIZE as u8 {
                write!(f, " {}", self.glyph(row, col))?;
            }
            writeln!(f)?;
        }
        write!(f, "White: {}  Black: {}", self.live_count(Color::White), self.live_count(Color::Black))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "\
        b-b-b-b-
        -b-b-b-b
        b-b-b-b-
        -.-.-.-.
        .-.-.-.-
        -w-w-w-w
        w-w-w-w-
        -w-w-w-w
    ";

    #[test]
    fn standard_matches_text_layout() {
        let parsed = Board::from_layout(START).unwrap();
        assert_eq!(parsed, Board::standard());
        assert_eq!(parsed.live_count(Color::White), 12);
        assert_eq!(parsed.live_count(Color::Black), 12);
    }

    #[test]
    fn layout_round_trips() {
        let b = Board::standard();
        assert_eq!(Board::from_layout(&b.layout()).unwrap(), b);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let text = format!("# opening\n\n{START}");
        assert!(Board::from_layout(&text).is_ok());
    }

    #[test]
    fn malformed_layouts_are_reported() {
        assert_eq!(Board::from_layout("........"), Err(SetupError::RowCount(1)));
        let short = START.replacen("b-b-b-b-", "b-b-", 1);
        assert_eq!(Board::from_layout(&short), Err(SetupError::RowWidth { row: 7, width: 4 }));
        let bad = START.replacen("b-b-b-b-", "b-b-b-x-", 1);
        assert_eq!(Board::from_layout(&bad), Err(SetupError::UnknownChar { row: 7, ch: 'x' }));
        let light = START.replacen("b-b-b-b-", "bbb-b-b-", 1);
        assert!(matches!(Board::from_layout(&light), Err(SetupError::PieceOnLightCell(_))));
    }
}
