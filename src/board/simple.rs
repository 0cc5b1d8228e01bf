//! SimpleBoard implementation
//!
//! Padded 1-D array board with full capture mechanics.
//!
//! ## Representation
//!
//! The array is filled with `Border` sentinels; playable points live at
//! `row * (size + 1) + col` for 1-based `row` and `col`. The one-cell
//! border per row means every playable point has exactly four array
//! neighbors (`±1`, `±stride`), none of which can run off the allocation.
//!
//! Capture removal must be real here: the session's capture predicate works
//! by diffing empty-point enumerations across a hypothetical move on a
//! clone, so `play_move` has to physically clear captured groups.

use crate::error::{GtpError, Result};
use super::{Color, GoBoard, Point, MAX_SIZE, MIN_SIZE};

/// Concrete board collaborator.
#[derive(Debug, Clone)]
pub struct SimpleBoard {
    /// Configured board size (side length)
    size: usize,

    /// Row stride: one sentinel cell per row
    ns: usize,

    /// Padded 1-D point array
    cells: Vec<Color>,

    /// Side to move; starts Black, flips after each applied move
    current_player: Color,
}

impl SimpleBoard {
    /// Create an empty board of the given size.
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(GtpError::Board(format!(
                "unsupported board size: {} (must be {}..={})",
                size, MIN_SIZE, MAX_SIZE
            )));
        }

        let ns = size + 1;
        // Rows 1..=size plus sentinel padding above and below
        let len = (size + 2) * ns + 1;
        let mut cells = vec![Color::Border; len];
        for row in 1..=size {
            for col in 1..=size {
                cells[row * ns + col] = Color::Empty;
            }
        }

        Ok(Self {
            size,
            ns,
            cells,
            current_player: Color::Black,
        })
    }

    /// The four array neighbors of a playable point.
    fn neighbors(&self, point: Point) -> [Point; 4] {
        [point - 1, point + 1, point - self.ns, point + self.ns]
    }

    fn on_board(&self, point: Point) -> bool {
        point < self.cells.len() && self.cells[point] != Color::Border
    }

    /// Whether the group containing `point` has at least one liberty.
    ///
    /// Flood fill over same-colored stones; stops early at the first
    /// adjacent empty point.
    fn group_has_liberty(&self, point: Point) -> bool {
        let color = self.cells[point];
        debug_assert!(color == Color::Black || color == Color::White);

        let mut visited = vec![false; self.cells.len()];
        let mut stack = vec![point];
        visited[point] = true;

        while let Some(p) = stack.pop() {
            for n in self.neighbors(p) {
                match self.cells[n] {
                    Color::Empty => return true,
                    c if c == color && !visited[n] => {
                        visited[n] = true;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }
        false
    }

    /// Remove every stone in the group containing `point`.
    fn remove_group(&mut self, point: Point) {
        let color = self.cells[point];
        let mut stack = vec![point];
        self.cells[point] = Color::Empty;

        while let Some(p) = stack.pop() {
            for n in self.neighbors(p) {
                if self.cells[n] == color {
                    self.cells[n] = Color::Empty;
                    stack.push(n);
                }
            }
        }
    }
}

impl GoBoard for SimpleBoard {
    fn reset(&mut self, size: usize) -> Result<()> {
        *self = SimpleBoard::new(size)?;
        Ok(())
    }

    fn size(&self) -> usize {
        self.size
    }

    fn current_player(&self) -> Color {
        self.current_player
    }

    fn get_color(&self, point: Point) -> Color {
        if point < self.cells.len() {
            self.cells[point]
        } else {
            Color::Border
        }
    }

    fn get_empty_points(&self) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == Color::Empty)
            .map(|(p, _)| p)
            .collect()
    }

    fn is_legal(&self, point: Point, color: Color) -> bool {
        if !self.on_board(point) {
            return false;
        }
        let mut probe = self.clone();
        probe.play_move(point, color)
    }

    fn check_suicide(&self, point: Point, color: Color) -> bool {
        if !self.on_board(point) || self.cells[point] != Color::Empty {
            return false;
        }
        // On an empty point the only way a move can fail to apply is suicide
        let mut probe = self.clone();
        !probe.play_move(point, color)
    }

    fn play_move(&mut self, point: Point, color: Color) -> bool {
        if !self.on_board(point) || self.cells[point] != Color::Empty {
            return false;
        }

        self.cells[point] = color;

        // Opposing neighbor groups left without liberties are captured
        let opponent = color.opponent();
        for n in self.neighbors(point) {
            if self.cells[n] == opponent && !self.group_has_liberty(n) {
                self.remove_group(n);
            }
        }

        // Suicide: own group still has no liberty after captures
        if !self.group_has_liberty(point) {
            self.cells[point] = Color::Empty;
            return false;
        }

        self.current_player = opponent;
        true
    }

    fn render_2d(&self) -> String {
        let mut out = String::new();
        for row in (1..=self.size).rev() {
            for col in 1..=self.size {
                if col > 1 {
                    out.push(' ');
                }
                out.push(match self.cells[row * self.ns + col] {
                    Color::Empty => '.',
                    Color::Black => 'X',
                    Color::White => 'O',
                    Color::Border => '#',
                });
            }
            if row > 1 {
                out.push('\n');
            }
        }
        out
    }
}
