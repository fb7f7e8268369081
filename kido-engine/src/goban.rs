use std::collections::VecDeque;
use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::GoError;
use crate::stone::Stone;
use crate::{BOARD_SIZE, Point};

const SIZE: usize = BOARD_SIZE as usize;

/// A connected same-colored group and the number of distinct empty
/// intersections touching it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub stones: Vec<Point>,
    pub liberties: usize,
}

impl Group {
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

/// Outcome of placing a stone: the resulting board and how many opponent
/// stones it removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub goban: Goban,
    pub captured: u32,
}

impl Placement {
    /// A placement is suicide when it captured nothing and left the placed
    /// stone's own group without liberties.
    pub fn is_suicide(&self, point: Point) -> bool {
        self.captured == 0 && self.goban.find_group(point).liberties == 0
    }
}

/// The 19x19 board, row-major with the origin in the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Goban {
    grid: [[Option<Stone>; SIZE]; SIZE],
}

impl Default for Goban {
    fn default() -> Self {
        Self::new()
    }
}

impl Goban {
    /// Create an empty board.
    pub fn new() -> Self {
        Goban {
            grid: [[None; SIZE]; SIZE],
        }
    }

    // -- Accessors --

    pub fn rows(&self) -> &[[Option<Stone>; SIZE]; SIZE] {
        &self.grid
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            self.grid[point.0 as usize][point.1 as usize]
        } else {
            None
        }
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.grid.iter().flatten().all(Option::is_none)
    }

    pub fn stone_count(&self, stone: Stone) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|s| **s == Some(stone))
            .count()
    }

    // -- Rules --

    /// Place `stone` at `point`, enforcing the suicide rule.
    ///
    /// The receiver is left untouched; the returned placement carries a new
    /// board with every captured opponent group removed.
    pub fn apply_move(&self, point: Point, stone: Stone) -> Result<Placement, GoError> {
        let placement = self.place_stone(point, stone)?;
        if placement.is_suicide(point) {
            return Err(GoError::Suicide);
        }
        Ok(placement)
    }

    /// Place a stone and resolve captures without judging suicide.
    pub fn place_stone(&self, point: Point, stone: Stone) -> Result<Placement, GoError> {
        if !self.on_board(point) {
            return Err(GoError::NotOnBoard);
        }
        if self.stone_at(point).is_some() {
            return Err(GoError::Overwrite);
        }

        let mut goban = self.clone();
        goban.set_stone(point, Some(stone));

        let opponent = stone.opp();
        let mut captured = 0u32;
        for n in self.neighbors(point) {
            // A group already removed through another neighbor reads as empty here.
            if goban.stone_at(n) != Some(opponent) {
                continue;
            }
            let group = goban.find_group(n);
            if group.liberties == 0 {
                captured += group.stones.len() as u32;
                for p in group.stones {
                    goban.set_stone(p, None);
                }
            }
        }

        Ok(Placement { goban, captured })
    }

    // -- Graph algorithms --

    /// Get the 4-connected neighbors that are on the board.
    pub fn neighbors(&self, (row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < BOARD_SIZE {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < BOARD_SIZE {
            result.push((row, col + 1));
        }
        result
    }

    /// Breadth-first flood fill of the group containing `point`.
    ///
    /// An empty or off-board seed yields an empty group with no liberties.
    pub fn find_group(&self, point: Point) -> Group {
        let Some(stone) = self.stone_at(point) else {
            return Group::default();
        };

        let mut visited = [[false; SIZE]; SIZE];
        let mut liberty_seen = [[false; SIZE]; SIZE];
        let mut stones = Vec::new();
        let mut liberties = 0;
        let mut queue = VecDeque::from([point]);
        visited[point.0 as usize][point.1 as usize] = true;

        while let Some(p) = queue.pop_front() {
            stones.push(p);
            for n in self.neighbors(p) {
                let (r, c) = (n.0 as usize, n.1 as usize);
                match self.grid[r][c] {
                    Some(s) if s == stone => {
                        if !visited[r][c] {
                            visited[r][c] = true;
                            queue.push_back(n);
                        }
                    }
                    None => {
                        if !liberty_seen[r][c] {
                            liberty_seen[r][c] = true;
                            liberties += 1;
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        Group { stones, liberties }
    }

    // -- Internal helpers --

    fn set_stone(&mut self, (row, col): Point, stone: Option<Stone>) {
        if self.on_board((row, col)) {
            self.grid[row as usize][col as usize] = stone;
        }
    }

    /// Build a board from an ASCII layout anchored at the top-left corner.
    /// 'B' = Black, 'W' = White, anything else = empty.
    #[cfg(test)]
    pub(crate) fn from_layout(layout: &[&str]) -> Goban {
        let mut goban = Goban::new();
        for (r, line) in layout.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let stone = match ch {
                    'B' => Some(Stone::Black),
                    'W' => Some(Stone::White),
                    _ => None,
                };
                goban.set_stone((r as u8, c as u8), stone);
            }
        }
        goban
    }
}

impl fmt::Display for Goban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                let ch = cell.map_or('+', Stone::letter);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
