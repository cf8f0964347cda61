use crate::{Coords, TermInt};

pub const BOARD_WIDTH: TermInt = 40;
pub const BOARD_HEIGHT: TermInt = 20;

/// The walled rectangle the snake lives in.
///
/// `origin` is the top-left border cell. The outermost ring of cells is the
/// border; everything strictly inside it is playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    origin: Coords,
    width: TermInt,
    height: TermInt,
}

impl Arena {
    pub fn new(origin: Coords, width: TermInt, height: TermInt) -> Self {
        Arena { origin, width, height }
    }

    /// Standard board centered in a `cols` x `rows` terminal.
    ///
    /// The origin column is kept even so the 2-column horizontal step always
    /// lands on even columns, where food is spawned.
    pub fn centered(cols: u16, rows: u16) -> Self {
        let mut x = cols as TermInt / 2 - BOARD_WIDTH / 2;
        let y = rows as TermInt / 2 - BOARD_HEIGHT / 2;
        if x % 2 != 0 {
            x -= 1;
        }
        Arena::new((x.max(0), y.max(0)), BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Smallest terminal, in `(columns, rows)`, the standard board fits in.
    pub fn min_terminal_size() -> (u16, u16) {
        ((BOARD_WIDTH * 2) as u16, (BOARD_HEIGHT * 2) as u16)
    }

    pub fn origin(&self) -> Coords {
        self.origin
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn center(&self) -> Coords {
        (self.origin.0 + self.width / 2, self.origin.1 + self.height / 2)
    }

    /// True when `pos` is strictly inside the border.
    pub fn contains(&self, pos: Coords) -> bool {
        let (x0, y0) = self.origin;
        pos.0 > x0 && pos.0 < x0 + self.width - 1 && pos.1 > y0 && pos.1 < y0 + self.height - 1
    }

    pub fn is_border(&self, pos: Coords) -> bool {
        let (x0, y0) = self.origin;
        let (x1, y1) = (x0 + self.width - 1, y0 + self.height - 1);
        let in_rect = pos.0 >= x0 && pos.0 <= x1 && pos.1 >= y0 && pos.1 <= y1;
        in_rect && (pos.0 == x0 || pos.0 == x1 || pos.1 == y0 || pos.1 == y1)
    }

    /// Every border cell, top and bottom rows first.
    pub fn border_cells(&self) -> impl Iterator<Item = Coords> + '_ {
        let (x0, y0) = self.origin;
        let (x1, y1) = (x0 + self.width - 1, y0 + self.height - 1);
        let rows = (x0..=x1).flat_map(move |x| [(x, y0), (x, y1)]);
        let cols = (y0 + 1..y1).flat_map(move |y| [(x0, y), (x1, y)]);
        rows.chain(cols)
    }

    /// Inclusive column range food is sampled from, before rounding down to
    /// an even column.
    pub fn food_columns(&self) -> (TermInt, TermInt) {
        (self.origin.0 + 2, self.origin.0 + self.width - 2)
    }

    /// Inclusive row range food is sampled from.
    pub fn food_rows(&self) -> (TermInt, TermInt) {
        (self.origin.1 + 1, self.origin.1 + self.height - 2)
    }

    /// Interior cells food may occupy: even columns only.
    pub fn food_cells(&self) -> impl Iterator<Item = Coords> + '_ {
        let (c0, c1) = self.food_columns();
        let (r0, r1) = self.food_rows();
        (r0..=r1).flat_map(move |y| (c0..=c1).map(move |x| (x, y)))
            .filter(|&(x, _)| x % 2 == 0)
            .filter(move |&pos| self.contains(pos))
    }

    pub fn interior_cells(&self) -> usize {
        ((self.width - 2).max(0) * (self.height - 2).max(0)) as usize
    }
}
