use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::warn;

use crate::arena::Arena;
use crate::snake::Snake;
use crate::Coords;

const FOOD_CHAR: char = '@';

/// Rejection sampling gives up after this many tries per interior cell and
/// falls back to picking among the free cells directly.
const SAMPLES_PER_CELL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pos: Coords,
}

impl Food {
    pub fn at(pos: Coords) -> Self {
        Food { pos }
    }

    /// Places food on a random free cell of `arena`.
    pub fn spawn<R: Rng + ?Sized>(snake: &Snake, arena: &Arena, rng: &mut R) -> Option<Self> {
        let mut food = Food::at(arena.center());
        food.respawn(snake, arena, rng).then_some(food)
    }

    pub fn pos(&self) -> Coords {
        self.pos
    }

    pub fn glyph(&self) -> char {
        FOOD_CHAR
    }

    /// Moves the food to a uniformly random interior cell not covered by the
    /// snake. Columns are rounded down to even so the head can reach them.
    ///
    /// Returns false, leaving the food where it was, if the snake covers every
    /// cell food could go on.
    pub fn respawn<R: Rng + ?Sized>(&mut self, snake: &Snake, arena: &Arena, rng: &mut R) -> bool {
        let (c0, c1) = arena.food_columns();
        let (r0, r1) = arena.food_rows();

        if c0 <= c1 && r0 <= r1 {
            for _ in 0..arena.interior_cells() * SAMPLES_PER_CELL {
                let mut x = rng.gen_range(c0..=c1);
                if x % 2 != 0 {
                    x -= 1;
                }
                let candidate = (x, rng.gen_range(r0..=r1));

                if arena.contains(candidate) && !snake.occupies(candidate) {
                    self.pos = candidate;
                    return true;
                }
            }
        }

        warn!(len = snake.len(), "food sampling exhausted, scanning free cells");
        match arena.food_cells().filter(|&pos| !snake.occupies(pos)).choose(rng) {
            Some(pos) => {
                self.pos = pos;
                true
            }
            None => false,
        }
    }
}
