use std::io::Write;

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, queue};

use crate::arena::Arena;
use crate::game::{Outcome, Session};
use crate::{Coords, Result, TermInt};

const BORDER_CHAR: char = '#';

const BORDER_COLOR: Color = Color::Blue;
const SNAKE_COLOR: Color = Color::Green;
const FOOD_COLOR: Color = Color::Red;
const TEXT_COLOR: Color = Color::Green;

const TITLE: [&str; 5] = [
    "#####  #   #   ###   #   #  #####",
    "#      ##  #  #   #  # ##   #",
    "#####  # # #  #####  ##     ###",
    "    #  #  ##  #   #  # ##   #",
    "#####  #   #  #   #  #   #  #####",
];

/// Draws the game with cursor-addressed writes.
///
/// Only cells that change are written: the board frame and title once, then
/// per frame the snake, the food and the score. The renderer remembers where
/// the snake was drawn last so it can blank cells the body has left.
pub struct Renderer<W: Write> {
    out: W,
    drawn_snake: Vec<Coords>,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Renderer { out, drawn_snake: vec![] }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Static parts of the screen: title banner above the board and the border.
    pub fn draw_board(&mut self, arena: &Arena) -> Result<()> {
        let (x0, y0) = arena.origin();
        let title_x = x0 + arena.width() / 2 - 15;
        let title_y = y0 - TITLE.len() as TermInt - 1;

        if title_y >= 0 {
            for (i, line) in TITLE.iter().enumerate() {
                self.print_at((title_x, title_y + i as TermInt), TEXT_COLOR, line)?;
            }
        }

        for pos in arena.border_cells() {
            self.put(pos, BORDER_COLOR, BORDER_CHAR)?;
        }

        Ok(())
    }

    /// One frame: blank the cells the snake left, redraw snake, food and score.
    pub fn draw_frame<R>(&mut self, session: &Session<R>) -> Result<()> {
        let arena = session.arena();
        let snake = session.snake();

        let stale: Vec<Coords> = self
            .drawn_snake
            .iter()
            .copied()
            .filter(|&pos| !snake.occupies(pos) && pos != session.food().pos())
            .collect();
        for pos in stale {
            self.erase(arena, pos)?;
        }

        for (i, segment) in snake.segments().iter().enumerate() {
            self.put(segment.pos, SNAKE_COLOR, snake.glyph_at(i))?;
        }
        self.drawn_snake.clear();
        self.drawn_snake.extend(snake.positions());

        let food = session.food();
        if !snake.occupies(food.pos()) {
            self.put(food.pos(), FOOD_COLOR, food.glyph())?;
        }

        self.draw_score(arena, session.score())?;
        self.flush()
    }

    pub fn draw_score(&mut self, arena: &Arena, score: u32) -> Result<()> {
        let (x0, y0) = arena.origin();
        let text = format!("Score: {}", score);
        self.print_at((x0 + arena.width() / 2 - 4, y0 + arena.height()), TEXT_COLOR, &text)
    }

    /// Final message, centered in the board.
    pub fn draw_outcome(&mut self, arena: &Arena, outcome: Outcome) -> Result<()> {
        let text = outcome.message();
        let (x0, y0) = arena.origin();
        let x = x0 + arena.width() / 2 - text.len() as TermInt / 2;
        let y = y0 + arena.height() / 2 - 2;
        self.print_at((x, y), Color::Reset, text)?;
        self.flush()
    }

    /// Parks the cursor on the last terminal row so the shell prompt lands
    /// below the board.
    pub fn park_cursor(&mut self, rows: u16) -> Result<()> {
        queue!(self.out, cursor::MoveTo(0, rows.saturating_sub(1)), Print("\r\n"))?;
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn erase(&mut self, arena: &Arena, pos: Coords) -> Result<()> {
        if arena.is_border(pos) {
            self.put(pos, BORDER_COLOR, BORDER_CHAR)
        } else {
            self.put(pos, Color::Reset, ' ')
        }
    }

    fn put(&mut self, pos: Coords, color: Color, ch: char) -> Result<()> {
        if let Some((x, y)) = to_screen(pos) {
            queue!(self.out, cursor::MoveTo(x, y), SetForegroundColor(color), Print(ch), ResetColor)?;
        }
        Ok(())
    }

    fn print_at(&mut self, pos: Coords, color: Color, text: &str) -> Result<()> {
        if let Some((x, y)) = to_screen(pos) {
            queue!(self.out, cursor::MoveTo(x, y), SetForegroundColor(color), Print(text), ResetColor)?;
        }
        Ok(())
    }
}

fn to_screen(pos: Coords) -> Option<(u16, u16)> {
    Some((u16::try_from(pos.0).ok()?, u16::try_from(pos.1).ok()?))
}
