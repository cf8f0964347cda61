use crate::arena::Arena;
use crate::{Coords, TermInt};
use Direction::*;

pub const MIN_LENGTH: usize = 3;

const HEAD: usize = 0;

const TAIL_CHAR: char = '~';
const DIGESTING_CHAR: char = '@';
const BODY_CHAR: char = '*';

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One step in this direction. Horizontal steps are two columns wide so
    /// that movement looks square on cells that are taller than wide.
    pub fn delta(self) -> (TermInt, TermInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-2, 0),
            Right => (2, 0),
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Segment {
    pub pos: Coords,
    pub dir: Direction,
}

/// The body is stored head first. Head and tail are the first and last
/// elements; the digestion marker is an index into the same vector.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Segment>,
    pending: Option<Direction>,
    digesting: Option<usize>,
}

impl Snake {
    /// Lays out `len` segments trailing behind `head`, all facing `direction`.
    pub fn new(head: Coords, len: usize, direction: Direction) -> Self {
        let len = len.max(MIN_LENGTH);
        let (dx, dy) = direction.delta();

        let body = (0..len as TermInt)
            .map(|i| Segment { pos: (head.0 - dx * i, head.1 - dy * i), dir: direction })
            .collect();

        Snake { body, pending: None, digesting: None }
    }

    /// Builds a snake from explicit segments, head first.
    ///
    /// Returns `None` for fewer than `MIN_LENGTH` segments.
    pub fn from_segments(body: Vec<Segment>) -> Option<Self> {
        if body.len() < MIN_LENGTH {
            return None;
        }
        Some(Snake { body, pending: None, digesting: None })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.body
    }

    pub fn positions(&self) -> impl Iterator<Item = Coords> + '_ {
        self.body.iter().map(|s| s.pos)
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn head(&self) -> &Segment {
        &self.body[HEAD]
    }

    pub fn tail(&self) -> &Segment {
        &self.body[self.tail_index()]
    }

    pub fn direction(&self) -> Direction {
        self.head().dir
    }

    pub fn digesting(&self) -> Option<usize> {
        self.digesting
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.body.iter().any(|s| s.pos == pos)
    }

    /// Latches a new heading for the head. It takes effect on the next tick.
    pub fn move_head(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Advances the whole body by one step.
    pub fn tick(&mut self) {
        // Walk tail to head so every segment reads its predecessor's old state.
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        let head = &mut self.body[HEAD];
        if let Some(dir) = self.pending.take() {
            head.dir = dir;
        }

        let (dx, dy) = head.dir.delta();
        head.pos = (head.pos.0 + dx, head.pos.1 + dy);
    }

    /// Adds one segment between the tail's predecessor and the tail, one step
    /// behind the tail.
    pub fn grow(&mut self) {
        let tail = *self.tail();
        let (dx, dy) = tail.dir.delta();
        let segment = Segment { pos: (tail.pos.0 - dx, tail.pos.1 - dy), dir: tail.dir };
        let at = self.tail_index();
        self.body.insert(at, segment);
    }

    /// Starts digesting food the head has just reached.
    ///
    /// The marker starts right behind the head. Eating again while a bulge is
    /// still travelling restarts it.
    pub fn digest(&mut self, food: Coords) -> bool {
        if self.head().pos != food {
            return false;
        }
        self.digesting = Some(HEAD + 1);
        true
    }

    /// Moves the digestion marker one segment tailward. Returns true when it
    /// lands on the tail: the marker is cleared and the snake should grow.
    pub fn advance_digestion(&mut self) -> bool {
        match self.digesting {
            Some(i) if i + 1 >= self.tail_index() => {
                self.digesting = None;
                true
            }
            Some(i) => {
                self.digesting = Some(i + 1);
                false
            }
            None => false,
        }
    }

    /// True if the head left the arena interior or ran into its own body.
    pub fn collides(&self, arena: &Arena) -> bool {
        let head = self.head().pos;
        !arena.contains(head) || self.body[1..].iter().any(|s| s.pos == head)
    }

    pub fn glyph_at(&self, index: usize) -> char {
        if index == HEAD {
            self.direction().head_char()
        } else if index == self.tail_index() {
            TAIL_CHAR
        } else if self.digesting == Some(index) {
            DIGESTING_CHAR
        } else {
            BODY_CHAR
        }
    }

    fn tail_index(&self) -> usize {
        self.body.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(snake: &Snake) -> Vec<TermInt> {
        snake.positions().map(|p| p.0).collect()
    }

    #[test]
    fn new_lays_segments_behind_head() {
        let snake = Snake::new((10, 5), 3, Right);
        assert_eq!(columns(&snake), vec![10, 8, 6]);
        assert!(snake.positions().all(|p| p.1 == 5));
        assert!(snake.segments().iter().all(|s| s.dir == Right));

        let snake = Snake::new((10, 5), 1, Up);
        assert_eq!(snake.len(), MIN_LENGTH);
        assert_eq!(snake.tail().pos, (10, 7));
    }

    #[test]
    fn from_segments_rejects_short_bodies() {
        let seg = Segment { pos: (0, 0), dir: Up };
        assert!(Snake::from_segments(vec![seg, seg]).is_none());
        assert!(Snake::from_segments(vec![seg, seg, seg]).is_some());
    }

    #[test]
    fn tick_propagates_positions() {
        let mut snake = Snake::new((10, 5), 3, Right);
        snake.tick();
        assert_eq!(columns(&snake), vec![12, 10, 8]);
    }

    #[test]
    fn tick_copies_predecessor_direction() {
        let mut snake = Snake::new((10, 5), 3, Right);
        snake.move_head(Down);
        snake.tick();

        let dirs: Vec<_> = snake.segments().iter().map(|s| s.dir).collect();
        assert_eq!(dirs, vec![Down, Right, Right]);
        assert_eq!(snake.head().pos, (10, 6));
        assert_eq!(snake.segments()[1].pos, (10, 5));

        snake.tick();
        let dirs: Vec<_> = snake.segments().iter().map(|s| s.dir).collect();
        assert_eq!(dirs, vec![Down, Down, Right]);
    }

    #[test]
    fn head_deltas_for_each_direction() {
        let cases = [(Up, (20, 9)), (Down, (20, 11)), (Left, (18, 10)), (Right, (22, 10))];

        for (dir, expected) in cases {
            // Start facing the same way so the head never folds onto its neck.
            let mut snake = Snake::new((20, 10), 3, dir);
            snake.move_head(dir);
            snake.tick();
            assert_eq!(snake.head().pos, expected, "{:?}", dir);
        }
    }

    #[test]
    fn direction_is_latched_until_tick() {
        let mut snake = Snake::new((10, 5), 3, Right);
        snake.move_head(Up);
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.head().pos, (10, 5));

        snake.tick();
        assert_eq!(snake.direction(), Up);
        assert_eq!(snake.head().pos, (10, 4));
    }

    #[test]
    fn last_latched_direction_wins() {
        let mut snake = Snake::new((10, 5), 3, Right);
        snake.move_head(Up);
        snake.move_head(Down);
        snake.tick();
        assert_eq!(snake.head().pos, (10, 6));
    }

    #[test]
    fn reversal_runs_into_neck() {
        let arena = Arena::new((0, 0), 40, 20);
        let mut snake = Snake::new((10, 5), 3, Right);
        snake.move_head(Left);
        snake.tick();
        assert_eq!(snake.direction(), Left);
        assert_eq!(snake.head().pos, (8, 5));
        assert_eq!(snake.segments()[2].pos, (8, 5));
        assert!(snake.collides(&arena));
    }

    #[test]
    fn grow_inserts_before_tail() {
        let mut snake = Snake::new((10, 5), 3, Right);
        let tail = *snake.tail();
        snake.grow();

        assert_eq!(snake.len(), 4);
        assert_eq!(*snake.tail(), tail);
        assert_eq!(snake.segments()[2].pos, (4, 5));
        assert_eq!(snake.head().pos, (10, 5));
    }

    #[test]
    fn digest_requires_head_on_food() {
        let mut snake = Snake::new((10, 5), 3, Right);
        assert!(!snake.digest((12, 5)));
        assert_eq!(snake.digesting(), None);

        assert!(snake.digest((10, 5)));
        assert_eq!(snake.digesting(), Some(1));
    }

    #[test]
    fn growth_waits_until_marker_reaches_tail() {
        for len in 3..8 {
            let mut snake = Snake::new((40, 5), len, Right);
            snake.digest((40, 5));

            let mut ticks = 0;
            loop {
                snake.tick();
                ticks += 1;
                if snake.advance_digestion() {
                    break;
                }
                assert_eq!(snake.len(), len);
            }
            snake.grow();

            assert_eq!(ticks, len - 2);
            assert_eq!(snake.len(), len + 1);
            assert_eq!(snake.digesting(), None);
        }
    }

    #[test]
    fn advance_without_food_is_noop() {
        let mut snake = Snake::new((10, 5), 3, Right);
        assert!(!snake.advance_digestion());
        assert_eq!(snake.digesting(), None);
    }

    #[test]
    fn wall_collision() {
        let arena = Arena::new((0, 0), 40, 20);

        let snake = Snake::new((0, 5), 3, Left);
        assert!(snake.collides(&arena));

        let snake = Snake::new((39, 5), 3, Right);
        assert!(snake.collides(&arena));

        let snake = Snake::new((20, 19), 3, Down);
        assert!(snake.collides(&arena));

        let snake = Snake::new((20, 0), 3, Up);
        assert!(snake.collides(&arena));

        let snake = Snake::new((38, 18), 3, Right);
        assert!(!snake.collides(&arena));
    }

    #[test]
    fn self_collision() {
        let arena = Arena::new((0, 0), 40, 20);
        let seg = |x, y| Segment { pos: (x, y), dir: Right };

        let snake = Snake::from_segments(vec![seg(10, 5), seg(10, 6), seg(8, 6), seg(8, 5), seg(10, 5)]).unwrap();
        assert!(snake.collides(&arena));

        let snake = Snake::from_segments(vec![seg(10, 5), seg(10, 6), seg(8, 6), seg(8, 5)]).unwrap();
        assert!(!snake.collides(&arena));
    }

    #[test]
    fn glyphs() {
        let mut snake = Snake::new((10, 5), 4, Right);
        assert_eq!(snake.glyph_at(0), '>');
        assert_eq!(snake.glyph_at(1), '*');
        assert_eq!(snake.glyph_at(3), '~');

        snake.digest((10, 5));
        assert_eq!(snake.glyph_at(1), '@');
        assert!(!snake.advance_digestion());
        assert_eq!(snake.glyph_at(1), '*');
        assert_eq!(snake.glyph_at(2), '@');

        // Reaching the tail clears the marker in the same step.
        assert!(snake.advance_digestion());
        assert_eq!(snake.digesting(), None);
        assert_eq!(snake.glyph_at(2), '*');
        assert_eq!(snake.glyph_at(3), '~');
    }
}
