use crate::geometry::Position;
use Heading::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right
}

impl Heading {
    pub fn opposite(self) -> Heading {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Unit step on screen axes, y growing downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Position>,
    heading: Heading,
    step: i32,
    reversal_guard: bool,
}

impl Snake {
    pub fn new(head: Position, heading: Heading, step: i32) -> Self {
        Snake { body: vec![head], heading, step, reversal_guard: false }
    }

    /// Ignore headings that point straight back into the neck.
    pub fn with_reversal_guard(mut self, enabled: bool) -> Self {
        self.reversal_guard = enabled;
        self
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Heading) {
        if self.reversal_guard && self.body.len() > 1 && heading == self.heading.opposite() {
            return;
        }
        self.heading = heading;
    }

    /// Every segment takes its predecessor's place, then the head steps one cell.
    pub fn advance(&mut self) {
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }

        let (dx, dy) = self.heading.delta();
        self.body[0] = self.body[0].offset(dx * self.step, dy * self.step);
    }

    pub fn grow(&mut self) {
        self.body.push(Position::OFF_BOARD);
    }

    #[cfg(test)]
    pub(crate) fn from_segments(body: Vec<Position>, heading: Heading, step: i32) -> Self {
        assert!(!body.is_empty());
        Snake { body, heading, step, reversal_guard: false }
    }
}
