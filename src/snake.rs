use std::mem;

use crate::{Coords, GridInt};
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn unit_vector(self) -> (GridInt, GridInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

pub struct Snake {
    head: Coords,
    segments: Vec<Coords>, // head-to-tail order
    facing: Direction,
}

impl Snake {
    pub fn new(head: Coords, size: usize, facing: Direction) -> Self {
        // The body trails away from the head, opposite the facing direction.
        let (dx, dy) = facing.opposite().unit_vector();
        let segments = (1..size as GridInt)
            .map(|i| (head.0 + dx * i, head.1 + dy * i))
            .collect();

        Snake { head, segments, facing }
    }

    pub fn head(&self) -> Coords {
        self.head
    }

    pub fn segments(&self) -> &[Coords] {
        &self.segments
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn len(&self) -> usize {
        self.segments.len() + 1
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.head == pos || self.segments.contains(&pos)
    }

    /// Moves one cell along `dir`: the head leads and every segment shifts
    /// into the cell previously held by the one in front of it. Returns the
    /// vacated tail cell, which `grow` can re-attach on the same tick.
    pub fn advance(&mut self, dir: Direction) -> Coords {
        let (dx, dy) = dir.unit_vector();
        let mut carry = self.head;
        self.head = (self.head.0 + dx, self.head.1 + dy);

        for segment in &mut self.segments {
            mem::swap(segment, &mut carry);
        }

        carry
    }

    /// Turns towards `dir` and moves one cell. A turn equal to the current
    /// facing or its direct opposite is ignored and the snake continues
    /// straight instead.
    pub fn steer(&mut self, dir: Direction) -> Coords {
        if dir == self.facing || dir == self.facing.opposite() {
            self.advance(self.facing)
        } else {
            self.facing = dir;
            self.advance(dir)
        }
    }

    pub fn grow(&mut self, tail: Coords) {
        self.segments.push(tail);
    }

    #[cfg(test)]
    pub fn from_parts(head: Coords, segments: Vec<Coords>, facing: Direction) -> Self {
        Snake { head, segments, facing }
    }
}
