use std::collections::{HashSet, VecDeque};

use super::types::{DeathReason, Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub body_set: HashSet<Point>,
    /// `None` until the first turn; an idle snake does not move.
    pub direction: Option<Direction>,
    pub pending_direction: Option<Direction>,
    pub death_reason: Option<DeathReason>,
    pub score: u32,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        Self::with_body(vec![start_pos], None)
    }

    /// Builds a snake from segments ordered head first.
    pub fn with_body(segments: Vec<Point>, direction: Option<Direction>) -> Self {
        assert!(!segments.is_empty(), "Snake needs at least one segment");

        let body_set = segments.iter().copied().collect();
        Self {
            body: segments.into_iter().collect(),
            body_set,
            direction,
            pending_direction: None,
            death_reason: None,
            score: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.death_reason.is_none()
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    /// Queues a turn for the next tick. Reversing into the current heading is
    /// ignored.
    pub fn queue_direction(&mut self, direction: Direction) -> bool {
        if !self.is_alive() {
            return false;
        }
        if let Some(current) = self.direction
            && direction.is_opposite(&current)
        {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = Some(direction);
        }
    }

    /// Moves the head to `next_head`. The tail is released first unless the
    /// snake grows, so the head may enter the cell the tail just left.
    pub fn advance(&mut self, next_head: Point, grow: bool) {
        if !grow {
            let tail = self
                .body
                .pop_back()
                .expect("Snake body should never be empty");
            self.body_set.remove(&tail);
        }
        self.body.push_front(next_head);
        self.body_set.insert(next_head);
    }
}
