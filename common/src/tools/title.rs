use crate::games::snake::Direction;

pub const NUDGE_STEP_PX: f32 = 10.0;

/// Offset of the page title from its resting place, moved with arrow keys.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TitleOffset {
    pub left: f32,
    pub top: f32,
}

impl TitleOffset {
    pub fn nudge(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.left -= NUDGE_STEP_PX,
            Direction::Right => self.left += NUDGE_STEP_PX,
            Direction::Up => self.top -= NUDGE_STEP_PX,
            Direction::Down => self.top += NUDGE_STEP_PX,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nudges_accumulate() {
        let mut offset = TitleOffset::default();

        offset.nudge(Direction::Right);
        offset.nudge(Direction::Right);
        offset.nudge(Direction::Up);

        assert_eq!(offset, TitleOffset { left: 20.0, top: -10.0 });
    }

    #[test]
    fn test_opposite_nudges_cancel() {
        let mut offset = TitleOffset::default();

        offset.nudge(Direction::Down);
        offset.nudge(Direction::Up);
        offset.nudge(Direction::Left);
        offset.nudge(Direction::Right);

        assert_eq!(offset, TitleOffset::default());
    }
}
