use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::types::{Board, Direction, Point};

#[derive(Clone, Copy, Eq, PartialEq)]
struct SearchNode {
    pos: Point,
    g_cost: u32,
    h_cost: u32,
    order: u64,
}

impl SearchNode {
    fn f_cost(&self) -> u32 {
        self.g_cost + self.h_cost
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: lowest f, then lowest h, then oldest first.
        other
            .f_cost()
            .cmp(&self.f_cost())
            .then_with(|| other.h_cost.cmp(&self.h_cost))
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first search from `start` to `goal`, scored by steps taken plus
/// Manhattan distance. Returns the direction of the first step on the path.
///
/// `blocked` cells are never entered; `forbidden` is excluded as the very
/// first step (the snake cannot reverse).
pub fn find_first_step(
    board: &Board,
    start: Point,
    goal: Point,
    blocked: &HashSet<Point>,
    forbidden: Option<Direction>,
) -> Option<Direction> {
    if start == goal || !board.contains(goal) || blocked.contains(&goal) {
        return None;
    }

    let mut open_set = BinaryHeap::new();
    let mut visited: HashSet<Point> = HashSet::new();
    let mut came_from: HashMap<Point, Point> = HashMap::new();
    let mut best_g: HashMap<Point, u32> = HashMap::new();
    let mut order = 0u64;

    open_set.push(SearchNode {
        pos: start,
        g_cost: 0,
        h_cost: start.manhattan_distance(goal),
        order,
    });
    best_g.insert(start, 0);

    while let Some(current) = open_set.pop() {
        if current.pos == goal {
            return first_step(&came_from, start, goal);
        }

        if !visited.insert(current.pos) {
            continue;
        }

        for direction in Direction::ALL {
            if current.pos == start && Some(direction) == forbidden {
                continue;
            }

            let next = current.pos.step(direction);
            if !board.contains(next) || blocked.contains(&next) || visited.contains(&next) {
                continue;
            }

            let g_cost = current.g_cost + 1;
            if best_g.get(&next).is_some_and(|&known| known <= g_cost) {
                continue;
            }
            best_g.insert(next, g_cost);
            came_from.insert(next, current.pos);

            order += 1;
            open_set.push(SearchNode {
                pos: next,
                g_cost,
                h_cost: next.manhattan_distance(goal),
                order,
            });
        }
    }

    None
}

fn first_step(came_from: &HashMap<Point, Point>, start: Point, goal: Point) -> Option<Direction> {
    let mut step = goal;
    while let Some(&parent) = came_from.get(&step) {
        if parent == start {
            return Direction::ALL
                .into_iter()
                .find(|direction| start.step(*direction) == step);
        }
        step = parent;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(8, 8, 10)
    }

    #[test]
    fn test_straight_line_goal() {
        let step = find_first_step(
            &board(),
            Point::new(1, 1),
            Point::new(5, 1),
            &HashSet::new(),
            None,
        );

        assert_eq!(step, Some(Direction::Right));
    }

    #[test]
    fn test_goes_around_wall() {
        // Vertical wall at x = 2 from y = 0 to y = 6, open at the bottom.
        let blocked: HashSet<Point> = (0..7).map(|y| Point::new(2, y)).collect();

        let step = find_first_step(
            &board(),
            Point::new(1, 0),
            Point::new(3, 0),
            &blocked,
            None,
        );

        assert_eq!(step, Some(Direction::Down));
    }

    #[test]
    fn test_forbidden_first_step_is_avoided() {
        let step = find_first_step(
            &board(),
            Point::new(3, 3),
            Point::new(0, 3),
            &HashSet::new(),
            Some(Direction::Left),
        );

        assert!(matches!(step, Some(Direction::Up) | Some(Direction::Down)));
    }

    #[test]
    fn test_enclosed_goal_has_no_path() {
        let goal = Point::new(5, 5);
        let blocked: HashSet<Point> = Direction::ALL.iter().map(|d| goal.step(*d)).collect();

        let step = find_first_step(&board(), Point::new(0, 0), goal, &blocked, None);

        assert_eq!(step, None);
    }

    #[test]
    fn test_goal_off_board_has_no_path() {
        let step = find_first_step(
            &board(),
            Point::new(0, 0),
            Point::new(8, 0),
            &HashSet::new(),
            None,
        );

        assert_eq!(step, None);
    }
}
