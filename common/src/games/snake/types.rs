use serde::{Deserialize, Serialize};

/// A cell on the board, in grid units. Signed so that a step past the edge
/// is representable and can be reported as a wall collision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Point {
        let (dx, dy) = direction.offset();
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan_distance(&self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector in screen coordinates: y grows downwards.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutopilotKind {
    /// Walks the axis with the larger offset toward the food.
    Greedy,
    /// Best-first search over the grid to the food.
    Pathfinding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Playing field. Cells are `cell_size` pixels wide; `columns` x `rows` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub columns: i32,
    pub rows: i32,
    pub cell_size: u32,
}

impl Board {
    pub const CELLS_ACROSS_SHORT_SIDE: u32 = 40;

    pub fn new(columns: i32, rows: i32, cell_size: u32) -> Self {
        Self {
            columns,
            rows,
            cell_size,
        }
    }

    /// Fits a board into a canvas: the shorter side holds forty cells and
    /// partial cells at the far edges are dropped.
    pub fn from_canvas(width_px: u32, height_px: u32) -> Self {
        let cell_size = (width_px.min(height_px) / Self::CELLS_ACROSS_SHORT_SIDE).max(1);
        Self {
            columns: (width_px / cell_size) as i32,
            rows: (height_px / cell_size) as i32,
            cell_size,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && point.x < self.columns && point.y < self.rows
    }

    pub fn cell_count(&self) -> usize {
        (self.columns.max(0) as usize) * (self.rows.max(0) as usize)
    }

    pub fn center(&self) -> Point {
        Point::new(self.columns / 2, self.rows / 2)
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.columns).map(move |x| Point::new(x, y)))
    }

    /// Top-left pixel of a cell.
    pub fn to_pixels(&self, point: Point) -> (i64, i64) {
        let size = self.cell_size as i64;
        (point.x as i64 * size, point.y as i64 * size)
    }

    pub fn width_px(&self) -> u32 {
        self.columns.max(0) as u32 * self.cell_size
    }

    pub fn height_px(&self) -> u32 {
        self.rows.max(0) as u32 * self.cell_size
    }
}
