use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring position one step in `direction`. No bounds checking.
    pub fn moved(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position { x: self.x + dx, y: self.y + dy }
    }

    /// Move this position one step in `direction`.
    pub fn step(&mut self, direction: Direction) {
        *self = self.moved(direction);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit (dx, dy) offset. Up decreases y, Right increases x.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse a console key (`U`, `D`, `L`, `R`, any case).
    pub fn from_key(key: char) -> Option<Direction> {
        match key.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Obstacle,
    Gem,
}

impl Cell {
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "-",
            Cell::Obstacle => "O",
            Cell::Gem => "G",
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}
