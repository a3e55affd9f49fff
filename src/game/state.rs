use super::direction::Direction;

/// A grid-aligned pixel position on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point one block away in the given direction
    pub fn stepped(&self, direction: Direction, block_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * block_size,
            y: self.y + dy * block_size,
        }
    }
}

/// The snake: body segments with the head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Point>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake of the given length, head first, trailing away from
    /// the direction of movement.
    pub fn new(head: Point, direction: Direction, length: usize, block_size: i32) -> Self {
        let mut body = vec![head];
        let (dx, dy) = direction.delta();

        for i in 1..length {
            let prev = body[i - 1];
            body.push(Point::new(prev.x - dx * block_size, prev.y - dy * block_size));
        }

        Self { body, direction }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    /// Whether the point lies on any existing body segment
    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// Advance by one block: prepend the new head and, unless growing,
    /// drop the tail.
    pub fn advance(&mut self, block_size: i32, grow: bool) {
        let new_head = self.head().stepped(self.direction, block_size);
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the playfield
    Wall,
    /// Head ran into the body
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Point,
    pub width: i32,
    pub height: i32,
    pub block_size: i32,
    pub score: u32,
    /// Current interval between moves, in milliseconds
    pub speed_ms: u64,
    pub running: bool,
}

impl GameState {
    pub fn new(
        snake: Snake,
        food: Point,
        width: i32,
        height: i32,
        block_size: i32,
        speed_ms: u64,
    ) -> Self {
        Self {
            snake,
            food,
            width,
            height,
            block_size,
            score: 0,
            speed_ms,
            running: true,
        }
    }

    /// Whether the point lies within [0, width) x [0, height)
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }
}
