use super::input::Direction;

#[derive(Debug, Clone)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Distance moved per frame
    pub max_speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, max_speed: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            max_speed,
        }
    }

    /// Move one step and clamp into `[0, field_height - height]`
    pub fn move_paddle(&mut self, direction: Direction, field_height: f32) {
        match direction {
            Direction::Up => self.y -= self.max_speed,
            Direction::Down => self.y += self.max_speed,
        }

        self.y = self.y.min(field_height - self.height).max(0.0);
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
