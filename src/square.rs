use sdl2::pixels::Color;

/// Horizontal movement direction for the active square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign of the movement along the x axis.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// A single colored square.
///
/// Position is the square's center in world units. Size, color, and
/// descent speed are fixed at spawn time; only the position mutates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
    pub fall_speed: f32,
}

impl Square {
    pub fn new(x: f32, y: f32, size: f32, color: Color, fall_speed: f32) -> Self {
        Square {
            x,
            y,
            size,
            color,
            fall_speed,
        }
    }

    /// Move down by one frame's worth of descent.
    pub fn descend(&mut self) {
        self.y -= self.fall_speed;
    }

    /// Shift horizontally by `dx` world units (unclamped; the caller
    /// clamps against the playfield).
    pub fn shift_by(&mut self, dx: f32) {
        self.x += dx;
    }

    /// Whether the square has reached the landing threshold.
    pub fn has_landed(&self, floor_y: f32) -> bool {
        self.y <= floor_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Square {
        Square::new(0.0, 270.0, 60.0, Color::RGB(255, 0, 0), 2.0)
    }

    #[test]
    fn test_descend_steps_by_fall_speed() {
        let mut square = square();
        square.descend();
        assert_eq!(square.y, 268.0);
        square.descend();
        assert_eq!(square.y, 266.0);
        // x untouched by descent
        assert_eq!(square.x, 0.0);
    }

    #[test]
    fn test_shift_by_moves_x_only() {
        let mut square = square();
        square.shift_by(62.5);
        assert_eq!(square.x, 62.5);
        square.shift_by(-125.0);
        assert_eq!(square.x, -62.5);
        assert_eq!(square.y, 270.0);
    }

    #[test]
    fn test_has_landed_at_threshold() {
        let mut square = square();
        assert!(!square.has_landed(-270.0));

        square.y = -269.9;
        assert!(!square.has_landed(-270.0));

        square.y = -270.0;
        assert!(square.has_landed(-270.0));

        // Overshoot past the threshold still counts as landed
        square.y = -271.3;
        assert!(square.has_landed(-270.0));
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::Right.sign(), 1.0);
    }
}
