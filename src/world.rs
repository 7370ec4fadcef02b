use crate::config::GameConfig;
use crate::playfield::Playfield;
use crate::square::{Direction, Square};
use rand::Rng;
use sdl2::pixels::Color;
use std::time::Instant;

/// GameWorld owns all game state.
///
/// The host loop drives it with one `tick` per frame and applies input
/// actions through `shift_active`; rendering reads it without mutating.
pub struct GameWorld {
    pub playfield: Playfield,
    /// The square currently under player control, if any.
    pub active_square: Option<Square>,
    /// Squares that have finished descending, in landing order.
    /// Append-only; kept around for rendering only.
    pub stacked_squares: Vec<Square>,
    /// Gates both `tick` and `shift_active`. Nothing in gameplay sets it.
    pub game_over: bool,
    pub background: Color,
    fall_speed: f32,
    palette: Vec<Color>,
    started_at: Instant,
}

impl GameWorld {
    /// Create a world from the config and spawn the first square.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let mut world = GameWorld {
            playfield: Playfield::from_config(config),
            active_square: None,
            stacked_squares: Vec::new(),
            game_over: false,
            background: config.background.to_color(),
            fall_speed: config.fall_speed,
            palette: config.palette.iter().map(|c| c.to_color()).collect(),
            started_at: Instant::now(),
        };
        world.spawn_square(rng);
        world
    }

    /// Spawn a new active square at the top of a random sector with a
    /// random palette color.
    pub fn spawn_square<R: Rng>(&mut self, rng: &mut R) {
        let sector = rng.gen_range(0..self.playfield.sectors);
        let color = self.palette[rng.gen_range(0..self.palette.len())];

        self.active_square = Some(Square::new(
            self.playfield.sector_center_x(sector),
            self.playfield.spawn_y(),
            self.playfield.square_size,
            color,
            self.fall_speed,
        ));
    }

    /// Advance the world by one frame.
    ///
    /// Descends the active square; when it reaches the floor it is snapped
    /// to the landing threshold, moved into `stacked_squares`, and a new
    /// square is spawned. No-op when the game is over or no square is
    /// active.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        if self.game_over {
            return;
        }

        if let Some(mut square) = self.active_square.take() {
            square.descend();

            let floor_y = self.playfield.floor_y();
            if square.has_landed(floor_y) {
                square.y = floor_y;
                self.stacked_squares.push(square);
                self.spawn_square(rng);
            } else {
                self.active_square = Some(square);
            }
        }
    }

    /// Move the active square one sector width left or right, clamped to
    /// the playfield. No-op when the game is over or no square is active.
    pub fn shift_active(&mut self, direction: Direction) {
        if self.game_over {
            return;
        }

        if let Some(square) = self.active_square.as_mut() {
            square.shift_by(direction.sign() * self.playfield.sector_width());
            square.x = self.playfield.clamp_x(square.x);
        }
    }

    /// Seconds since the world was created.
    pub fn elapsed_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
