use sdl2::pixels::Color;
use serde::{Deserialize, Serialize};

/// An RGB color as stored in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorData {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorData {
    pub fn to_color(self) -> Color {
        Color::RGB(self.r, self.g, self.b)
    }
}

/// Game configuration loaded from `assets/config/game.json`.
///
/// All dimensions are in world units. The defaults reproduce the
/// built-in tuning, so the game runs without a config file present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub square_size: f32,
    pub sectors: u32,
    /// Descent speed in world units per frame.
    pub fall_speed: f32,
    pub background: ColorData,
    /// Colors a freshly spawned square may take, chosen uniformly.
    pub palette: Vec<ColorData>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            playfield_width: 250.0,
            playfield_height: 600.0,
            square_size: 60.0,
            sectors: 4,
            fall_speed: 2.0,
            background: ColorData { r: 255, g: 255, b: 255 },
            palette: vec![
                ColorData { r: 255, g: 0, b: 0 },
                ColorData { r: 0, g: 255, b: 0 },
                ColorData { r: 0, g: 0, b: 255 },
                ColorData { r: 255, g: 255, b: 0 },
                ColorData { r: 255, g: 0, b: 255 },
                ColorData { r: 0, g: 255, b: 255 },
                ColorData { r: 128, g: 0, b: 0 },
                ColorData { r: 0, g: 128, b: 0 },
                ColorData { r: 0, g: 0, b: 128 },
                ColorData { r: 128, g: 128, b: 0 },
            ],
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Reject configs the game cannot run with.
    ///
    /// Checks that all dimensions are positive, that at least one sector
    /// and one palette color exist, and that a square fits inside the
    /// playfield.
    pub fn validate(&self) -> Result<(), String> {
        if self.playfield_width <= 0.0 || self.playfield_height <= 0.0 {
            return Err(format!(
                "playfield dimensions must be positive (got {}x{})",
                self.playfield_width, self.playfield_height
            ));
        }
        if self.square_size <= 0.0 {
            return Err(format!("square_size must be positive (got {})", self.square_size));
        }
        if self.fall_speed <= 0.0 {
            return Err(format!("fall_speed must be positive (got {})", self.fall_speed));
        }
        if self.sectors == 0 {
            return Err("sectors must be at least 1".to_string());
        }
        if self.square_size > self.playfield_width {
            return Err(format!(
                "square_size {} does not fit in playfield width {}",
                self.square_size, self.playfield_width
            ));
        }
        if self.square_size > self.playfield_height {
            return Err(format!(
                "square_size {} does not fit in playfield height {}",
                self.square_size, self.playfield_height
            ));
        }
        if self.palette.is_empty() {
            return Err("palette must contain at least one color".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_matches_source_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.playfield_width, 250.0);
        assert_eq!(config.playfield_height, 600.0);
        assert_eq!(config.square_size, 60.0);
        assert_eq!(config.sectors, 4);
        assert_eq!(config.fall_speed, 2.0);
        assert_eq!(config.palette.len(), 10);
    }

    #[test]
    fn test_parse_from_json() {
        let json = r#"{
            "playfield_width": 250.0,
            "playfield_height": 600.0,
            "square_size": 60.0,
            "sectors": 4,
            "fall_speed": 2.0,
            "background": { "r": 255, "g": 255, "b": 255 },
            "palette": [
                { "r": 255, "g": 0, "b": 0 },
                { "r": 0, "g": 255, "b": 0 }
            ]
        }"#;

        let config: GameConfig = serde_json::from_str(json).expect("config should parse");
        assert!(config.validate().is_ok());
        assert_eq!(config.palette.len(), 2);
        assert_eq!(config.palette[1].to_color(), Color::RGB(0, 255, 0));
    }

    #[test]
    fn test_zero_sectors_rejected() {
        let config = GameConfig {
            sectors: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_square_rejected() {
        let config = GameConfig {
            square_size: 300.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_palette_rejected() {
        let config = GameConfig {
            palette: Vec::new(),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_fall_speed_rejected() {
        let config = GameConfig {
            fall_speed: -2.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
