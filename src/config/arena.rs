use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl ArenaConfig {
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ArenaConfig;

    #[test]
    fn shipped_config_matches_the_defaults() {
        let shipped: ArenaConfig = ron::de::from_str(include_str!("../../config/arena.ron")).unwrap();
        let defaults = ArenaConfig::default();

        assert_eq!(shipped.width, defaults.width);
        assert_eq!(shipped.height, defaults.height);
        assert_eq!(shipped.center_x(), 400.0);
        assert_eq!(shipped.center_y(), 300.0);
    }
}
