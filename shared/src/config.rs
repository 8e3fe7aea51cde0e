use crate::geometry::SurfaceSize;
use crate::palette::BallSize;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "BOUNCER_CONFIG";

/// Animation configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnimationConfig {
    pub surface_width: i32,
    pub surface_height: i32,
    /// Sleep between two ticks of one ball (milliseconds)
    pub tick_interval_ms: u64,
    /// Fixed seed for ball placement; `None` seeds from entropy
    pub rng_seed: Option<u64>,
    /// Capacity of the command channel into the animation loop
    pub command_buffer: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            surface_width: 720,
            surface_height: 720,
            tick_interval_ms: 10,
            rng_seed: None,
            command_buffer: 64,
        }
    }
}

impl AnimationConfig {
    pub fn surface(&self) -> SurfaceSize {
        SurfaceSize::new(self.surface_width, self.surface_height)
    }

    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.surface_width <= 0 || self.surface_height <= 0 {
            return Err("surface dimensions must be > 0".to_string());
        }
        let extent = BallSize::max_extent();
        if self.surface_width < extent || self.surface_height < extent {
            return Err(format!(
                "surface {}x{} cannot hold the largest ball ({}px)",
                self.surface_width, self.surface_height, extent
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be > 0".to_string());
        }
        if self.command_buffer == 0 {
            return Err("command_buffer must be > 0".to_string());
        }
        Ok(())
    }

    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("invalid config: {}", e))
    }

    /// Load from the file named by `BOUNCER_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self, String> {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read {}: {}", path, e))?;
        Self::from_json(&text)
    }
}
