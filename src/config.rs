use serde::Deserialize;
use std::fmt;
use std::path::Path;

const LAYOUT_JSON: &str = include_str!("../assets/layout.json");

/// Environment variable naming a JSON file that replaces the embedded layout config
pub const CONFIG_ENV_VAR: &str = "FLOW_GRAPH_CONFIG";

/// How a step applies the forces it computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integration {
    /// Sweep nodes in index order, each node sees positions already moved this step
    #[default]
    InPlace,
    /// Compute every force from a snapshot taken at the start of the step
    Buffered,
}

/// Error types for layout configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidForce { field: &'static str, value: f32 },
    ProbabilityOutOfRange(f32),
    InvalidCollisionThreshold(f32),
    InvalidScatterRadius(f32),
    SelfLoop(usize),
    Parse(String),
    Io(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidForce { field, value } => {
                write!(f, "{} must be finite and >= 0 (got {})", field, value)
            }
            ConfigError::ProbabilityOutOfRange(p) => {
                write!(f, "connection_probability must be within [0, 1] (got {})", p)
            }
            ConfigError::InvalidCollisionThreshold(t) => {
                write!(f, "collision_threshold must be finite and > 0 (got {})", t)
            }
            ConfigError::InvalidScatterRadius(r) => {
                write!(f, "scatter_radius must be finite and >= 0 (got {})", r)
            }
            ConfigError::SelfLoop(node) => write!(f, "Node {} cannot be connected to itself", node),
            ConfigError::Parse(msg) => write!(f, "Could not parse layout config: {}", msg),
            ConfigError::Io(msg) => write!(f, "Could not read layout config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parameters of a layout simulation, fixed once the simulation is built
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub node_count: usize,
    /// Spring strength pulling adjacent nodes together (grows with distance)
    pub attraction_force: f32,
    /// Inverse-distance push between nodes that are not adjacent
    pub repulsion_force: f32,
    /// Push between adjacent nodes closer than `collision_threshold`
    pub collision_repulsion_force: f32,
    pub connection_probability: f32,
    pub collision_threshold: f32,
    /// Radius of the ball initial positions are scattered in
    pub scatter_radius: f32,
    /// Fixed seed for reproducible graphs; `None` draws from the thread RNG
    pub seed: Option<u64>,
    pub integration: Integration,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            node_count: 10,
            attraction_force: 0.01,
            repulsion_force: 0.05,
            collision_repulsion_force: 10.0,
            connection_probability: 0.2,
            collision_threshold: 1.0,
            scatter_radius: 5.0,
            seed: None,
            integration: Integration::InPlace,
        }
    }
}

impl LayoutConfig {
    /// Check every parameter is inside its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let forces = [
            ("attraction_force", self.attraction_force),
            ("repulsion_force", self.repulsion_force),
            ("collision_repulsion_force", self.collision_repulsion_force),
        ];
        for (field, value) in forces {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidForce { field, value });
            }
        }

        // NaN fails `contains`
        if !(0.0..=1.0).contains(&self.connection_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(
                self.connection_probability,
            ));
        }

        if !self.collision_threshold.is_finite() || self.collision_threshold <= 0.0 {
            return Err(ConfigError::InvalidCollisionThreshold(
                self.collision_threshold,
            ));
        }

        if !self.scatter_radius.is_finite() || self.scatter_radius < 0.0 {
            return Err(ConfigError::InvalidScatterRadius(self.scatter_radius));
        }

        Ok(())
    }

    /// Parse and validate a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Load the config from `FLOW_GRAPH_CONFIG` if set, else from the embedded asset.
    ///
    /// Never fails: a broken override falls back to the embedded config, and a
    /// broken embedded config falls back to `LayoutConfig::default()`.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            match Self::from_path(&path) {
                Ok(config) => {
                    log::info!("Loaded layout config from {}", path);
                    return config;
                }
                Err(err) => log::warn!("{} - using embedded layout config", err),
            }
        }

        Self::from_json(LAYOUT_JSON).unwrap_or_else(|err| {
            log::warn!("{} - using built-in defaults", err);
            LayoutConfig::default()
        })
    }
}
