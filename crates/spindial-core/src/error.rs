use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("easing must be in (0, 1], got {0}")]
    Easing(f64),
    #[error("snap threshold must be in [0, 0.5), got {0}")]
    SnapThreshold(f64),
    #[error("clicks per revolution must be positive")]
    ClicksPerRevolution,
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("motion smoothing must be in (0, 1], got {0}")]
    MotionSmoothing(f64),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Item set at position {0} has an empty name")]
    EmptyName(usize),
    #[error("Duplicate item set name: {0}")]
    DuplicateName(String),
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AudioError {
    #[error("Audio context unavailable: {0}")]
    Context(String),
    #[error("Failed to load {asset}: {reason}")]
    Load { asset: &'static str, reason: String },
    #[error("Voice error: {0}")]
    Voice(String),
}
