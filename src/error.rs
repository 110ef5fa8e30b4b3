//! Error types for configuration and frame stepping.

use std::fmt;

/// Which axis of a size failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => write!(f, "width"),
            Axis::Height => write!(f, "height"),
        }
    }
}

/// Invalid construction-time configuration. Raised before the simulation runs.
#[derive(Debug)]
pub enum ConfigError {
    /// Dot amount must be at least one.
    InvalidDotAmount(usize),
    /// A size has a non-positive or non-finite dimension.
    NonPositiveSize {
        what: &'static str,
        width: f64,
        height: f64,
    },
    /// The dot does not fit inside the canvas on one axis.
    DotExceedsCanvas { axis: Axis, dot: f64, canvas: f64 },
    /// Linking radius must be finite and non-negative.
    InvalidLinkingRadius(f64),
    /// Frame rate must be finite and positive.
    InvalidFrameRate(f64),
    /// Dot speed must be finite and non-negative.
    InvalidSpeed(f64),
    /// Config JSON could not be parsed.
    Parse(serde_json::Error),
    /// Config file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDotAmount(n) => {
                write!(f, "dot amount must be positive, got {}", n)
            }
            ConfigError::NonPositiveSize { what, width, height } => {
                write!(f, "{} must be positive, got {}x{}", what, width, height)
            }
            ConfigError::DotExceedsCanvas { axis, dot, canvas } => write!(
                f,
                "dot {} {} exceeds canvas {} {}",
                axis, dot, axis, canvas
            ),
            ConfigError::InvalidLinkingRadius(r) => {
                write!(f, "linking radius must be non-negative, got {}", r)
            }
            ConfigError::InvalidFrameRate(fps) => {
                write!(f, "frames per second must be positive, got {}", fps)
            }
            ConfigError::InvalidSpeed(s) => {
                write!(f, "dot speed must be non-negative, got {}", s)
            }
            ConfigError::Parse(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::Io(e) => write!(f, "Failed to read config file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// Errors surfaced by the simulation clock.
#[derive(Debug)]
pub enum SimError {
    /// Configuration was rejected; the simulation does not run.
    Config(ConfigError),
    /// The renderer is not ready yet. Transient: the tick is skipped and rescheduled.
    RendererUnavailable,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Config(e) => write!(f, "Invalid configuration: {}", e),
            SimError::RendererUnavailable => write!(f, "Renderer is not ready"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::Config(e) => Some(e),
            SimError::RendererUnavailable => None,
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::Config(e)
    }
}
