use thiserror::Error;

/// Failure to parse a `#RRGGBB` / `#RGB` color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color `{0}` must have 3 or 6 hex digits")]
    Length(String),
    #[error("color `{0}` contains a non-hex digit")]
    Digit(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FearError {
    #[error("invalid palette color: {0}")]
    Palette(#[from] ColorError),
    #[error("particle count must be at least 1")]
    NoParticles,
}
