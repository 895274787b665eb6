use thiserror::Error;

/// Errors surfaced by the public [crate::load]/[crate::save]/[crate::scale_down]
/// operations.
///
/// Buffer-length mismatches and source/destination aliasing are programmer
/// errors rather than recoverable conditions and are reported via `assert!`
/// instead of through this enum.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested format has no codec for the requested direction.
    #[error("format {format_name} has no {direction} implementation")]
    Unsupported {
        format_name: &'static str,
        direction: Direction,
    },

    /// An unknown filter mode, or a destination dimension that is neither
    /// equal to nor exactly half of the matching source dimension.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Which direction of a codec was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Load,
    Save,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Load => write!(f, "load"),
            Direction::Save => write!(f, "save"),
        }
    }
}

/// Fatal error returned by [crate::init] when the caller's format
/// enumeration disagrees with the registry's own tag-to-name table.
///
/// This indicates the two enumerations have drifted out of sync; it is not
/// meant to be retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("format index {index} name mismatch: registry has {registry_name:?}, caller supplied {caller_name:?}")]
pub struct InitializationMismatch {
    pub index: u8,
    pub registry_name: &'static str,
    pub caller_name: String,
}
