//! Error types shared by the simulation core and its drivers.

/// Errors surfaced by configuration and seeding.
///
/// The tick itself cannot fail; every variant here is a precondition
/// violation reported straight back to the caller.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LifeError {
    /// Area dimensions must both be positive.
    #[error("invalid area {width}x{height}: width and height must be positive")]
    InvalidConfiguration {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },

    /// Area larger than the drivers will render or fill.
    #[error("area {width}x{height} too large: each dimension must be at most {max}")]
    AreaTooLarge {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
        /// Largest accepted dimension.
        max: i64,
    },

    /// Random fill density outside `[0.0, 1.0]`.
    #[error("invalid density {0}: expected a value between 0.0 and 1.0")]
    InvalidDensity(f64),

    /// A flag was given a value that does not parse.
    #[error("invalid value {value:?} for {flag}")]
    InvalidArgument {
        /// The flag being parsed.
        flag: String,
        /// The raw value supplied.
        value: String,
    },

    /// A flag that takes a value was the last argument.
    #[error("missing value for {0}")]
    MissingValue(String),

    /// Unrecognised command-line argument.
    #[error("unknown argument {0:?}")]
    UnknownFlag(String),

    /// No preset pattern with this name.
    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
