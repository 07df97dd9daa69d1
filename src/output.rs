//! Configured output target and the destination resolved for each write

use std::fmt;

/// Output as configured by the caller.
///
/// Unrecognized names are kept verbatim so the logger can coerce them to
/// `Out` on the first write that passes the filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Out,
    Error,
    File,
    Unknown(String),
}

impl Output {
    /// Parse an output name; never fails
    pub fn parse(s: &str) -> Self {
        match s {
            "out" => Output::Out,
            "error" => Output::Error,
            "file" => Output::File,
            other => Output::Unknown(other.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Output::Unknown(_))
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Output::Out => f.write_str("out"),
            Output::Error => f.write_str("error"),
            Output::File => f.write_str("file"),
            Output::Unknown(s) => f.write_str(s),
        }
    }
}

/// Where a single write actually goes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Stderr,
    File,
}

impl Destination {
    /// Destination for a valid configured output; `Unknown` maps to stdout
    pub fn of(output: &Output) -> Self {
        match output {
            Output::Error => Destination::Stderr,
            Output::File => Destination::File,
            Output::Out | Output::Unknown(_) => Destination::Stdout,
        }
    }
}
