use std::fmt;
use std::num::{IntErrorKind, NonZeroU32};
use std::str::FromStr;

/// Number of math steps / memory elements per unit of load.
pub const ITERATIONS_PER_LOAD: u64 = 100_000;

/// Positive scale applied to every workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadFactor(NonZeroU32);

impl LoadFactor {
    /// Parses a base-10 integer argument. Surrounding whitespace and trailing
    /// characters are rejected rather than ignored.
    pub fn parse(raw: &str) -> Result<Self, InvalidLoadFactor> {
        let value: i64 = raw.parse().map_err(|err: std::num::ParseIntError| {
            let reason = match err.kind() {
                IntErrorKind::Empty => InvalidReason::Empty,
                IntErrorKind::PosOverflow => InvalidReason::TooLarge,
                IntErrorKind::NegOverflow => InvalidReason::NotPositive,
                _ => InvalidReason::NotInteger,
            };
            InvalidLoadFactor::new(raw, reason)
        })?;
        if value <= 0 {
            return Err(InvalidLoadFactor::new(raw, InvalidReason::NotPositive));
        }
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| InvalidLoadFactor::new(raw, InvalidReason::TooLarge))
    }

    pub fn from_u32(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Side length of the square matrices.
    pub fn matrix_dim(self) -> usize {
        self.0.get() as usize
    }

    /// Iteration count shared by the math and memory workloads.
    pub fn iterations(self) -> u64 {
        u64::from(self.0.get()) * ITERATIONS_PER_LOAD
    }
}

impl fmt::Display for LoadFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LoadFactor {
    type Err = InvalidLoadFactor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    Empty,
    NotInteger,
    NotPositive,
    TooLarge,
}

/// The load factor argument was missing, malformed or out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLoadFactor {
    input: String,
    reason: InvalidReason,
}

impl InvalidLoadFactor {
    fn new(input: &str, reason: InvalidReason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> InvalidReason {
        self.reason
    }
}

impl fmt::Display for InvalidLoadFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            InvalidReason::Empty => write!(f, "load factor must not be empty"),
            InvalidReason::NotInteger => write!(f, "load factor '{}' is not a valid integer", self.input),
            InvalidReason::NotPositive => write!(f, "load factor must be positive, got {}", self.input),
            InvalidReason::TooLarge => {
                write!(f, "load factor {} is too large (max {})", self.input, u32::MAX)
            }
        }
    }
}

impl std::error::Error for InvalidLoadFactor {}
