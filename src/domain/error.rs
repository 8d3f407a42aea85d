//! Calculation errors.
//!
//! Every failure of a run ends up as one of these. None of them is
//! recoverable: the binary reports the message and exits non-zero.

use thiserror::Error;

use super::odds::Side;

/// Errors raised while reading odds or computing an allocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Input could not be read as a finite real number.
    ///
    /// `raw` is empty when the input ended before a value arrived.
    #[error("invalid odds for {side}: {}", describe_raw(.raw))]
    InvalidInput {
        /// Side the value was meant for.
        side: Side,
        /// Offending text as typed.
        raw: String,
    },

    /// Zero odds, or a multiplier sum of zero (`side` is `None`).
    #[error("division by zero: {}", describe_zero(*.side))]
    DivisionByZero {
        /// Side whose odds caused it, if any single side did.
        side: Option<Side>,
    },

    /// The input stream failed while a value was being read.
    #[error("failed to read odds for {side}: {message}")]
    Io {
        /// Side being read.
        side: Side,
        /// Underlying I/O error.
        message: String,
    },

    /// A monetary figure too large for the two-decimal view.
    #[error("{field} is out of range for a currency amount")]
    OutOfRange {
        /// Name of the figure that overflowed.
        field: &'static str,
    },
}

fn describe_raw(raw: &str) -> String {
    if raw.is_empty() {
        "no value entered".to_string()
    } else {
        format!("'{raw}' is not a number")
    }
}

fn describe_zero(side: Option<Side>) -> String {
    match side {
        Some(side) => format!("odds for {side} must not be 0"),
        None => "payout multipliers sum to 0".to_string(),
    }
}
