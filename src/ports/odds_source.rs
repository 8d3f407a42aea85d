//! Odds Source Port - Where the Two Prices Come From
//!
//! The calculator asks for one side at a time, favored first. Adapters
//! decide whether that means prompting a user, reading arguments,
//! or replaying fixed values in tests.

use crate::domain::{AmericanOdds, CalcError, Side};

/// Supplier of American odds for each side of the market.
pub trait OddsSource {
  /// Odds for `side`.
  ///
  /// # Errors
  /// `CalcError::InvalidInput` if the value cannot be read as a
  /// finite real number, including when input ends early;
  /// `CalcError::Io` if the underlying stream fails.
  fn odds_for(&mut self, side: Side) -> Result<AmericanOdds, CalcError>;
}

