//! Payout Calculator - One Run of the Hedge Computation
//!
//! Reads the favored odds, then the underdog odds, from an
//! `OddsSource` and turns them into an `Allocation`. Holds no state
//! between runs: calling `run` again with the same answers gives the
//! same result.

use tracing::{debug, info, instrument};

use crate::domain::{allocate, Allocation, CalcError, Side};
use crate::ports::OddsSource;

/// Drives a single calculation against an odds source.
pub struct PayoutCalculator<S> {
  source: S,
}

impl<S: OddsSource> PayoutCalculator<S> {
  /// Create a calculator reading from `source`.
  pub const fn new(source: S) -> Self {
    Self { source }
  }

  /// Read both odds and compute the allocation.
  ///
  /// # Errors
  /// - `InvalidInput` if either value is not a finite number
  /// - `Io` if the source's stream fails
  /// - `DivisionByZero` for zero odds or a zero multiplier sum
  #[instrument(skip(self))]
  pub fn run(&mut self) -> Result<Allocation, CalcError> {
    let favored = self.source.odds_for(Side::Favored)?;
    let underdog = self.source.odds_for(Side::Underdog)?;

    let allocation = allocate(favored, underdog).inspect_err(|e| {
      debug!(favored = %favored, underdog = %underdog, error = %e, "Allocation failed");
    })?;

    debug!(
      favored_multiplier = allocation.favored.multiplier,
      underdog_multiplier = allocation.underdog.multiplier,
      favored_stake = allocation.favored.stake,
      underdog_stake = allocation.underdog.stake,
      total = allocation.total_investment,
      "Stakes allocated"
    );

    if allocation.is_arbitrage() {
      info!(
        guaranteed_profit = allocation.guaranteed_profit(),
        "Both outcomes profitable"
      );
    } else {
      info!(
        favored_profit = allocation.favored.profit,
        underdog_profit = allocation.underdog.profit,
        "Allocation loses money on at least one outcome"
      );
    }

    Ok(allocation)
  }
}
