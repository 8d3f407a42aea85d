//! Stake allocation across the two sides of a market.
//!
//! Pipeline: odds → payout multiplier → stake weights → scaled stakes →
//! total investment → per-outcome payout → per-outcome profit.
//!
//! The weights are a fixed heuristic (1.0 on the favorite, 0.8 on the
//! underdog), not a profit-equalising split. Profits are therefore not
//! equal across outcomes and can be negative; `is_arbitrage` reports
//! whether both outcomes actually come out ahead.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::Serialize;

use super::error::CalcError;
use super::odds::{AmericanOdds, Side};

/// Numerator of the favored stake weight.
pub const FAVORED_WEIGHT: f64 = 1.0;

/// Numerator of the underdog stake weight.
pub const UNDERDOG_WEIGHT: f64 = 0.8;

/// Dollar scale applied to both weights.
pub const STAKE_SCALE: f64 = 10.0;

/// What happens on one side of the market.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeResult {
    /// Quoted American odds.
    pub odds: AmericanOdds,
    /// Profit per unit staked.
    pub multiplier: f64,
    /// Amount to wager on this side.
    pub stake: f64,
    /// Winnings on this stake if the side wins (`stake * multiplier`).
    pub winnings: f64,
    /// Gross return if the side wins (`winnings + stake`).
    pub payout: f64,
    /// Net result if the side wins (`payout - total_investment`).
    pub profit: f64,
}

/// Full result of splitting the stake between both sides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    pub favored: OutcomeResult,
    pub underdog: OutcomeResult,
    pub multiplier_sum: f64,
    pub total_investment: f64,
}

impl Allocation {
    /// Result for the given side.
    pub const fn outcome(&self, side: Side) -> &OutcomeResult {
        match side {
            Side::Favored => &self.favored,
            Side::Underdog => &self.underdog,
        }
    }

    /// Worst-case profit over both outcomes.
    pub fn guaranteed_profit(&self) -> f64 {
        self.favored.profit.min(self.underdog.profit)
    }

    /// True when both outcomes end in profit.
    pub fn is_arbitrage(&self) -> bool {
        self.favored.profit > 0.0 && self.underdog.profit > 0.0
    }

    /// Every monetary figure rounded to cents.
    pub fn to_cents(&self) -> Result<CentsAllocation, CalcError> {
        Ok(CentsAllocation {
            favored_stake: cents(self.favored.stake, "favored stake")?,
            underdog_stake: cents(self.underdog.stake, "underdog stake")?,
            total_investment: cents(self.total_investment, "total investment")?,
            favored_payout: cents(self.favored.payout, "favored payout")?,
            underdog_payout: cents(self.underdog.payout, "underdog payout")?,
            favored_profit: cents(self.favored.profit, "favored profit")?,
            underdog_profit: cents(self.underdog.profit, "underdog profit")?,
        })
    }
}

/// Two-decimal view of an [`Allocation`], in report order.
///
/// Rounds the exact binary value half-to-even, so every figure agrees
/// with the `{:.2}` text report, and always carries a scale of 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CentsAllocation {
    pub favored_stake: Decimal,
    pub underdog_stake: Decimal,
    pub total_investment: Decimal,
    pub favored_payout: Decimal,
    pub underdog_payout: Decimal,
    pub favored_profit: Decimal,
    pub underdog_profit: Decimal,
}

fn cents(value: f64, field: &'static str) -> Result<Decimal, CalcError> {
    let mut rounded = Decimal::from_f64_retain(value)
        .ok_or(CalcError::OutOfRange { field })?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(2);
    Ok(rounded)
}

/// Splits the stake between favorite and underdog.
///
/// ```
/// use arb_calc::domain::{allocate, AmericanOdds, Side};
///
/// let favored = AmericanOdds::new(Side::Favored, -150.0).unwrap();
/// let underdog = AmericanOdds::new(Side::Underdog, 130.0).unwrap();
/// let allocation = allocate(favored, underdog).unwrap();
/// assert!((allocation.total_investment - 9.1525).abs() < 1e-3);
/// ```
pub fn allocate(favored: AmericanOdds, underdog: AmericanOdds) -> Result<Allocation, CalcError> {
    let favored_multiplier = favored.payout_multiplier(Side::Favored)?;
    let underdog_multiplier = underdog.payout_multiplier(Side::Underdog)?;

    let multiplier_sum = favored_multiplier + underdog_multiplier;
    if multiplier_sum == 0.0 {
        return Err(CalcError::DivisionByZero { side: None });
    }

    let favored_stake = FAVORED_WEIGHT / multiplier_sum * STAKE_SCALE;
    let underdog_stake = UNDERDOG_WEIGHT / multiplier_sum * STAKE_SCALE;
    let total_investment = favored_stake + underdog_stake;

    Ok(Allocation {
        favored: outcome(favored, favored_multiplier, favored_stake, total_investment),
        underdog: outcome(underdog, underdog_multiplier, underdog_stake, total_investment),
        multiplier_sum,
        total_investment,
    })
}

fn outcome(odds: AmericanOdds, multiplier: f64, stake: f64, total_investment: f64) -> OutcomeResult {
    let winnings = stake * multiplier;
    let payout = winnings + stake;
    OutcomeResult {
        odds,
        multiplier,
        stake,
        winnings,
        payout,
        profit: payout - total_investment,
    }
}
