//! American odds and payout multipliers.
//!
//! Positive odds `+X` pay `X` profit per 100 staked; negative odds `-X`
//! need `X` staked to make 100 profit. The payout multiplier is the
//! profit per unit staked:
//!
//!   o > 0  →  o / 100
//!   o < 0  →  100 / |o|

use std::fmt;

use serde::Serialize;

use super::error::CalcError;

/// Which side of the two-way market a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The favorite.
    Favored,
    /// The underdog.
    Underdog,
}

impl Side {
    /// Both sides, in the order they are read and reported.
    pub const ALL: [Self; 2] = [Self::Favored, Self::Underdog];

    /// Lowercase label used in prompts and messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Favored => "favored",
            Self::Underdog => "underdog",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A price quoted in American format.
///
/// Zero is representable so that it can be reported as a division by
/// zero when the multiplier is derived, not as unparseable input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AmericanOdds(f64);

impl AmericanOdds {
    /// Wraps a finite value.
    pub fn new(side: Side, value: f64) -> Result<Self, CalcError> {
        if !value.is_finite() {
            return Err(CalcError::InvalidInput {
                side,
                raw: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Parses user text such as `-150`, `+130` or `2.5e2`.
    pub fn parse(side: Side, raw: &str) -> Result<Self, CalcError> {
        let trimmed = raw.trim();
        let invalid = || CalcError::InvalidInput {
            side,
            raw: trimmed.to_string(),
        };

        let value: f64 = trimmed.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(Self(value))
    }

    /// The quoted value.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Profit per unit staked.
    ///
    /// Fails with `DivisionByZero` for zero odds, and for negative odds so
    /// close to zero that `100 / |o|` overflows.
    pub fn payout_multiplier(self, side: Side) -> Result<f64, CalcError> {
        let o = self.0;
        let multiplier = if o > 0.0 {
            o / 100.0
        } else if o < 0.0 {
            100.0 / o.abs()
        } else {
            return Err(CalcError::DivisionByZero { side: Some(side) });
        };

        if !multiplier.is_finite() {
            return Err(CalcError::DivisionByZero { side: Some(side) });
        }
        Ok(multiplier)
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0.0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn odds(v: f64) -> AmericanOdds {
        AmericanOdds::new(Side::Favored, v).unwrap()
    }

    #[test]
    fn test_positive_odds_multiplier() {
        let m = odds(130.0).payout_multiplier(Side::Underdog).unwrap();
        assert!((m - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_negative_odds_multiplier() {
        let m = odds(-150.0).payout_multiplier(Side::Favored).unwrap();
        assert!((m - 100.0 / 150.0).abs() < 1e-12);
    }

    #[test]
    fn test_even_money_both_signs() {
        let plus = odds(100.0).payout_multiplier(Side::Favored).unwrap();
        let minus = odds(-100.0).payout_multiplier(Side::Favored).unwrap();
        assert_eq!(plus, 1.0);
        assert_eq!(minus, 1.0);
    }

    #[test]
    fn test_zero_odds_is_division_by_zero() {
        let err = odds(0.0).payout_multiplier(Side::Favored).unwrap_err();
        assert_eq!(
            err,
            CalcError::DivisionByZero {
                side: Some(Side::Favored)
            }
        );
    }

    #[test]
    fn test_negative_zero_is_division_by_zero() {
        let err = odds(-0.0).payout_multiplier(Side::Underdog).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_subnormal_negative_odds_overflow() {
        let err = odds(-1e-320).payout_multiplier(Side::Underdog).unwrap_err();
        assert!(matches!(err, CalcError::DivisionByZero { .. }));
    }

    #[test]
    fn test_parse_accepts_signs_and_whitespace() {
        assert_eq!(AmericanOdds::parse(Side::Favored, " -150 ").unwrap().value(), -150.0);
        assert_eq!(AmericanOdds::parse(Side::Underdog, "+130").unwrap().value(), 130.0);
        assert_eq!(AmericanOdds::parse(Side::Underdog, "2.5e2").unwrap().value(), 250.0);
    }

    #[test]
    fn test_parse_zero_is_valid_input() {
        assert_eq!(AmericanOdds::parse(Side::Favored, "0").unwrap().value(), 0.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = AmericanOdds::parse(Side::Favored, "abc").unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidInput {
                side: Side::Favored,
                raw: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(AmericanOdds::parse(Side::Favored, "inf").is_err());
        assert!(AmericanOdds::parse(Side::Favored, "NaN").is_err());
        assert!(AmericanOdds::new(Side::Underdog, f64::INFINITY).is_err());
    }

    #[test]
    fn test_display_shows_plus_sign() {
        assert_eq!(odds(130.0).to_string(), "+130");
        assert_eq!(odds(-150.0).to_string(), "-150");
    }
}
