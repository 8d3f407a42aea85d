//! Scenario Tests - Settling Allocations Against Both Outcomes
//!
//! Replays a table of realistic two-way lines, settles the recommended
//! stakes against each outcome, and checks the reported payouts and
//! profits against that settlement.

use arb_calc::domain::{allocate, Allocation, AmericanOdds, CalcError, Side};

/// One market to replay.
#[derive(Debug, Clone)]
struct Line {
    /// Description of the matchup.
    name: &'static str,
    favored: f64,
    underdog: f64,
}

const LINES: &[Line] = &[
    Line { name: "soccer moneyline", favored: -150.0, underdog: 130.0 },
    Line { name: "pick'em", favored: -110.0, underdog: -110.0 },
    Line { name: "heavy favorite", favored: -400.0, underdog: 320.0 },
    Line { name: "even favorite", favored: 100.0, underdog: -120.0 },
    Line { name: "two plus-money books", favored: 105.0, underdog: 140.0 },
    Line { name: "long shot", favored: -1200.0, underdog: 800.0 },
];

fn run(line: &Line) -> Result<Allocation, CalcError> {
    allocate(
        AmericanOdds::new(Side::Favored, line.favored)?,
        AmericanOdds::new(Side::Underdog, line.underdog)?,
    )
}

/// Net result of holding both tickets when `winner` wins.
fn settle(a: &Allocation, winner: Side) -> f64 {
    let win = a.outcome(winner);
    win.stake * win.multiplier + win.stake - (a.favored.stake + a.underdog.stake)
}

#[test]
fn test_settlement_matches_reported_profit() {
    for line in LINES {
        let a = run(line).unwrap();
        for side in Side::ALL {
            let settled = settle(&a, side);
            let reported = a.outcome(side).profit;
            assert!(
                (settled - reported).abs() < 1e-9,
                "{}: {side} settled {settled} vs reported {reported}",
                line.name
            );
        }
    }
}

#[test]
fn test_arbitrage_flag_agrees_with_settlement() {
    for line in LINES {
        let a = run(line).unwrap();
        let both_positive = Side::ALL.iter().all(|&s| settle(&a, s) > 0.0);
        assert_eq!(a.is_arbitrage(), both_positive, "{}", line.name);
    }
}

#[test]
fn test_plus_money_both_sides_is_profitable() {
    let line = &LINES[4];
    let a = run(line).unwrap();
    assert!(a.is_arbitrage(), "{} should profit either way", line.name);
}

#[test]
fn test_scenario_even_favorite() {
    let a = run(&LINES[3]).unwrap();
    let sum = 1.0 + 100.0 / 120.0;
    assert!((a.favored.multiplier - 1.0).abs() < 1e-12);
    assert!((a.underdog.multiplier - 0.833_333).abs() < 1e-6);
    assert!((a.favored.stake - 10.0 / sum).abs() < 1e-12);
    assert!((a.underdog.stake - 8.0 / sum).abs() < 1e-12);
}

#[test]
fn test_total_investment_shrinks_as_multipliers_grow() {
    let tight = run(&LINES[1]).unwrap();
    let wide = run(&LINES[4]).unwrap();
    assert!(wide.multiplier_sum > tight.multiplier_sum);
    assert!(wide.total_investment < tight.total_investment);
}
