//! Report Adapter - Rendering an Allocation for the User
//!
//! `Text` reproduces the classic console block: stakes, total, payouts
//! and profits, two decimals, each figure prefixed with the currency
//! symbol. `Json` emits the cents view as one object.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::{Allocation, AmericanOdds, CentsAllocation};

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
  /// Human-readable block.
  #[default]
  Text,
  /// Single JSON object.
  Json,
}

/// JSON body: the quoted odds, cents figures and the arbitrage flag.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
  favored_odds: AmericanOdds,
  underdog_odds: AmericanOdds,
  #[serde(flatten)]
  cents: &'a CentsAllocation,
  is_arbitrage: bool,
}

/// Render the text block, starting with a blank separator line.
pub fn render_text(allocation: &Allocation, currency: &str) -> String {
  let c = currency;
  let a = allocation;
  format!(
    "\nBet on favored: {c}{:.2}\n\
     Bet on underdog: {c}{:.2}\n\
     Total investment: {c}{:.2}\n\
     \n\
     Payout if favored wins: {c}{:.2}\n\
     Payout if underdog wins: {c}{:.2}\n\
     \n\
     Profit if favored wins: {c}{:.2}\n\
     Profit if underdog wins: {c}{:.2}\n",
    a.favored.stake,
    a.underdog.stake,
    a.total_investment,
    a.favored.payout,
    a.underdog.payout,
    a.favored.profit,
    a.underdog.profit,
  )
}

/// Render the JSON object (pretty-printed, trailing newline).
pub fn render_json(allocation: &Allocation) -> Result<String> {
  let cents = allocation.to_cents()?;
  let report = JsonReport {
    favored_odds: allocation.favored.odds,
    underdog_odds: allocation.underdog.odds,
    cents: &cents,
    is_arbitrage: allocation.is_arbitrage(),
  };
  let mut body = serde_json::to_string_pretty(&report)
    .context("Failed to serialize JSON report")?;
  body.push('\n');
  Ok(body)
}

/// Write the report for `allocation` in the requested format.
pub fn write_report<W: Write>(
  out: &mut W,
  allocation: &Allocation,
  format: ReportFormat,
  currency: &str,
) -> Result<()> {
  let body = match format {
    ReportFormat::Text => render_text(allocation, currency),
    ReportFormat::Json => render_json(allocation)?,
  };
  out
    .write_all(body.as_bytes())
    .context("Failed to write report")?;
  out.flush().context("Failed to flush report")?;
  Ok(())
}
