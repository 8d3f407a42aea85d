//! Console Adapter - Interactive and Argument-Supplied Odds
//!
//! `PromptSource` prints `Enter odds for <side>: ` and reads the next
//! whitespace-separated token, so both values may arrive on one line.
//! `FixedSource` serves values given up front (command-line flags).

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::domain::{AmericanOdds, CalcError, Side};
use crate::ports::OddsSource;

/// Splits a buffered reader into whitespace-separated tokens.
#[derive(Debug)]
pub struct TokenReader<R> {
  reader: R,
  pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
  /// Wrap a buffered reader.
  pub const fn new(reader: R) -> Self {
    Self {
      reader,
      pending: VecDeque::new(),
    }
  }

  /// Next token, or `None` once the input is exhausted.
  pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    loop {
      if let Some(token) = self.pending.pop_front() {
        return Ok(Some(token));
      }
      line.clear();
      if self.reader.read_line(&mut line)? == 0 {
        return Ok(None);
      }
      self
        .pending
        .extend(line.split_whitespace().map(str::to_string));
    }
  }
}

/// Prompts on `output` and reads answers from `input`.
pub struct PromptSource<R, W> {
  input: TokenReader<R>,
  output: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
  /// Create a prompting source over the given streams.
  pub const fn new(input: R, output: W) -> Self {
    Self {
      input: TokenReader::new(input),
      output,
    }
  }

  /// Prompt text shown before reading `side`.
  pub fn prompt(side: Side) -> String {
    format!("Enter odds for {side}: ")
  }

  /// Give back the output stream (for writing the report after prompting).
  pub fn into_output(self) -> W {
    self.output
  }

  fn ask(&mut self, side: Side) -> std::io::Result<Option<String>> {
    self.output.write_all(Self::prompt(side).as_bytes())?;
    self.output.flush()?;
    self.input.next_token()
  }
}

impl<R: BufRead, W: Write> OddsSource for PromptSource<R, W> {
  fn odds_for(&mut self, side: Side) -> Result<AmericanOdds, CalcError> {
    match self.ask(side) {
      Ok(Some(raw)) => {
        debug!(side = %side, raw = %raw, "Odds entered");
        AmericanOdds::parse(side, &raw)
      }
      Ok(None) => Err(CalcError::InvalidInput {
        side,
        raw: String::new(),
      }),
      Err(e) => {
        warn!(side = %side, error = %e, "Console I/O failed while reading odds");
        Err(CalcError::Io {
          side,
          message: e.to_string(),
        })
      }
    }
  }
}

/// Odds supplied before the run starts, parsed on request.
#[derive(Debug, Clone)]
pub struct FixedSource {
  favored: String,
  underdog: String,
}

impl FixedSource {
  /// Raw text for each side, e.g. from `--favored -150 --underdog +130`.
  pub fn new(favored: impl Into<String>, underdog: impl Into<String>) -> Self {
    Self {
      favored: favored.into(),
      underdog: underdog.into(),
    }
  }
}

impl OddsSource for FixedSource {
  fn odds_for(&mut self, side: Side) -> Result<AmericanOdds, CalcError> {
    let raw = match side {
      Side::Favored => &self.favored,
      Side::Underdog => &self.underdog,
    };
    AmericanOdds::parse(side, raw)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  #[test]
  fn test_tokens_span_lines() {
    let mut reader = TokenReader::new(Cursor::new("-150  +130\n\n  42\n"));
    assert_eq!(reader.next_token().unwrap().as_deref(), Some("-150"));
    assert_eq!(reader.next_token().unwrap().as_deref(), Some("+130"));
    assert_eq!(reader.next_token().unwrap().as_deref(), Some("42"));
    assert_eq!(reader.next_token().unwrap(), None);
  }

  #[test]
  fn test_prompt_source_writes_prompts() {
    let mut source = PromptSource::new(Cursor::new("-150\n130\n"), Vec::new());
    let favored = source.odds_for(Side::Favored).unwrap();
    let underdog = source.odds_for(Side::Underdog).unwrap();

    assert_eq!(favored.value(), -150.0);
    assert_eq!(underdog.value(), 130.0);
    let shown = String::from_utf8(source.into_output()).unwrap();
    assert_eq!(shown, "Enter odds for favored: Enter odds for underdog: ");
  }

  #[test]
  fn test_prompt_source_both_values_on_one_line() {
    let mut source = PromptSource::new(Cursor::new("-110 -110\n"), Vec::new());
    assert_eq!(source.odds_for(Side::Favored).unwrap().value(), -110.0);
    assert_eq!(source.odds_for(Side::Underdog).unwrap().value(), -110.0);
  }

  #[test]
  fn test_prompt_source_end_of_input() {
    let mut source = PromptSource::new(Cursor::new("-150\n"), Vec::new());
    source.odds_for(Side::Favored).unwrap();
    let err = source.odds_for(Side::Underdog).unwrap_err();
    assert_eq!(
      err,
      CalcError::InvalidInput {
        side: Side::Underdog,
        raw: String::new()
      }
    );
  }

  #[test]
  fn test_prompt_source_read_error_is_io() {
    let mut source = PromptSource::new(Cursor::new(vec![0xff, 0xfe, b'\n']), Vec::new());
    let err = source.odds_for(Side::Favored).unwrap_err();
    assert!(matches!(err, CalcError::Io { side: Side::Favored, .. }), "got {err:?}");
    assert!(!err.to_string().contains("no value entered"));
  }

  #[test]
  fn test_prompt_source_rejects_text() {
    let mut source = PromptSource::new(Cursor::new("even\n"), Vec::new());
    let err = source.odds_for(Side::Favored).unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput { raw, .. } if raw == "even"));
  }

  #[test]
  fn test_fixed_source_parses_each_side() {
    let mut source = FixedSource::new("-150", "+130");
    assert_eq!(source.odds_for(Side::Favored).unwrap().value(), -150.0);
    assert_eq!(source.odds_for(Side::Underdog).unwrap().value(), 130.0);
  }

  #[test]
  fn test_fixed_source_invalid_text() {
    let mut source = FixedSource::new("-150", "x");
    assert!(source.odds_for(Side::Underdog).is_err());
  }
}
