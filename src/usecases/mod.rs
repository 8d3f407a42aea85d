//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces.
//!
//! Use cases:
//! - `PayoutCalculator`: Read both odds, compute the stake allocation

pub mod payout_calculator;

pub use payout_calculator::PayoutCalculator;
