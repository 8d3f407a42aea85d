//! Arb Calc — Library Root
//!
//! Two-way hedge calculator: given American odds on a favorite and an
//! underdog, splits a fixed stake across both sides and reports the
//! payout and profit for each outcome.
//!
//! Re-exports all modules for the binary, integration tests and benchmarks.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
