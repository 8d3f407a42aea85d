//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `OddsSource`: Supplies the favored and underdog odds

pub mod odds_source;

pub use odds_source::OddsSource;
