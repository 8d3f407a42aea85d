//! Domain layer - Odds conversion and stake allocation.
//!
//! Pure arithmetic, no I/O (hexagonal architecture inner ring).
//! Every operation is a function of its inputs: the same odds always
//! produce the same allocation.

pub mod allocation;
pub mod error;
pub mod odds;

// Re-export core types for convenience
pub use allocation::{
    allocate, Allocation, CentsAllocation, OutcomeResult, FAVORED_WEIGHT, STAKE_SCALE,
    UNDERDOG_WEIGHT,
};
pub use error::CalcError;
pub use odds::{AmericanOdds, Side};
