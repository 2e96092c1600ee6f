//! Instruction handlers for the Ember Rewards program.
//!
//! This module contains all instruction implementations.

pub mod admin;
pub mod claim;
pub mod compute_qualified;
pub mod initialize;
pub mod stake;
pub mod unstake;
pub mod withdraw_principal;

pub use admin::*;
pub use claim::*;
pub use compute_qualified::*;
pub use initialize::*;
pub use stake::*;
pub use unstake::*;
pub use withdraw_principal::*;
