//! Program constants for the Ember Rewards program.
//!
//! This module defines all constant values used throughout the reward pool
//! program, including PDA seeds and time constants.

use anchor_lang::prelude::*;

/// Seed for deriving the reward pool PDA
pub const REWARD_POOL_SEED: &[u8] = b"reward_pool";

/// Seed for deriving participant stake record PDAs
pub const STAKE_RECORD_SEED: &[u8] = b"stake_record";

/// Seed for deriving the participant registry PDA
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Seed for deriving the stake vault PDA (principal custody)
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault";

/// Seed for deriving the reserve vault PDA (reward custody)
pub const RESERVE_VAULT_SEED: &[u8] = b"reserve_vault";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Default minimum hold period (7 days) used by deployment tooling
pub const DEFAULT_MINIMUM_HOLD_PERIOD: i64 = 7 * SECONDS_PER_DAY;

/// Default enrollment window length (30 days) used by deployment tooling
pub const DEFAULT_ENROLLMENT_DURATION: i64 = 30 * SECONDS_PER_DAY;
