//! Error types for the Ember Rewards program.
//!
//! This module defines all custom error codes that can be returned by the
//! program. Each error corresponds to exactly one violated precondition;
//! every failing instruction aborts with no partial state change.

use anchor_lang::prelude::*;

/// Custom error codes for the Ember Rewards program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum RewardPoolError {
    // ========== Input Validation Errors ==========
    /// Cannot stake or fund with zero amount.
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    /// Reward reserve must be greater than zero.
    #[msg("Reward reserve must be greater than zero")]
    ZeroReserve,

    /// Enrollment window length must be greater than zero.
    #[msg("Enrollment duration must be greater than zero")]
    InvalidDuration,

    /// Minimum hold period cannot be negative.
    #[msg("Minimum hold period cannot be negative")]
    InvalidHoldPeriod,

    /// Registry capacity must be greater than zero.
    #[msg("Participant capacity must be greater than zero")]
    ZeroCapacity,

    // ========== Lifecycle Errors ==========
    /// Staking or unstaking attempted after the enrollment deadline.
    #[msg("Enrollment window has closed")]
    EnrollmentClosed,

    /// Qualification scan attempted before the enrollment deadline.
    #[msg("Enrollment window is still open")]
    EnrollmentStillOpen,

    /// Principal or residual withdrawal attempted before the deadline.
    #[msg("Enrollment window is still active")]
    EnrollmentStillActive,

    /// The qualification scan has already run to completion.
    #[msg("Qualification has already been computed")]
    AlreadyComputed,

    /// Claiming requires the qualification scan to have completed.
    #[msg("Qualification has not been computed yet")]
    QualificationNotComputed,

    // ========== Participant State Errors ==========
    /// Each participant may stake exactly once for the pool's lifetime.
    #[msg("Participant has already staked")]
    AlreadyStaked,

    /// Unstake requires a live stake.
    #[msg("Participant has no active stake")]
    NotStaked,

    /// Claim and principal withdrawal require a recorded stake.
    #[msg("Participant never staked in this pool")]
    NeverStaked,

    /// The reward share has already been drawn.
    #[msg("Reward has already been claimed")]
    AlreadyClaimed,

    /// The principal has already been retrieved.
    #[msg("Principal has already been withdrawn")]
    AlreadyWithdrawn,

    /// Residual sweep is blocked while qualified stakers hold claims.
    #[msg("Qualified stakers exist - residual cannot be swept")]
    QualifiedStakersExist,

    // ========== Registry / Scan Errors ==========
    /// The participant registry is at capacity.
    #[msg("Participant registry is full")]
    RegistryFull,

    /// A scan batch account does not match the registry entry at the cursor.
    #[msg("Stake record does not match the registry entry at the cursor")]
    RegistryMismatch,

    /// A scan batch must carry at least one stake record.
    #[msg("Qualification scan batch is empty")]
    ScanBatchEmpty,

    /// A scan batch extends past the end of the registry.
    #[msg("Qualification scan batch extends past the registry")]
    ScanOutOfBounds,

    // ========== Math Errors ==========
    /// Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    /// Division by zero attempted.
    #[msg("Division by zero attempted")]
    DivisionByZero,

    /// Integer conversion failed (value out of range).
    #[msg("Integer conversion failed - value out of range")]
    ConversionOverflow,

    // ========== Authorization Errors ==========
    /// Caller is not the pool owner.
    #[msg("Unauthorized: caller is not the pool owner")]
    NotOwner,

    /// Signer does not match the stake record's participant.
    #[msg("Unauthorized: signer does not match stake record participant")]
    RecordOwnerMismatch,

    // ========== Funding / Account Validation Errors ==========
    /// The construction-time reserve transfer cannot be covered.
    #[msg("Reserve funding failed - insufficient owner balance")]
    FundingFailed,

    /// The provided mint does not match the pool's staking token.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// The provided vault does not match the pool's stake vault.
    #[msg("Stake vault address mismatch")]
    VaultMismatch,

    /// The provided vault does not match the pool's reserve vault.
    #[msg("Reserve vault address mismatch")]
    ReserveMismatch,

    /// Vault owner is not the reward pool PDA.
    #[msg("Vault owner must be the reward pool PDA")]
    InvalidVaultOwner,

    /// Stake record does not belong to this pool.
    #[msg("Stake record does not belong to this pool")]
    RecordPoolMismatch,
}
