//! # Ember Rewards Program
//!
//! A fixed-reserve staking rewards program for the EMBER token. Participants
//! stake during a one-time enrollment window; once the window closes, a
//! single qualification pass determines which stakes were held long enough,
//! and the pre-funded reward reserve is split pro-rata among them.
//!
//! ## Features
//! - Reserve pulled from the owner atomically at initialization
//! - One stake per participant, full-exit unstake before the deadline
//! - Hold-period qualification against the fixed deadline (stake timing
//!   after the window closes can never change anyone's share)
//! - Resumable batched qualification scan for large participant sets
//! - Separate principal and reward custody vaults
//! - Safe math with overflow protection
//!
//! ## Devnet Only
//! This program is configured for Solana devnet deployment only.

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

#[program]
pub mod ember_rewards {
    use super::*;

    /// Initializes the reward pool and funds the reserve in one step.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for initialization
    /// * `reserve_amount` - Fixed total reward amount, pulled from the owner
    /// * `enrollment_duration` - Enrollment window length in seconds
    /// * `minimum_hold_period` - Seconds a stake must predate the deadline to qualify
    /// * `max_participants` - Capacity of the participant registry
    ///
    /// # Errors
    /// Returns an error if any parameter is out of range or the owner cannot
    /// cover the reserve transfer.
    pub fn initialize(
        ctx: Context<Initialize>,
        reserve_amount: u64,
        enrollment_duration: i64,
        minimum_hold_period: i64,
        max_participants: u32,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            reserve_amount,
            enrollment_duration,
            minimum_hold_period,
            max_participants,
        )
    }

    /// Stakes EMBER tokens during the enrollment window.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for staking
    /// * `amount` - Amount of EMBER tokens to stake
    ///
    /// # Errors
    /// Returns an error if:
    /// - The enrollment window has closed
    /// - Amount is zero
    /// - The participant has staked before (no top-up, no re-entry)
    /// - The registry is at capacity
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Returns the participant's full stake before the deadline.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for unstaking
    ///
    /// # Errors
    /// Returns an error if:
    /// - The enrollment window has closed
    /// - The participant has no active stake
    pub fn unstake(ctx: Context<Unstake>) -> Result<()> {
        instructions::unstake::handler(ctx)
    }

    /// Processes the next batch of the one-shot qualification scan.
    ///
    /// Stake records for the registry slice at the scan cursor are passed
    /// as remaining accounts; the final batch freezes the qualified total.
    ///
    /// # Arguments
    /// * `ctx` - The context for the scan batch
    ///
    /// # Errors
    /// Returns an error if:
    /// - The enrollment window is still open
    /// - The scan already completed
    /// - The batch does not line up with the registry at the cursor
    pub fn compute_qualified<'info>(
        ctx: Context<'_, '_, 'info, 'info, ComputeQualified<'info>>,
    ) -> Result<()> {
        instructions::compute_qualified::handler(ctx)
    }

    /// Claims the participant's pro-rata share of the reward reserve.
    ///
    /// A zero share still marks the record claimed.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for claiming
    ///
    /// # Errors
    /// Returns an error if:
    /// - Qualification has not been computed
    /// - The participant never staked
    /// - The reward was already claimed
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    /// Recovers the participant's staked principal after the deadline.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for withdrawal
    ///
    /// # Errors
    /// Returns an error if:
    /// - The enrollment window is still active
    /// - The participant never staked
    /// - The principal was already withdrawn
    pub fn withdraw_principal(ctx: Context<WithdrawPrincipal>) -> Result<()> {
        instructions::withdraw_principal::handler(ctx)
    }

    /// Claims the reward share and withdraws principal in one instruction.
    ///
    /// # Arguments
    /// * `ctx` - The context containing the union of claim and withdrawal accounts
    ///
    /// # Errors
    /// Surfaces whichever of the claim or withdrawal preconditions fails
    /// first.
    pub fn claim_and_withdraw(ctx: Context<ClaimAndWithdraw>) -> Result<()> {
        instructions::claim::claim_and_withdraw_handler(ctx)
    }

    /// Owner function to sweep the reserve after a no-qualifier campaign.
    ///
    /// # Arguments
    /// * `ctx` - The context containing owner and vault accounts
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the owner
    /// - The enrollment window is still active
    /// - Qualification has not been computed
    /// - Any staker qualified
    pub fn owner_withdraw_residual(ctx: Context<WithdrawResidual>) -> Result<()> {
        instructions::admin::withdraw_residual_handler(ctx)
    }

    /// Owner function to transfer the owner capability to a new address.
    ///
    /// # Arguments
    /// * `ctx` - The context containing owner accounts
    /// * `new_owner` - New owner pubkey
    ///
    /// # Errors
    /// Returns an error if the caller is not the current owner or the new
    /// owner is the default pubkey.
    pub fn transfer_ownership(ctx: Context<AdminControl>, new_owner: Pubkey) -> Result<()> {
        instructions::admin::transfer_ownership_handler(ctx, new_owner)
    }
}
