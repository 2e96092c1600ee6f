//! Compute-qualified instruction handler.
//!
//! One-shot qualification scan over the participant registry, split into
//! caller-sized batches because the runtime meters compute per transaction.
//! Stake records for the registry slice at the cursor are passed as
//! remaining accounts; `qualification_computed` is only set once the cursor
//! exhausts the registry, so a partially scanned total is never observable
//! as a claim denominator.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::RewardPoolError;
use crate::events::QualificationComputed;
use crate::state::{ParticipantRegistry, RewardPool, StakeRecord};

/// Accounts required for the qualification scan.
///
/// Remaining accounts: the stake record PDAs for
/// `registry.participants[scan_cursor .. scan_cursor + N]`, in registry
/// order.
#[derive(Accounts)]
pub struct ComputeQualified<'info> {
    /// Anyone may crank the scan once the window has closed.
    pub caller: Signer<'info>,

    /// The reward pool.
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED, reward_pool.staking_mint.as_ref()],
        bump = reward_pool.bump
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// The participant enumeration being scanned.
    #[account(
        seeds = [REGISTRY_SEED, reward_pool.key().as_ref()],
        bump = registry.bump,
        constraint = registry.pool == reward_pool.key() @ RewardPoolError::RecordPoolMismatch
    )]
    pub registry: Account<'info, ParticipantRegistry>,
}

/// Process the next batch of the qualification scan.
///
/// A record qualifies when it still holds a live stake that was placed at
/// least `minimum_hold_period` before the fixed `enrollment_end`.
/// Qualifying amounts accumulate into `total_qualified_stake`; the final
/// batch freezes the snapshot. Calling again after completion fails, so
/// the total can never be double-counted.
///
/// # Arguments
/// * `ctx` - ComputeQualified accounts context; remaining accounts carry
///   the batch of stake records
///
/// # Returns
/// Result indicating success or error
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, ComputeQualified<'info>>,
) -> Result<()> {
    let clock = Clock::get()?;
    let reward_pool = &ctx.accounts.reward_pool;

    require!(
        clock.unix_timestamp >= reward_pool.enrollment_end,
        RewardPoolError::EnrollmentStillOpen
    );
    require!(
        !reward_pool.qualification_computed,
        RewardPoolError::AlreadyComputed
    );

    let registry = &ctx.accounts.registry;
    let total_participants = registry.len();
    let cursor = reward_pool.scan_cursor as usize;

    // Nobody ever staked: the scan completes immediately with a zero total.
    if total_participants == 0 {
        let reward_pool = &mut ctx.accounts.reward_pool;
        reward_pool.qualification_computed = true;

        emit!(QualificationComputed {
            total_qualified_stake: 0,
        });
        msg!("Qualification computed over empty registry");
        return Ok(());
    }

    let batch = ctx.remaining_accounts;
    require!(!batch.is_empty(), RewardPoolError::ScanBatchEmpty);
    require!(
        cursor + batch.len() <= total_participants,
        RewardPoolError::ScanOutOfBounds
    );

    let enrollment_end = reward_pool.enrollment_end;
    let minimum_hold_period = reward_pool.minimum_hold_period;
    let pool_key = reward_pool.key();

    let mut batch_qualified: u64 = 0;
    for (i, record_info) in batch.iter().enumerate() {
        // Owner and discriminator are checked by the deserialization; the
        // field checks pin the record to the registry entry at the cursor.
        let record: Account<StakeRecord> = Account::try_from(record_info)?;
        require!(
            record.participant == registry.participants[cursor + i],
            RewardPoolError::RegistryMismatch
        );
        require!(
            record.pool == pool_key,
            RewardPoolError::RecordPoolMismatch
        );

        if record.qualifies(enrollment_end, minimum_hold_period) {
            batch_qualified = batch_qualified
                .checked_add(record.amount)
                .ok_or(RewardPoolError::MathOverflow)?;
        }
    }

    let reward_pool = &mut ctx.accounts.reward_pool;
    reward_pool.total_qualified_stake = reward_pool
        .total_qualified_stake
        .checked_add(batch_qualified)
        .ok_or(RewardPoolError::MathOverflow)?;
    reward_pool.scan_cursor = (cursor + batch.len()) as u32;

    if reward_pool.scan_cursor as usize == total_participants {
        reward_pool.qualification_computed = true;

        emit!(QualificationComputed {
            total_qualified_stake: reward_pool.total_qualified_stake,
        });
        msg!(
            "Qualification computed: {} qualified stake across {} participants",
            reward_pool.total_qualified_stake,
            total_participants
        );
    } else {
        msg!(
            "Qualification scan at {}/{} participants",
            reward_pool.scan_cursor,
            total_participants
        );
    }

    Ok(())
}
