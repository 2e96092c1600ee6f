//! Claim instruction handlers.
//!
//! Pays out a participant's pro-rata share of the fixed reward reserve,
//! plus the composite claim-and-withdraw convenience path.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::RewardPoolError;
use crate::events::{Claimed, PrincipalWithdrawn};
use crate::state::{RewardPool, StakeRecord};

/// Accounts required for claiming a reward share.
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The participant claiming their reward.
    #[account(mut)]
    pub participant: Signer<'info>,

    /// The reward pool.
    #[account(
        seeds = [REWARD_POOL_SEED, reward_pool.staking_mint.as_ref()],
        bump = reward_pool.bump,
        has_one = reserve_vault @ RewardPoolError::ReserveMismatch,
        has_one = staking_mint @ RewardPoolError::MintMismatch
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// Participant's stake record.
    #[account(
        mut,
        seeds = [STAKE_RECORD_SEED, reward_pool.key().as_ref(), participant.key().as_ref()],
        bump = stake_record.bump,
        constraint = stake_record.participant == participant.key() @ RewardPoolError::RecordOwnerMismatch,
        constraint = stake_record.pool == reward_pool.key() @ RewardPoolError::RecordPoolMismatch
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// Participant's token account for receiving the reward.
    #[account(
        mut,
        constraint = participant_token_account.mint == staking_mint.key() @ RewardPoolError::MintMismatch,
        constraint = participant_token_account.owner == participant.key()
    )]
    pub participant_token_account: Account<'info, TokenAccount>,

    /// Pool's reserve vault holding the reward custody.
    #[account(
        mut,
        constraint = reserve_vault.key() == reward_pool.reserve_vault @ RewardPoolError::ReserveMismatch
    )]
    pub reserve_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Accounts for the composite claim-then-withdraw path.
#[derive(Accounts)]
pub struct ClaimAndWithdraw<'info> {
    /// The participant claiming and withdrawing.
    #[account(mut)]
    pub participant: Signer<'info>,

    /// The reward pool.
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED, reward_pool.staking_mint.as_ref()],
        bump = reward_pool.bump,
        has_one = stake_vault @ RewardPoolError::VaultMismatch,
        has_one = reserve_vault @ RewardPoolError::ReserveMismatch,
        has_one = staking_mint @ RewardPoolError::MintMismatch
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// Participant's stake record.
    #[account(
        mut,
        seeds = [STAKE_RECORD_SEED, reward_pool.key().as_ref(), participant.key().as_ref()],
        bump = stake_record.bump,
        constraint = stake_record.participant == participant.key() @ RewardPoolError::RecordOwnerMismatch,
        constraint = stake_record.pool == reward_pool.key() @ RewardPoolError::RecordPoolMismatch
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// Participant's token account for receiving reward and principal.
    #[account(
        mut,
        constraint = participant_token_account.mint == staking_mint.key() @ RewardPoolError::MintMismatch,
        constraint = participant_token_account.owner == participant.key()
    )]
    pub participant_token_account: Account<'info, TokenAccount>,

    /// Pool's stake vault holding principal custody.
    #[account(
        mut,
        constraint = stake_vault.key() == reward_pool.stake_vault @ RewardPoolError::VaultMismatch
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    /// Pool's reserve vault holding the reward custody.
    #[account(
        mut,
        constraint = reserve_vault.key() == reward_pool.reserve_vault @ RewardPoolError::ReserveMismatch
    )]
    pub reserve_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim the participant's reward share.
///
/// The flag is set before the payout and even when the share is zero, so
/// repeated calls cannot probe state or draw twice.
///
/// # Arguments
/// * `ctx` - Claim accounts context
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let reward_pool = &ctx.accounts.reward_pool;
    let stake_record = &ctx.accounts.stake_record;

    require!(
        reward_pool.qualification_computed,
        RewardPoolError::QualificationNotComputed
    );
    require!(stake_record.amount > 0, RewardPoolError::NeverStaked);
    require!(!stake_record.claimed, RewardPoolError::AlreadyClaimed);

    let reward = calculate_reward(stake_record, reward_pool)?;

    // Flag first, payout second.
    ctx.accounts.stake_record.claimed = true;

    if reward > 0 {
        let staking_mint_key = ctx.accounts.reward_pool.staking_mint;
        let seeds = &[
            REWARD_POOL_SEED,
            staking_mint_key.as_ref(),
            &[ctx.accounts.reward_pool.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.reserve_vault.to_account_info(),
            to: ctx.accounts.participant_token_account.to_account_info(),
            authority: ctx.accounts.reward_pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, reward)?;
    }

    emit!(Claimed {
        participant: ctx.accounts.participant.key(),
        reward,
    });

    msg!("Claimed {} reward tokens", reward);

    Ok(())
}

/// Claim, then withdraw principal, in one instruction.
///
/// Surfaces whichever operation's failure occurs first; a completed scan
/// already implies the deadline has passed, so the claim gate subsumes the
/// withdrawal's time gate.
///
/// # Arguments
/// * `ctx` - ClaimAndWithdraw accounts context
///
/// # Returns
/// Result indicating success or error
pub fn claim_and_withdraw_handler(ctx: Context<ClaimAndWithdraw>) -> Result<()> {
    let clock = Clock::get()?;
    let reward_pool = &ctx.accounts.reward_pool;
    let stake_record = &ctx.accounts.stake_record;

    // Claim preconditions
    require!(
        reward_pool.qualification_computed,
        RewardPoolError::QualificationNotComputed
    );
    require!(stake_record.amount > 0, RewardPoolError::NeverStaked);
    require!(!stake_record.claimed, RewardPoolError::AlreadyClaimed);

    // Withdrawal preconditions, checked up front so neither leg commits if
    // the other cannot.
    require!(
        clock.unix_timestamp >= reward_pool.enrollment_end,
        RewardPoolError::EnrollmentStillActive
    );
    require!(!stake_record.withdrawn, RewardPoolError::AlreadyWithdrawn);

    let reward = calculate_reward(stake_record, reward_pool)?;
    let principal = stake_record.amount;

    // Flags and custody bookkeeping before any payout
    {
        let stake_record = &mut ctx.accounts.stake_record;
        stake_record.claimed = true;
        stake_record.withdrawn = true;

        let reward_pool = &mut ctx.accounts.reward_pool;
        reward_pool.total_staked = reward_pool
            .total_staked
            .checked_sub(principal)
            .ok_or(RewardPoolError::MathOverflow)?;
    }

    let staking_mint_key = ctx.accounts.reward_pool.staking_mint;
    let seeds = &[
        REWARD_POOL_SEED,
        staking_mint_key.as_ref(),
        &[ctx.accounts.reward_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    if reward > 0 {
        let cpi_accounts = Transfer {
            from: ctx.accounts.reserve_vault.to_account_info(),
            to: ctx.accounts.participant_token_account.to_account_info(),
            authority: ctx.accounts.reward_pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, reward)?;
    }

    let cpi_accounts = Transfer {
        from: ctx.accounts.stake_vault.to_account_info(),
        to: ctx.accounts.participant_token_account.to_account_info(),
        authority: ctx.accounts.reward_pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, principal)?;

    emit!(Claimed {
        participant: ctx.accounts.participant.key(),
        reward,
    });
    emit!(PrincipalWithdrawn {
        participant: ctx.accounts.participant.key(),
        amount: principal,
    });

    msg!("Claimed {} reward tokens", reward);
    msg!("Withdrew {} principal tokens", principal);

    Ok(())
}

/// Pure pro-rata reward computation.
///
/// Returns 0 when nobody qualified (avoids division by zero) or when the
/// record itself fails the hold-period test, recomputed per call so the
/// query is available before `claim`. Otherwise
/// `floor(amount * reward_reserve / total_qualified_stake)`; truncation
/// dust stays in the reserve vault.
///
/// # Arguments
/// * `stake_record` - The participant's stake record
/// * `reward_pool` - The reward pool
///
/// # Returns
/// The reward share in tokens
pub fn calculate_reward(stake_record: &StakeRecord, reward_pool: &RewardPool) -> Result<u64> {
    if reward_pool.total_qualified_stake == 0 {
        return Ok(0);
    }

    if !stake_record.qualifies(reward_pool.enrollment_end, reward_pool.minimum_hold_period) {
        return Ok(0);
    }

    // u128 intermediates: amount * reserve cannot overflow 128 bits.
    let amount = stake_record.amount as u128;
    let reserve = reward_pool.reward_reserve as u128;
    let total_qualified = reward_pool.total_qualified_stake as u128;

    let reward = amount
        .checked_mul(reserve)
        .ok_or(RewardPoolError::MathOverflow)?
        .checked_div(total_qualified)
        .ok_or(RewardPoolError::DivisionByZero)?;

    let reward_u64 = u64::try_from(reward).map_err(|_| RewardPoolError::ConversionOverflow)?;

    Ok(reward_u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;

    fn pool(reward_reserve: u64, total_qualified_stake: u64) -> RewardPool {
        RewardPool {
            owner: Pubkey::new_unique(),
            staking_mint: Pubkey::new_unique(),
            stake_vault: Pubkey::new_unique(),
            reserve_vault: Pubkey::new_unique(),
            reward_reserve,
            enrollment_end: 30 * DAY,
            minimum_hold_period: 7 * DAY,
            total_staked: 0,
            total_qualified_stake,
            qualification_computed: true,
            scan_cursor: 0,
            created_at: 0,
            stake_vault_bump: 255,
            reserve_vault_bump: 255,
            bump: 255,
        }
    }

    fn record(amount: u64, stake_time: i64) -> StakeRecord {
        StakeRecord {
            participant: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            amount,
            stake_time,
            enrolled: true,
            claimed: false,
            withdrawn: false,
            bump: 255,
        }
    }

    #[test]
    fn sole_qualified_staker_takes_full_reserve() {
        // Reserve 1000, A stakes 100 at t=0, window 30d, hold 7d.
        let pool = pool(1_000, 100);
        let a = record(100, 0);
        assert_eq!(calculate_reward(&a, &pool).unwrap(), 1_000);
    }

    #[test]
    fn late_staker_earns_nothing_but_unqualified_stake_stays_out_of_denominator() {
        // A stakes 100 at t=0, B stakes 300 two days before the deadline.
        // Only A's 100 is in the denominator.
        let pool = pool(1_000, 100);
        let a = record(100, 0);
        let b = record(300, 28 * DAY);
        assert_eq!(calculate_reward(&a, &pool).unwrap(), 1_000);
        assert_eq!(calculate_reward(&b, &pool).unwrap(), 0);
    }

    #[test]
    fn zero_denominator_yields_zero_without_error() {
        let pool = pool(1_000, 0);
        let a = record(100, 0);
        assert_eq!(calculate_reward(&a, &pool).unwrap(), 0);
    }

    #[test]
    fn floor_division_never_over_allocates() {
        // 3-way split of 1000 over 3/7, 2/7, 2/7 of the qualified stake.
        let pool = pool(1_000, 700);
        let shares = [record(300, 0), record(200, 0), record(200, 0)];
        let total: u64 = shares
            .iter()
            .map(|r| calculate_reward(r, &pool).unwrap())
            .sum();
        assert!(total <= 1_000);
        // 428 + 285 + 285
        assert_eq!(total, 998);
    }

    #[test]
    fn extreme_magnitudes_fit_in_u128_intermediates() {
        let pool = pool(u64::MAX, u64::MAX);
        let whale = record(u64::MAX, 0);
        assert_eq!(calculate_reward(&whale, &pool).unwrap(), u64::MAX);
    }

    #[test]
    fn proportional_split_matches_stake_weights() {
        let pool = pool(900, 300);
        let a = record(100, 0);
        let b = record(200, 0);
        assert_eq!(calculate_reward(&a, &pool).unwrap(), 300);
        assert_eq!(calculate_reward(&b, &pool).unwrap(), 600);
    }
}
