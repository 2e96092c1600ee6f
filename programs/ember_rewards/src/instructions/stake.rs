//! Stake instruction handler.
//!
//! Handles depositing EMBER tokens during the enrollment window.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::RewardPoolError;
use crate::events::Staked;
use crate::state::{ParticipantRegistry, RewardPool, StakeRecord};

/// Accounts required for staking.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The participant staking tokens.
    #[account(mut)]
    pub participant: Signer<'info>,

    /// The reward pool.
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED, reward_pool.staking_mint.as_ref()],
        bump = reward_pool.bump,
        has_one = stake_vault @ RewardPoolError::VaultMismatch,
        has_one = staking_mint @ RewardPoolError::MintMismatch
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// The participant enumeration, appended to on first stake.
    #[account(
        mut,
        seeds = [REGISTRY_SEED, reward_pool.key().as_ref()],
        bump = registry.bump,
        constraint = registry.pool == reward_pool.key() @ RewardPoolError::RecordPoolMismatch
    )]
    pub registry: Account<'info, ParticipantRegistry>,

    /// Participant's stake record (created on first stake).
    #[account(
        init_if_needed,
        payer = participant,
        space = StakeRecord::LEN,
        seeds = [STAKE_RECORD_SEED, reward_pool.key().as_ref(), participant.key().as_ref()],
        bump
    )]
    pub stake_record: Account<'info, StakeRecord>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// Participant's token account for the staking token.
    #[account(
        mut,
        constraint = participant_token_account.mint == staking_mint.key() @ RewardPoolError::MintMismatch,
        constraint = participant_token_account.owner == participant.key()
    )]
    pub participant_token_account: Account<'info, TokenAccount>,

    /// Pool's stake vault.
    #[account(
        mut,
        constraint = stake_vault.key() == reward_pool.stake_vault @ RewardPoolError::VaultMismatch
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar.
    pub rent: Sysvar<'info, Rent>,
}

/// Stake tokens into the pool.
///
/// Each participant may stake exactly once for the lifetime of the pool;
/// there is no top-up and no re-entry after an unstake.
///
/// # Arguments
/// * `ctx` - Stake accounts context
/// * `amount` - Amount of tokens to stake
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let reward_pool = &ctx.accounts.reward_pool;
    let stake_record = &ctx.accounts.stake_record;
    let registry = &ctx.accounts.registry;
    let clock = Clock::get()?;

    // Staking is only valid while enrollment is open.
    require!(
        reward_pool.is_enrollment_open(clock.unix_timestamp),
        RewardPoolError::EnrollmentClosed
    );

    // Validate amount
    require!(amount > 0, RewardPoolError::InvalidAmount);

    // One stake per participant, ever. `enrolled` survives unstake, so a
    // returning participant is rejected here as well.
    require!(!stake_record.enrolled, RewardPoolError::AlreadyStaked);

    require!(registry.has_capacity(), RewardPoolError::RegistryFull);

    // Transfer tokens from participant to the stake vault
    let cpi_accounts = Transfer {
        from: ctx.accounts.participant_token_account.to_account_info(),
        to: ctx.accounts.stake_vault.to_account_info(),
        authority: ctx.accounts.participant.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    // Record the stake
    let stake_record = &mut ctx.accounts.stake_record;
    stake_record.participant = ctx.accounts.participant.key();
    stake_record.pool = ctx.accounts.reward_pool.key();
    stake_record.amount = amount;
    stake_record.stake_time = clock.unix_timestamp;
    stake_record.enrolled = true;
    stake_record.claimed = false;
    stake_record.withdrawn = false;
    stake_record.bump = ctx.bumps.stake_record;

    // Enumerate the participant
    let registry = &mut ctx.accounts.registry;
    registry.participants.push(ctx.accounts.participant.key());

    // Update pool custody total
    let reward_pool = &mut ctx.accounts.reward_pool;
    reward_pool.total_staked = reward_pool
        .total_staked
        .checked_add(amount)
        .ok_or(RewardPoolError::MathOverflow)?;

    emit!(Staked {
        participant: ctx.accounts.participant.key(),
        amount,
    });

    msg!("Staked {} tokens", amount);
    msg!("Total staked in pool: {}", ctx.accounts.reward_pool.total_staked);

    Ok(())
}
