//! Withdraw-principal instruction handler.
//!
//! Post-deadline recovery of the original staked amount. Gated by the
//! deadline alone - the qualification scan is not required, so unqualified
//! participants are never locked out of their principal.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::RewardPoolError;
use crate::events::PrincipalWithdrawn;
use crate::state::{RewardPool, StakeRecord};

/// Accounts required for principal withdrawal.
#[derive(Accounts)]
pub struct WithdrawPrincipal<'info> {
    /// The participant recovering their stake.
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

    /// Participant's token account for receiving the principal.
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

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Withdraw the staked principal after the deadline.
///
/// The recorded `amount` is paid out in full and intentionally left in
/// place afterwards as a historical record of the original stake size;
/// the monotone `withdrawn` flag is the sole repeat-payout guard.
///
/// # Arguments
/// * `ctx` - WithdrawPrincipal accounts context
///
/// # Returns
/// Result indicating success or error
pub fn handler(ctx: Context<WithdrawPrincipal>) -> Result<()> {
    let clock = Clock::get()?;
    let reward_pool = &ctx.accounts.reward_pool;
    let stake_record = &ctx.accounts.stake_record;

    require!(
        clock.unix_timestamp >= reward_pool.enrollment_end,
        RewardPoolError::EnrollmentStillActive
    );
    require!(stake_record.amount > 0, RewardPoolError::NeverStaked);
    require!(!stake_record.withdrawn, RewardPoolError::AlreadyWithdrawn);

    let amount = stake_record.amount;

    // Flag and custody bookkeeping before the payout
    {
        let stake_record = &mut ctx.accounts.stake_record;
        stake_record.withdrawn = true;

        let reward_pool = &mut ctx.accounts.reward_pool;
        reward_pool.total_staked = reward_pool
            .total_staked
            .checked_sub(amount)
            .ok_or(RewardPoolError::MathOverflow)?;
    }

    let staking_mint_key = ctx.accounts.reward_pool.staking_mint;
    let seeds = &[
        REWARD_POOL_SEED,
        staking_mint_key.as_ref(),
        &[ctx.accounts.reward_pool.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.stake_vault.to_account_info(),
        to: ctx.accounts.participant_token_account.to_account_info(),
        authority: ctx.accounts.reward_pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)?;

    emit!(PrincipalWithdrawn {
        participant: ctx.accounts.participant.key(),
        amount,
    });

    msg!("Withdrew {} principal tokens", amount);
    msg!("Total staked in pool: {}", ctx.accounts.reward_pool.total_staked);

    Ok(())
}
