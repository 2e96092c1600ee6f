/// Admin instruction handlers.
///
/// Owner-gated operations: sweeping the untouched reserve after a campaign
/// where nobody qualified, and handing over the owner capability.
///
/// ## Security Guarantees
/// - All admin functions require signer == pool.owner
/// - The residual sweep is blocked while any qualified claim is outstanding

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::RewardPoolError;
use crate::events::ResidualSwept;
use crate::state::RewardPool;

/// Accounts required for the residual sweep.
#[derive(Accounts)]
pub struct WithdrawResidual<'info> {
    /// The pool owner.
    /// SECURITY: Must be signer AND match pool.owner.
    #[account(
        mut,
        constraint = owner.key() == reward_pool.owner @ RewardPoolError::NotOwner
    )]
    pub owner: Signer<'info>,

    /// The reward pool.
    #[account(
        seeds = [REWARD_POOL_SEED, reward_pool.staking_mint.as_ref()],
        bump = reward_pool.bump,
        has_one = owner @ RewardPoolError::NotOwner,
        has_one = reserve_vault @ RewardPoolError::ReserveMismatch,
        has_one = staking_mint @ RewardPoolError::MintMismatch
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// Owner's token account for receiving the residual.
    #[account(
        mut,
        constraint = owner_token_account.mint == staking_mint.key() @ RewardPoolError::MintMismatch,
        constraint = owner_token_account.owner == owner.key()
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    /// Pool's reserve vault.
    #[account(
        mut,
        constraint = reserve_vault.key() == reward_pool.reserve_vault @ RewardPoolError::ReserveMismatch
    )]
    pub reserve_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Accounts required for ownership transfer.
#[derive(Accounts)]
pub struct AdminControl<'info> {
    /// The current pool owner.
    #[account(
        constraint = owner.key() == reward_pool.owner @ RewardPoolError::NotOwner
    )]
    pub owner: Signer<'info>,

    /// The reward pool to modify.
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED, reward_pool.staking_mint.as_ref()],
        bump = reward_pool.bump,
        has_one = owner @ RewardPoolError::NotOwner
    )]
    pub reward_pool: Account<'info, RewardPool>,
}

/// Sweep the entire remaining reserve to the owner.
///
/// Only legal once the scan has completed with nobody qualified - the
/// `total_qualified_stake == 0` gate means no claim can ever draw on the
/// reserve, so committed rewards can never be swept out from under
/// qualified stakers. Principal custody lives in the stake vault and is
/// untouched.
///
/// # Arguments
/// * `ctx` - WithdrawResidual accounts context
///
/// # Returns
/// Result indicating success or error
pub fn withdraw_residual_handler(ctx: Context<WithdrawResidual>) -> Result<()> {
    let clock = Clock::get()?;
    let reward_pool = &ctx.accounts.reward_pool;

    require!(
        clock.unix_timestamp >= reward_pool.enrollment_end,
        RewardPoolError::EnrollmentStillActive
    );
    require!(
        reward_pool.qualification_computed,
        RewardPoolError::QualificationNotComputed
    );
    require!(
        reward_pool.total_qualified_stake == 0,
        RewardPoolError::QualifiedStakersExist
    );

    let residual = ctx.accounts.reserve_vault.amount;

    if residual > 0 {
        let staking_mint_key = reward_pool.staking_mint;
        let seeds = &[
            REWARD_POOL_SEED,
            staking_mint_key.as_ref(),
            &[reward_pool.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: ctx.accounts.reserve_vault.to_account_info(),
            to: ctx.accounts.owner_token_account.to_account_info(),
            authority: ctx.accounts.reward_pool.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, residual)?;
    }

    emit!(ResidualSwept {
        owner: ctx.accounts.owner.key(),
        amount: residual,
    });

    msg!("Swept {} residual tokens to owner", residual);

    Ok(())
}

/// Transfer the owner capability to a new address.
///
/// # Arguments
/// * `ctx` - AdminControl accounts context
/// * `new_owner` - New owner pubkey
///
/// # Returns
/// Result indicating success or error
pub fn transfer_ownership_handler(ctx: Context<AdminControl>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), RewardPoolError::NotOwner);

    let reward_pool = &mut ctx.accounts.reward_pool;
    let old_owner = reward_pool.owner;
    reward_pool.owner = new_owner;

    msg!("Ownership transferred: {} -> {}", old_owner, new_owner);

    Ok(())
}
