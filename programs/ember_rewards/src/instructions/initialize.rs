/// Initialize instruction handler.
///
/// Creates and funds a new reward pool in a single atomic instruction.
///
/// ## Security Guarantees
/// - Stake and reserve vaults are PDAs owned by the reward pool
/// - Mint address is locked to pool state permanently
/// - The reserve is pulled from the owner in the same instruction, so the
///   pool can never exist claiming custody of tokens it does not hold

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::RewardPoolError;
use crate::state::{ParticipantRegistry, RewardPool};

/// Accounts required for pool initialization.
///
/// ## Security Notes
/// - `stake_vault` and `reserve_vault` are PDAs with `reward_pool` as
///   authority; seeds ensure they cannot be swapped or replaced
/// - Mint is validated and locked to pool state
#[derive(Accounts)]
#[instruction(
    reserve_amount: u64,
    enrollment_duration: i64,
    minimum_hold_period: i64,
    max_participants: u32
)]
pub struct Initialize<'info> {
    /// The owner that funds the reserve and holds the admin capability.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The reward pool account to be created.
    /// SECURITY: PDA derived from REWARD_POOL_SEED + mint ensures uniqueness
    /// per token.
    #[account(
        init,
        payer = owner,
        space = RewardPool::LEN,
        seeds = [REWARD_POOL_SEED, staking_mint.key().as_ref()],
        bump
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// The append-only participant enumeration, sized for `max_participants`.
    #[account(
        init,
        payer = owner,
        space = ParticipantRegistry::space(max_participants),
        seeds = [REGISTRY_SEED, reward_pool.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, ParticipantRegistry>,

    /// The mint for the staking token (EMBER).
    pub staking_mint: Account<'info, Mint>,

    /// Owner's token account funding the reserve.
    #[account(
        mut,
        constraint = owner_token_account.mint == staking_mint.key() @ RewardPoolError::MintMismatch,
        constraint = owner_token_account.owner == owner.key()
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    /// The vault that will hold staked principal.
    #[account(
        init,
        payer = owner,
        seeds = [STAKE_VAULT_SEED, reward_pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = reward_pool
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    /// The vault that will hold the reward reserve.
    #[account(
        init,
        payer = owner,
        seeds = [RESERVE_VAULT_SEED, reward_pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = reward_pool
    )]
    pub reserve_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for token account operations.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize a new reward pool.
///
/// Pulls `reserve_amount` from the owner into the reserve vault, fixes the
/// enrollment deadline at `now + enrollment_duration`, and freezes the pool
/// parameters.
///
/// # Arguments
/// * `ctx` - Initialize accounts context
/// * `reserve_amount` - Fixed total reward amount to fund
/// * `enrollment_duration` - Enrollment window length in seconds
/// * `minimum_hold_period` - Required hold duration before the deadline
/// * `max_participants` - Registry capacity
///
/// # Returns
/// Result indicating success or error
pub fn handler(
    ctx: Context<Initialize>,
    reserve_amount: u64,
    enrollment_duration: i64,
    minimum_hold_period: i64,
    max_participants: u32,
) -> Result<()> {
    // === INPUT VALIDATION ===

    require!(reserve_amount > 0, RewardPoolError::ZeroReserve);
    require!(enrollment_duration > 0, RewardPoolError::InvalidDuration);
    require!(minimum_hold_period >= 0, RewardPoolError::InvalidHoldPeriod);
    require!(max_participants > 0, RewardPoolError::ZeroCapacity);

    // === SECURITY VERIFICATION ===

    // Anchor enforces vault authority via token::authority; explicit checks
    // kept for defense in depth.
    require!(
        ctx.accounts.stake_vault.owner == ctx.accounts.reward_pool.key(),
        RewardPoolError::InvalidVaultOwner
    );
    require!(
        ctx.accounts.reserve_vault.owner == ctx.accounts.reward_pool.key(),
        RewardPoolError::InvalidVaultOwner
    );
    require!(
        ctx.accounts.stake_vault.mint == ctx.accounts.staking_mint.key(),
        RewardPoolError::MintMismatch
    );
    require!(
        ctx.accounts.reserve_vault.mint == ctx.accounts.staking_mint.key(),
        RewardPoolError::MintMismatch
    );

    // === RESERVE FUNDING ===

    // Surface an underfunded owner as the typed error before the CPI.
    require!(
        ctx.accounts.owner_token_account.amount >= reserve_amount,
        RewardPoolError::FundingFailed
    );

    let cpi_accounts = Transfer {
        from: ctx.accounts.owner_token_account.to_account_info(),
        to: ctx.accounts.reserve_vault.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, reserve_amount)?;

    // === STATE INITIALIZATION ===

    let clock = Clock::get()?;
    let enrollment_end = clock
        .unix_timestamp
        .checked_add(enrollment_duration)
        .ok_or(RewardPoolError::MathOverflow)?;

    let reward_pool = &mut ctx.accounts.reward_pool;
    reward_pool.owner = ctx.accounts.owner.key();
    reward_pool.staking_mint = ctx.accounts.staking_mint.key(); // LOCKED - never changes
    reward_pool.stake_vault = ctx.accounts.stake_vault.key(); // LOCKED - PDA reference
    reward_pool.reserve_vault = ctx.accounts.reserve_vault.key(); // LOCKED - PDA reference
    reward_pool.reward_reserve = reserve_amount;
    reward_pool.enrollment_end = enrollment_end;
    reward_pool.minimum_hold_period = minimum_hold_period;
    reward_pool.total_staked = 0;
    reward_pool.total_qualified_stake = 0;
    reward_pool.qualification_computed = false;
    reward_pool.scan_cursor = 0;
    reward_pool.created_at = clock.unix_timestamp;
    reward_pool.bump = ctx.bumps.reward_pool;
    reward_pool.stake_vault_bump = ctx.bumps.stake_vault;
    reward_pool.reserve_vault_bump = ctx.bumps.reserve_vault;

    let registry = &mut ctx.accounts.registry;
    registry.pool = reward_pool.key();
    registry.max_participants = max_participants;
    registry.bump = ctx.bumps.registry;
    registry.participants = Vec::new();

    msg!("Ember reward pool initialized");
    msg!("Owner: {}", ctx.accounts.owner.key());
    msg!("Mint: {}", ctx.accounts.staking_mint.key());
    msg!("Reserve: {}", reserve_amount);
    msg!(
        "Enrollment ends at {} (hold period {}s, capacity {})",
        enrollment_end,
        minimum_hold_period,
        max_participants
    );

    Ok(())
}
