//! Observable events emitted for external indexers.

use anchor_lang::prelude::*;

/// A participant deposited tokens during the enrollment window.
#[event]
pub struct Staked {
    pub participant: Pubkey,
    pub amount: u64,
}

/// A participant exited before the deadline, recovering their full stake.
#[event]
pub struct Unstaked {
    pub participant: Pubkey,
    pub amount: u64,
}

/// The qualification scan ran to completion.
#[event]
pub struct QualificationComputed {
    pub total_qualified_stake: u64,
}

/// A participant drew their reward share (possibly zero).
#[event]
pub struct Claimed {
    pub participant: Pubkey,
    pub reward: u64,
}

/// A participant recovered their staked principal after the deadline.
#[event]
pub struct PrincipalWithdrawn {
    pub participant: Pubkey,
    pub amount: u64,
}

/// The owner swept the untouched reserve after a no-qualifier campaign.
#[event]
pub struct ResidualSwept {
    pub owner: Pubkey,
    pub amount: u64,
}
