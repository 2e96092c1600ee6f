use anchor_lang::prelude::*;

#[account]
pub struct RewardPool {
    pub owner: Pubkey,
    pub staking_mint: Pubkey,
    pub stake_vault: Pubkey,
    pub reserve_vault: Pubkey,

    /// Fixed total reward amount, funded at initialization.
    pub reward_reserve: u64,
    /// Deadline timestamp; staking and unstaking stop here.
    pub enrollment_end: i64,
    /// How long a stake must have existed before `enrollment_end` to qualify.
    pub minimum_hold_period: i64,

    /// Principal currently in custody; mirrors the stake vault balance.
    pub total_staked: u64,
    /// Snapshot denominator, fixed once the qualification scan finishes.
    pub total_qualified_stake: u64,
    pub qualification_computed: bool,
    /// Next registry index for the resumable qualification scan.
    pub scan_cursor: u32,

    pub created_at: i64,

    pub stake_vault_bump: u8,
    pub reserve_vault_bump: u8,
    pub bump: u8,
}

impl RewardPool {
    pub const LEN: usize = 8
        + (32 * 4)
        + (8 * 3)
        + (8 * 2)
        + 1
        + 4
        + 8
        + 3;

    /// Staking and unstaking are permitted strictly before the deadline.
    pub fn is_enrollment_open(&self, now: i64) -> bool {
        now < self.enrollment_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(enrollment_end: i64) -> RewardPool {
        RewardPool {
            owner: Pubkey::new_unique(),
            staking_mint: Pubkey::new_unique(),
            stake_vault: Pubkey::new_unique(),
            reserve_vault: Pubkey::new_unique(),
            reward_reserve: 1_000,
            enrollment_end,
            minimum_hold_period: 7 * 86_400,
            total_staked: 0,
            total_qualified_stake: 0,
            qualification_computed: false,
            scan_cursor: 0,
            created_at: 0,
            stake_vault_bump: 255,
            reserve_vault_bump: 255,
            bump: 255,
        }
    }

    #[test]
    fn enrollment_open_before_deadline() {
        let p = pool(1_000);
        assert!(p.is_enrollment_open(999));
    }

    #[test]
    fn enrollment_closed_at_deadline() {
        // The deadline itself is already closed: `now < enrollment_end`.
        let p = pool(1_000);
        assert!(!p.is_enrollment_open(1_000));
        assert!(!p.is_enrollment_open(1_001));
    }
}
