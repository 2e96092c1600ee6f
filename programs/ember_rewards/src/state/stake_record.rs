use anchor_lang::prelude::*;

#[account]
pub struct StakeRecord {
    pub participant: Pubkey,
    pub pool: Pubkey,

    /// Currently staked quantity; zeroed by unstake, preserved by principal
    /// withdrawal as a historical record of the original stake size.
    pub amount: u64,
    /// Set exactly once at first stake; zeroed by unstake.
    pub stake_time: i64,

    /// Set at first stake and never cleared - enforces the stake-once rule.
    pub enrolled: bool,
    /// Monotone: false -> true, even when the reward share is zero.
    pub claimed: bool,
    /// Monotone: false -> true.
    pub withdrawn: bool,
    pub bump: u8,
}

impl StakeRecord {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 1 + 1 + 1 + 1;

    /// A stake qualifies for rewards when it is live and was placed at least
    /// `minimum_hold_period` before the enrollment deadline. The test runs
    /// against the fixed deadline, never the current time, so qualification
    /// cannot change after the window closes.
    pub fn qualifies(&self, enrollment_end: i64, minimum_hold_period: i64) -> bool {
        if self.amount == 0 {
            return false;
        }
        match self.stake_time.checked_add(minimum_hold_period) {
            Some(earliest_qualified) => enrollment_end >= earliest_qualified,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400;

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
    fn early_stake_qualifies() {
        let r = record(100, 0);
        assert!(r.qualifies(30 * DAY, 7 * DAY));
    }

    #[test]
    fn boundary_hold_qualifies() {
        // Held for exactly the minimum period.
        let r = record(100, 23 * DAY);
        assert!(r.qualifies(30 * DAY, 7 * DAY));
    }

    #[test]
    fn late_stake_does_not_qualify() {
        // Two days of holding against a seven day minimum.
        let r = record(300, 28 * DAY);
        assert!(!r.qualifies(30 * DAY, 7 * DAY));
    }

    #[test]
    fn unstaked_record_does_not_qualify() {
        let r = record(0, 0);
        assert!(!r.qualifies(30 * DAY, 7 * DAY));
    }

    #[test]
    fn zero_hold_period_qualifies_any_live_stake() {
        let r = record(1, 30 * DAY - 1);
        assert!(r.qualifies(30 * DAY, 0));
    }

    #[test]
    fn hold_period_overflow_is_not_qualified() {
        let r = record(100, i64::MAX - 10);
        assert!(!r.qualifies(i64::MAX, 100));
    }
}
