use anchor_lang::prelude::*;

/// Append-only list of every address that has ever staked in the pool.
///
/// Entries are never removed; a participant who unstaked stays listed with
/// a zero-amount record and is skipped by the qualification scan. Insertion
/// order is irrelevant to correctness, only completeness matters.
#[account]
pub struct ParticipantRegistry {
    pub pool: Pubkey,
    pub max_participants: u32,
    pub bump: u8,
    pub participants: Vec<Pubkey>,
}

impl ParticipantRegistry {
    /// Account size for a registry with room for `max_participants` entries.
    pub fn space(max_participants: u32) -> usize {
        8 + 32 + 4 + 1 + 4 + 32 * max_participants as usize
    }

    pub fn has_capacity(&self) -> bool {
        self.participants.len() < self.max_participants as usize
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(max_participants: u32) -> ParticipantRegistry {
        ParticipantRegistry {
            pool: Pubkey::new_unique(),
            max_participants,
            bump: 255,
            participants: Vec::new(),
        }
    }

    #[test]
    fn capacity_is_enforced() {
        let mut reg = registry(2);
        assert!(reg.has_capacity());
        reg.participants.push(Pubkey::new_unique());
        assert!(reg.has_capacity());
        reg.participants.push(Pubkey::new_unique());
        assert!(!reg.has_capacity());
    }

    #[test]
    fn space_accounts_for_every_entry() {
        // Discriminator + pool + max + bump + vec length prefix + entries.
        assert_eq!(ParticipantRegistry::space(0), 8 + 32 + 4 + 1 + 4);
        assert_eq!(ParticipantRegistry::space(10), 8 + 32 + 4 + 1 + 4 + 320);
    }
}
