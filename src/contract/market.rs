//! Contract market clause negotiation

use super::{Clause, CommandRights, Contract};
use ahash::AHashMap;
use rand::Rng;

/// Roll 2d6
#[inline]
fn roll_2d6<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(1..=6) + rng.gen_range(1..=6)
}

/// Tracks clause re-rolls and roll modifiers for contracts on offer
#[derive(Debug, Default, Clone)]
pub struct ContractMarket {
    rerolls_used: AHashMap<(u32, Clause), u32>,
    clause_mods: AHashMap<(u32, Clause), i32>,
}

impl ContractMarket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-rolls already spent on a clause of a contract
    pub fn rerolls_used(&self, contract: &Contract, clause: Clause) -> u32 {
        self.rerolls_used
            .get(&(contract.id, clause))
            .copied()
            .unwrap_or(0)
    }

    pub fn clause_mod(&self, contract: &Contract, clause: Clause) -> i32 {
        self.clause_mods
            .get(&(contract.id, clause))
            .copied()
            .unwrap_or(0)
    }

    pub fn set_clause_mod(&mut self, contract: &Contract, clause: Clause, modifier: i32) {
        self.clause_mods.insert((contract.id, clause), modifier);
    }

    /// Negotiate a clause again, replacing its terms with a fresh roll
    pub fn reroll_clause<R: Rng + ?Sized>(
        &mut self,
        contract: &mut Contract,
        clause: Clause,
        rng: &mut R,
    ) {
        let roll = roll_2d6(rng) + self.clause_mod(contract, clause);
        apply_clause_roll(contract, clause, roll);

        let used = self.rerolls_used.entry((contract.id, clause)).or_insert(0);
        *used += 1;

        tracing::debug!(
            target: "campaign_core::contract",
            contract = contract.id,
            clause = %clause,
            roll,
            used = *used,
            "clause.rerolled"
        );
    }

    /// Forget all bookkeeping for a contract, e.g. once it leaves the market
    pub fn remove_contract(&mut self, contract: &Contract) {
        self.rerolls_used.retain(|(id, _), _| *id != contract.id);
        self.clause_mods.retain(|(id, _), _| *id != contract.id);
    }
}

/// Set a clause's terms from a modified 2d6 roll
pub fn apply_clause_roll(contract: &mut Contract, clause: Clause, roll: i32) {
    match clause {
        Clause::Command => {
            contract.command_rights = if roll < 3 {
                CommandRights::Integrated
            } else if roll < 8 {
                CommandRights::House
            } else if roll < 11 {
                CommandRights::Liaison
            } else {
                CommandRights::Independent
            };
        }
        Clause::Transport => {
            contract.transport_comp = if roll < 2 {
                0
            } else if roll < 6 {
                20 + (roll - 2) * 5
            } else if roll < 10 {
                45 + (roll - 6) * 5
            } else {
                100
            };
        }
        Clause::Support => {
            if roll < 3 {
                contract.straight_support = 0;
                contract.battle_loss_comp = 0;
            } else if roll < 8 {
                contract.straight_support = (roll - 2) * 20;
                contract.battle_loss_comp = 0;
            } else {
                contract.straight_support = 0;
                contract.battle_loss_comp = ((roll - 8) * 20).min(100);
            }
        }
        Clause::Salvage => {
            if roll < 2 {
                contract.salvage_pct = 0;
                contract.salvage_exchange = false;
            } else if roll < 4 {
                contract.salvage_pct = (roll - 1) * 10;
                contract.salvage_exchange = true;
            } else {
                contract.salvage_pct = ((roll - 1) * 10).min(100);
                contract.salvage_exchange = false;
            }
        }
    }
}
