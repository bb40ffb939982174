//! Contract summary view model
//!
//! Produces the labelled rows shown when reviewing a contract offer and
//! drives clause renegotiation within the allowance granted by the unit's
//! administrators.

use super::{rating_text, Clause, Contract, ContractMarket};
use crate::campaign::{CampaignContext, FACTION_MERCENARY, FACTION_PIRATE};
use crate::error::{CampaignError, Result};
use crate::personnel::PersonnelRole;
use crate::skills::SkillType;
use rand::Rng;
use time::macros::format_description;

/// `yyyy/MM/dd`, empty (with a warning) if the date cannot be formatted
fn format_start_date(contract: &Contract) -> String {
    match contract
        .start_date
        .format(format_description!("[year]/[month]/[day]"))
    {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(
                target: "campaign_core::contract",
                contract = contract.id,
                error = %err,
                "summary.start_date_unformattable"
            );
            String::new()
        }
    }
}

/// Clause re-rolls granted by each administrator's negotiation skill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RerollAllowance {
    pub command: u32,
    pub logistics: u32,
    pub transport: u32,
}

impl RerollAllowance {
    pub fn from_campaign<C: CampaignContext + ?Sized>(campaign: &C) -> Self {
        let negotiation = |role: PersonnelRole| {
            campaign
                .find_best_in_role(role, SkillType::Negotiation, SkillType::Administration)
                .and_then(|admin| admin.skill(SkillType::Negotiation))
                .map_or(0, |level| level.max(0) as u32)
        };

        Self {
            command: negotiation(PersonnelRole::AdminCommand),
            logistics: negotiation(PersonnelRole::AdminLogistics),
            transport: negotiation(PersonnelRole::AdminTransport),
        }
    }

    pub fn for_clause(&self, clause: Clause) -> u32 {
        match clause {
            Clause::Command => self.command,
            Clause::Support => self.logistics,
            Clause::Transport => self.transport,
            Clause::Salvage => 0,
        }
    }
}

/// One labelled line of the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Clause term and re-roll control after a renegotiation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseState {
    pub clause: Clause,
    pub value: String,
    pub remaining: u32,
    pub enabled: bool,
}

/// Summary of one contract offer
pub struct ContractSummary<'a, C: CampaignContext + ?Sized> {
    contract: &'a mut Contract,
    campaign: &'a C,
    market: &'a mut ContractMarket,
    allow_rerolls: bool,
    allowance: RerollAllowance,
}

impl<'a, C: CampaignContext + ?Sized> ContractSummary<'a, C> {
    pub fn new(
        contract: &'a mut Contract,
        campaign: &'a C,
        market: &'a mut ContractMarket,
        allow_rerolls: bool,
    ) -> Self {
        let allowance = if allow_rerolls {
            RerollAllowance::from_campaign(campaign)
        } else {
            RerollAllowance::default()
        };

        Self {
            contract,
            campaign,
            market,
            allow_rerolls,
            allowance,
        }
    }

    pub fn allowance(&self) -> RerollAllowance {
        self.allowance
    }

    pub fn contract(&self) -> &Contract {
        self.contract
    }

    pub fn contract_name(&self) -> &str {
        &self.contract.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.contract.name = name.into();
    }

    /// Travel days and jumps to the contract system, `None` when unreachable
    pub fn distance(&self) -> Option<(i32, u32)> {
        let path = self.campaign.jump_path(&self.contract.system_id)?;
        if self.campaign.current_system_id() == self.contract.system_id
            && self.campaign.is_on_planet()
        {
            return Some((0, 0));
        }
        Some((path.days.ceil() as i32, path.jumps))
    }

    pub fn rows(&self) -> Vec<SummaryRow> {
        let contract = &*self.contract;
        let mut rows = Vec::with_capacity(18);
        let mut push = |label: &'static str, value: String| rows.push(SummaryRow { label, value });

        push("Name", contract.name.clone());
        push("Employer", contract.employer.clone());
        if let Some(atb) = &contract.atb {
            push("Enemy", atb.enemy_name.clone());
        }
        push("Mission Type", contract.mission_type.clone());
        push("Location", contract.system_name.clone());
        if let Some((days, jumps)) = self.distance() {
            push("Distance", format!("{}({})", days, jumps));
        }
        if let Some(atb) = &contract.atb {
            push("Ally Rating", rating_text(atb.ally_skill, atb.ally_quality));
            push("Enemy Rating", rating_text(atb.enemy_skill, atb.enemy_quality));
        }
        push("Start Date", format_start_date(contract));
        push("Length", contract.length.to_string());
        push("Overhead", contract.overhead_comp.name().to_string());
        push("Command", self.clause_value(Clause::Command));
        push("Transport", self.clause_value(Clause::Transport));
        push("Salvage Rights", self.clause_value(Clause::Salvage));
        push("Straight Support", self.clause_value(Clause::Support));
        push("Battle Loss Comp", format!("{}%", contract.battle_loss_comp));
        if let Some(atb) = &contract.atb {
            push("Required Lances", format!("{} Lance(s)", atb.required_lances));
        }

        rows
    }

    /// Display text of a clause's current terms
    pub fn clause_value(&self, clause: Clause) -> String {
        let contract = &*self.contract;
        match clause {
            Clause::Command => contract.command_rights.name().to_string(),
            Clause::Transport => format!("{}%", contract.transport_comp),
            Clause::Support => format!("{}%", contract.straight_support),
            Clause::Salvage => format!(
                "{}%{}",
                contract.salvage_pct,
                if contract.salvage_exchange { " (Exchange)" } else { "" }
            ),
        }
    }

    fn is_negotiable(&self, clause: Clause) -> bool {
        match clause {
            Clause::Command => {
                let faction = self.campaign.faction_code();
                faction == FACTION_MERCENARY || faction == FACTION_PIRATE
            }
            Clause::Support | Clause::Transport => true,
            Clause::Salvage => false,
        }
    }

    pub fn remaining_rerolls(&self, clause: Clause) -> u32 {
        self.allowance
            .for_clause(clause)
            .saturating_sub(self.market.rerolls_used(self.contract, clause))
    }

    /// Whether a renegotiate control is offered for the clause.
    ///
    /// House units are always integrated, so command rights are only
    /// negotiable for mercenaries and pirates.
    pub fn has_rerolls(&self, clause: Clause) -> bool {
        self.allow_rerolls && self.is_negotiable(clause) && self.remaining_rerolls(clause) > 0
    }

    pub fn reroll_label(&self, clause: Clause) -> String {
        format!("Renegotiate ({})", self.remaining_rerolls(clause))
    }

    /// Spend one re-roll on a clause
    pub fn reroll<R: Rng + ?Sized>(&mut self, clause: Clause, rng: &mut R) -> Result<ClauseState> {
        if !self.allow_rerolls || !self.contract.is_atb() || !self.is_negotiable(clause) {
            return Err(CampaignError::RerollsNotAllowed(clause));
        }
        if self.remaining_rerolls(clause) == 0 {
            return Err(CampaignError::NoRerollsRemaining(clause));
        }

        self.market.reroll_clause(self.contract, clause, rng);

        let remaining = self.remaining_rerolls(clause);
        Ok(ClauseState {
            clause,
            value: self.clause_value(clause),
            remaining,
            enabled: remaining > 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::{Campaign, StarSystem};
    use crate::contract::{AtbDetails, CommandRights, OverheadComp};
    use crate::personnel::Person;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use time::macros::date;

    fn campaign(faction: &str) -> Campaign {
        let galax = StarSystem::new("Galax", "Galax").owned_by(2800, &["FS"]);
        let mut c = Campaign::new(date!(3030 - 01 - 01), faction, galax);
        c.add_system(StarSystem::new("Tikonov", "Tikonov"));
        c.add_route("Tikonov", 12.3, 2);
        c.add_person(
            Person::new(1, "Cmd", "FS")
                .with_role(PersonnelRole::AdminCommand)
                .with_skill(SkillType::Negotiation, 2),
        );
        c.add_person(
            Person::new(2, "Log", "FS")
                .with_role(PersonnelRole::AdminLogistics)
                .with_skill(SkillType::Negotiation, 1),
        );
        c.add_person(
            Person::new(3, "Tra", "FS")
                .with_role(PersonnelRole::AdminTransport)
                .with_skill(SkillType::Administration, 4),
        );
        c
    }

    fn contract() -> Contract {
        let mut c = Contract::new(9, "Raid on Tikonov", "Tikonov", date!(3030 - 02 - 15));
        c.employer = "Federated Suns".to_string();
        c.mission_type = "Objective Raid".to_string();
        c.length = 6;
        c.overhead_comp = OverheadComp::Half;
        c.command_rights = CommandRights::House;
        c.transport_comp = 50;
        c.salvage_pct = 40;
        c.salvage_exchange = true;
        c.straight_support = 60;
        c.battle_loss_comp = 10;
        c.atb = Some(AtbDetails {
            enemy_name: "Capellan Confederation".to_string(),
            ally_skill: 1,
            ally_quality: 2,
            enemy_skill: 2,
            enemy_quality: 1,
            required_lances: 3,
        });
        c
    }

    fn value(rows: &[SummaryRow], label: &str) -> Option<String> {
        rows.iter().find(|r| r.label == label).map(|r| r.value.clone())
    }

    #[test]
    fn test_allowance_from_negotiators() {
        let c = campaign("MERC");
        let allowance = RerollAllowance::from_campaign(&c);
        assert_eq!(
            allowance,
            RerollAllowance {
                command: 2,
                logistics: 1,
                transport: 0,
            }
        );
    }

    #[test]
    fn test_rows() {
        let c = campaign("MERC");
        let mut k = contract();
        let mut market = ContractMarket::new();
        let summary = ContractSummary::new(&mut k, &c, &mut market, false);
        let rows = summary.rows();

        assert_eq!(value(&rows, "Enemy").as_deref(), Some("Capellan Confederation"));
        assert_eq!(value(&rows, "Distance").as_deref(), Some("13(2)"));
        assert_eq!(value(&rows, "Ally Rating").as_deref(), Some("Regular/C"));
        assert_eq!(value(&rows, "Enemy Rating").as_deref(), Some("Veteran/D"));
        assert_eq!(value(&rows, "Start Date").as_deref(), Some("3030/02/15"));
        assert_eq!(value(&rows, "Overhead").as_deref(), Some("Half"));
        assert_eq!(value(&rows, "Salvage Rights").as_deref(), Some("40% (Exchange)"));
        assert_eq!(value(&rows, "Required Lances").as_deref(), Some("3 Lance(s)"));
        assert_eq!(rows[0].label, "Name");
    }

    #[test]
    fn test_start_date_is_zero_padded() {
        let mut k = contract();
        k.start_date = date!(0801 - 03 - 07);
        assert_eq!(format_start_date(&k), "0801/03/07");
        assert_eq!(format_start_date(&contract()), "3030/02/15");
    }

    #[test]
    fn test_rows_without_atb_or_route() {
        let c = campaign("MERC");
        let mut k = contract();
        k.atb = None;
        k.system_id = "Unknown".to_string();
        let mut market = ContractMarket::new();
        let summary = ContractSummary::new(&mut k, &c, &mut market, false);
        let rows = summary.rows();
        assert!(value(&rows, "Enemy").is_none());
        assert!(value(&rows, "Distance").is_none());
        assert!(value(&rows, "Required Lances").is_none());
    }

    #[test]
    fn test_distance_zero_when_on_planet_at_target() {
        let c = campaign("MERC");
        let mut k = contract();
        k.system_id = "Galax".to_string();
        let mut market = ContractMarket::new();
        let summary = ContractSummary::new(&mut k, &c, &mut market, false);
        assert_eq!(summary.distance(), Some((0, 0)));
    }

    #[test]
    fn test_command_rerolls_require_mercenary_or_pirate() {
        let house = campaign("FS");
        let mut k = contract();
        let mut market = ContractMarket::new();
        let mut summary = ContractSummary::new(&mut k, &house, &mut market, true);
        assert!(!summary.has_rerolls(Clause::Command));
        assert!(summary.has_rerolls(Clause::Support));
        assert!(!summary.has_rerolls(Clause::Transport));

        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            summary.reroll(Clause::Command, &mut rng),
            Err(CampaignError::RerollsNotAllowed(Clause::Command))
        ));
        assert!(matches!(
            summary.reroll(Clause::Transport, &mut rng),
            Err(CampaignError::NoRerollsRemaining(Clause::Transport))
        ));
    }

    #[test]
    fn test_reroll_spends_allowance() {
        let c = campaign("PIR");
        let mut k = contract();
        let mut market = ContractMarket::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut summary = ContractSummary::new(&mut k, &c, &mut market, true);

        assert_eq!(summary.reroll_label(Clause::Command), "Renegotiate (2)");
        let first = summary.reroll(Clause::Command, &mut rng).unwrap();
        assert_eq!(first.remaining, 1);
        assert!(first.enabled);
        let second = summary.reroll(Clause::Command, &mut rng).unwrap();
        assert_eq!(second.remaining, 0);
        assert!(!second.enabled);
        assert!(!summary.has_rerolls(Clause::Command));
        assert!(summary.reroll(Clause::Command, &mut rng).is_err());
        assert_eq!(summary.reroll_label(Clause::Command), "Renegotiate (0)");

        drop(summary);
        assert_eq!(market.rerolls_used(&k, Clause::Command), 2);
    }

    #[test]
    fn test_reroll_requires_atb_contract() {
        let c = campaign("MERC");
        let mut k = contract();
        k.atb = None;
        let mut market = ContractMarket::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut summary = ContractSummary::new(&mut k, &c, &mut market, true);
        assert!(summary.has_rerolls(Clause::Support));
        assert!(summary.reroll(Clause::Support, &mut rng).is_err());
    }

    #[test]
    fn test_rename() {
        let c = campaign("MERC");
        let mut k = contract();
        let mut market = ContractMarket::new();
        let mut summary = ContractSummary::new(&mut k, &c, &mut market, false);
        summary.rename("Operation Tikonov");
        assert_eq!(summary.contract_name(), "Operation Tikonov");
        assert_eq!(summary.rows()[0].value, "Operation Tikonov");
    }
}
