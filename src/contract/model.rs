//! Contract read model and negotiated clause terms

use serde::{Deserialize, Serialize};
use std::fmt;
use time::Date;

/// Negotiable contract clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Clause {
    Command,
    Salvage,
    Support,
    Transport,
}

impl Clause {
    pub fn name(self) -> &'static str {
        match self {
            Clause::Command => "command",
            Clause::Salvage => "salvage",
            Clause::Support => "support",
            Clause::Transport => "transport",
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CommandRights {
    #[default]
    Integrated,
    House,
    Liaison,
    Independent,
}

impl CommandRights {
    pub fn name(self) -> &'static str {
        match self {
            CommandRights::Integrated => "Integrated",
            CommandRights::House => "House",
            CommandRights::Liaison => "Liaison",
            CommandRights::Independent => "Independent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverheadComp {
    #[default]
    None,
    Half,
    Full,
}

impl OverheadComp {
    pub fn name(self) -> &'static str {
        match self {
            OverheadComp::None => "None",
            OverheadComp::Half => "Half",
            OverheadComp::Full => "Full",
        }
    }
}

/// Experience ratings, indexed 0..=3
pub const SKILL_RATING_NAMES: [&str; 4] = ["Green", "Regular", "Veteran", "Elite"];

/// Equipment quality ratings, indexed 0..=4
pub const QUALITY_RATING_NAMES: [&str; 5] = ["F", "D", "C", "B", "A"];

/// Render a skill/quality pair such as "Regular/C"
pub fn rating_text(skill: usize, quality: usize) -> String {
    format!(
        "{}/{}",
        SKILL_RATING_NAMES.get(skill).copied().unwrap_or("?"),
        QUALITY_RATING_NAMES.get(quality).copied().unwrap_or("?")
    )
}

/// Against-the-Bot details carried by generated contracts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtbDetails {
    pub enemy_name: String,
    pub ally_skill: usize,
    pub ally_quality: usize,
    pub enemy_skill: usize,
    pub enemy_quality: usize,
    pub required_lances: u32,
}

/// A mercenary contract as offered on the market
#[derive(Debug, Clone, PartialEq)]
pub struct Contract {
    pub id: u32,
    pub name: String,
    pub employer: String,
    pub mission_type: String,
    pub system_id: String,
    pub system_name: String,
    pub start_date: Date,
    /// Length in months
    pub length: u32,
    pub overhead_comp: OverheadComp,
    pub command_rights: CommandRights,
    /// Percentages 0..=100
    pub transport_comp: i32,
    pub salvage_pct: i32,
    pub salvage_exchange: bool,
    pub straight_support: i32,
    pub battle_loss_comp: i32,
    pub atb: Option<AtbDetails>,
}

impl Contract {
    pub fn new(id: u32, name: impl Into<String>, system_id: impl Into<String>, start_date: Date) -> Self {
        let system_id = system_id.into();
        Self {
            id,
            name: name.into(),
            employer: String::new(),
            mission_type: String::new(),
            system_name: system_id.clone(),
            system_id,
            start_date,
            length: 0,
            overhead_comp: OverheadComp::default(),
            command_rights: CommandRights::default(),
            transport_comp: 0,
            salvage_pct: 0,
            salvage_exchange: false,
            straight_support: 0,
            battle_loss_comp: 0,
            atb: None,
        }
    }

    pub fn is_atb(&self) -> bool {
        self.atb.is_some()
    }
}
