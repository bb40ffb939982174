//! Skill types and the label parser used by academy curriculums
//!
//! Curriculum entries name skills with human-readable labels such as
//! "Piloting/Mech" or "Small Arms". Parsing ignores case and whitespace.

use crate::error::{CampaignError, Result};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Skill types known to the campaign, serialized by skill code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum SkillType {
    PilotMech,
    GunMech,
    PilotAero,
    GunAero,
    PilotGroundVehicle,
    PilotVtol,
    PilotNaval,
    GunVehicle,
    PilotJet,
    GunJet,
    PilotSpace,
    GunSpace,
    Artillery,
    GunBattleArmor,
    GunProtoMech,
    SmallArms,
    AntiMech,
    TechMech,
    TechMechanic,
    TechAero,
    TechBattleArmor,
    TechVessel,
    Astech,
    Doctor,
    MedTech,
    Navigation,
    Administration,
    Tactics,
    Strategy,
    Negotiation,
    Leadership,
    Scrounge,
}

/// Normalized label -> skill, in table order
const SKILL_LABELS: [(&str, SkillType); 32] = [
    ("piloting/mech", SkillType::PilotMech),
    ("gunnery/mech", SkillType::GunMech),
    ("piloting/aerospace", SkillType::PilotAero),
    ("gunnery/aerospace", SkillType::GunAero),
    ("piloting/groundvehicle", SkillType::PilotGroundVehicle),
    ("piloting/vtol", SkillType::PilotVtol),
    ("piloting/naval", SkillType::PilotNaval),
    ("gunnery/vehicle", SkillType::GunVehicle),
    ("piloting/aircraft", SkillType::PilotJet),
    ("gunnery/aircraft", SkillType::GunJet),
    ("piloting/spacecraft", SkillType::PilotSpace),
    ("gunnery/spacecraft", SkillType::GunSpace),
    ("artillery", SkillType::Artillery),
    ("gunnery/battlesuit", SkillType::GunBattleArmor),
    ("gunnery/protomech", SkillType::GunProtoMech),
    ("smallarms", SkillType::SmallArms),
    ("anti-mech", SkillType::AntiMech),
    ("tech/mech", SkillType::TechMech),
    ("tech/mechanic", SkillType::TechMechanic),
    ("tech/aero", SkillType::TechAero),
    ("tech/ba", SkillType::TechBattleArmor),
    ("tech/vessel", SkillType::TechVessel),
    ("astech", SkillType::Astech),
    ("doctor", SkillType::Doctor),
    ("medtech", SkillType::MedTech),
    ("hyperspacenavigation", SkillType::Navigation),
    ("administration", SkillType::Administration),
    ("tactics", SkillType::Tactics),
    ("strategy", SkillType::Strategy),
    ("negotiation", SkillType::Negotiation),
    ("leadership", SkillType::Leadership),
    ("scrounge", SkillType::Scrounge),
];

static SKILL_TABLE: Lazy<AHashMap<&'static str, SkillType>> =
    Lazy::new(|| SKILL_LABELS.iter().copied().collect());

static CURRICULUM_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").unwrap());

impl SkillType {
    /// Every skill type, in label table order
    pub fn all() -> impl Iterator<Item = SkillType> {
        SKILL_LABELS.iter().map(|(_, skill)| *skill)
    }

    /// Internal skill code as stored on personnel records
    pub fn code(self) -> &'static str {
        match self {
            SkillType::PilotMech => "Piloting/Mech",
            SkillType::GunMech => "Gunnery/Mech",
            SkillType::PilotAero => "Piloting/Aerospace",
            SkillType::GunAero => "Gunnery/Aerospace",
            SkillType::PilotGroundVehicle => "Piloting/Ground Vehicle",
            SkillType::PilotVtol => "Piloting/VTOL",
            SkillType::PilotNaval => "Piloting/Naval",
            SkillType::GunVehicle => "Gunnery/Vehicle",
            SkillType::PilotJet => "Piloting/Aircraft",
            SkillType::GunJet => "Gunnery/Aircraft",
            SkillType::PilotSpace => "Piloting/Spacecraft",
            SkillType::GunSpace => "Gunnery/Spacecraft",
            SkillType::Artillery => "Artillery",
            SkillType::GunBattleArmor => "Gunnery/BattleArmor",
            SkillType::GunProtoMech => "Gunnery/ProtoMech",
            SkillType::SmallArms => "Small Arms",
            SkillType::AntiMech => "Anti-Mech",
            SkillType::TechMech => "Tech/Mech",
            SkillType::TechMechanic => "Tech/Mechanic",
            SkillType::TechAero => "Tech/Aero",
            SkillType::TechBattleArmor => "Tech/BA",
            SkillType::TechVessel => "Tech/Vessel",
            SkillType::Astech => "Astech",
            SkillType::Doctor => "Doctor",
            SkillType::MedTech => "MedTech",
            SkillType::Navigation => "Hyperspace Navigation",
            SkillType::Administration => "Administration",
            SkillType::Tactics => "Tactics",
            SkillType::Strategy => "Strategy",
            SkillType::Negotiation => "Negotiation",
            SkillType::Leadership => "Leadership",
            SkillType::Scrounge => "Scrounge",
        }
    }

    /// Skill type for an exact skill code
    pub fn from_code(code: &str) -> Option<SkillType> {
        SkillType::all().find(|skill| skill.code() == code)
    }
}

impl From<SkillType> for &'static str {
    fn from(skill: SkillType) -> Self {
        skill.code()
    }
}

impl TryFrom<String> for SkillType {
    type Error = CampaignError;

    fn try_from(code: String) -> Result<Self> {
        SkillType::from_code(&code).ok_or(CampaignError::UnknownSkill(code))
    }
}

impl fmt::Display for SkillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SkillType {
    type Err = CampaignError;

    fn from_str(s: &str) -> Result<Self> {
        parse_skill(s)
    }
}

/// Parse a curriculum skill label into its skill type
#[inline]
pub fn parse_skill(label: &str) -> Result<SkillType> {
    let normalized: String = label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    SKILL_TABLE
        .get(normalized.as_str())
        .copied()
        .ok_or_else(|| CampaignError::UnknownSkill(label.to_string()))
}

/// Split a comma-separated curriculum entry into its skill labels
pub fn split_curriculum(entry: &str) -> SmallVec<[&str; 8]> {
    CURRICULUM_SEPARATOR
        .split(entry.trim())
        .filter(|label| !label.is_empty())
        .collect()
}
