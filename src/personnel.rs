//! Personnel read model

use crate::skills::SkillType;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Roles relevant to the rules in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonnelRole {
    MechWarrior,
    AdminCommand,
    AdminLogistics,
    AdminTransport,
    AdminHr,
    Doctor,
    Tech,
    Other,
}

/// A person as seen by the education and contract rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: u32,
    pub name: String,
    /// Short name of the faction the person originates from
    pub origin_faction: String,
    #[serde(default)]
    pub highest_education: i32,
    #[serde(default)]
    pub age: i32,
    #[serde(default = "default_role")]
    pub primary_role: PersonnelRole,
    #[serde(default)]
    pub skills: AHashMap<SkillType, i32>,
}

fn default_role() -> PersonnelRole {
    PersonnelRole::Other
}

impl Person {
    pub fn new(id: u32, name: impl Into<String>, origin_faction: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            origin_faction: origin_faction.into(),
            highest_education: 0,
            age: 0,
            primary_role: PersonnelRole::Other,
            skills: AHashMap::new(),
        }
    }

    pub fn with_skill(mut self, skill: SkillType, level: i32) -> Self {
        self.skills.insert(skill, level);
        self
    }

    pub fn with_role(mut self, role: PersonnelRole) -> Self {
        self.primary_role = role;
        self
    }

    pub fn with_education(mut self, highest_education: i32) -> Self {
        self.highest_education = highest_education;
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    #[inline]
    pub fn has_skill(&self, skill: SkillType) -> bool {
        self.skills.contains_key(&skill)
    }

    /// Skill level, 0 when the person lacks the skill
    #[inline]
    pub fn skill_level(&self, skill: SkillType) -> i32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    pub fn skill(&self, skill: SkillType) -> Option<i32> {
        self.skills.get(&skill).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_skill_level_is_zero() {
        let person = Person::new(1, "Kai", "FS").with_skill(SkillType::PilotMech, 4);
        assert!(person.has_skill(SkillType::PilotMech));
        assert_eq!(person.skill_level(SkillType::PilotMech), 4);
        assert!(!person.has_skill(SkillType::Tactics));
        assert_eq!(person.skill_level(SkillType::Tactics), 0);
    }

    #[test]
    fn test_skills_keyed_by_code() {
        let person = Person::new(1, "Kai", "FS").with_skill(SkillType::PilotMech, 4);
        let value = serde_json::to_value(&person).unwrap();
        assert_eq!(value["skills"]["Piloting/Mech"], 4);

        let json = r#"{"id": 2, "name": "Ana", "originFaction": "LA",
            "skills": {"Hyperspace Navigation": 3, "Tech/BA": 1}}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.skill_level(SkillType::Navigation), 3);
        assert_eq!(person.skill_level(SkillType::TechBattleArmor), 1);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"id": 7, "name": "Ana", "originFaction": "LA"}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.primary_role, PersonnelRole::Other);
        assert_eq!(person.highest_education, 0);
        assert!(person.skills.is_empty());
    }
}
