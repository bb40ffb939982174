//! Campaign context seen by the education and contract rules
//!
//! The rules never own the world model. They ask a [`CampaignContext`] for
//! the date, where the unit is, who owns the local system, who is at war with
//! whom, how far away a system is and who the best administrators are.
//! [`Campaign`] is a plain in-memory implementation backed by tables.

use crate::personnel::{Person, PersonnelRole};
use crate::skills::SkillType;
use ahash::AHashMap;
use time::Date;

/// Faction codes that negotiate command rights
pub const FACTION_MERCENARY: &str = "MERC";
pub const FACTION_PIRATE: &str = "PIR";

/// Result of plotting a jump route between two systems
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpPath {
    /// Total travel time in days, including recharge and transit
    pub days: f64,
    pub jumps: u32,
}

/// Collaborator interface for campaign state
pub trait CampaignContext {
    fn local_date(&self) -> Date;

    fn game_year(&self) -> i32 {
        self.local_date().year()
    }

    /// Faction code of the player's unit
    fn faction_code(&self) -> &str;

    fn current_system_id(&self) -> &str;

    fn current_system_name(&self) -> &str;

    /// Owners of the current system at the campaign date
    fn current_system_factions(&self) -> Vec<String>;

    fn is_on_planet(&self) -> bool;

    /// Whether two factions are at war at the campaign date
    fn is_at_war(&self, faction: &str, other: &str) -> bool;

    /// Travel time in days from the current system, ignoring recharge scheduling
    fn simplified_travel_time(&self, system_id: &str) -> i32;

    /// Jump route from the current system, `None` when the target is unknown
    fn jump_path(&self, system_id: &str) -> Option<JumpPath>;

    /// Best person in a role, ranked by the primary then the secondary skill
    fn find_best_in_role(
        &self,
        role: PersonnelRole,
        primary: SkillType,
        secondary: SkillType,
    ) -> Option<&Person>;
}

/// Ownership of a system from a given year onwards
#[derive(Debug, Clone)]
pub struct Ownership {
    pub since_year: i32,
    pub factions: Vec<String>,
}

/// A star system with its ownership history
#[derive(Debug, Clone)]
pub struct StarSystem {
    pub id: String,
    pub name: String,
    pub ownership: Vec<Ownership>,
}

impl StarSystem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ownership: Vec::new(),
        }
    }

    pub fn owned_by(mut self, since_year: i32, factions: &[&str]) -> Self {
        self.ownership.push(Ownership {
            since_year,
            factions: factions.iter().map(|f| f.to_string()).collect(),
        });
        self.ownership.sort_by_key(|o| o.since_year);
        self
    }

    /// Owners in effect for a year, the latest record not after it
    pub fn factions(&self, year: i32) -> Vec<String> {
        self.ownership
            .iter()
            .rev()
            .find(|o| o.since_year <= year)
            .map(|o| o.factions.clone())
            .unwrap_or_default()
    }
}

/// A war between two factions over a span of years
#[derive(Debug, Clone)]
pub struct War {
    pub belligerents: (String, String),
    pub start_year: i32,
    /// Last year of the war, inclusive; `None` while ongoing
    pub end_year: Option<i32>,
}

impl War {
    fn involves(&self, faction: &str, other: &str) -> bool {
        let (a, b) = (&self.belligerents.0, &self.belligerents.1);
        (a == faction && b == other) || (a == other && b == faction)
    }

    fn active_in(&self, year: i32) -> bool {
        year >= self.start_year && self.end_year.map_or(true, |end| year <= end)
    }
}

/// Table-backed campaign state
#[derive(Debug, Clone)]
pub struct Campaign {
    date: Date,
    faction_code: String,
    current_system: String,
    on_planet: bool,
    systems: AHashMap<String, StarSystem>,
    routes: AHashMap<String, JumpPath>,
    wars: Vec<War>,
    personnel: Vec<Person>,
}

impl Campaign {
    /// Create a campaign located at `current_system` (which is registered if unknown)
    pub fn new(date: Date, faction_code: impl Into<String>, current_system: StarSystem) -> Self {
        let current_id = current_system.id.clone();
        let mut systems = AHashMap::new();
        systems.insert(current_id.clone(), current_system);
        Self {
            date,
            faction_code: faction_code.into(),
            current_system: current_id,
            on_planet: true,
            systems,
            routes: AHashMap::new(),
            wars: Vec::new(),
            personnel: Vec::new(),
        }
    }

    pub fn set_date(&mut self, date: Date) {
        self.date = date;
    }

    pub fn set_on_planet(&mut self, on_planet: bool) {
        self.on_planet = on_planet;
    }

    pub fn add_system(&mut self, system: StarSystem) {
        self.systems.insert(system.id.clone(), system);
    }

    /// Register the jump route from the current system to `system_id`
    pub fn add_route(&mut self, system_id: impl Into<String>, days: f64, jumps: u32) {
        self.routes.insert(system_id.into(), JumpPath { days, jumps });
    }

    pub fn add_war(&mut self, faction: &str, other: &str, start_year: i32, end_year: Option<i32>) {
        self.wars.push(War {
            belligerents: (faction.to_string(), other.to_string()),
            start_year,
            end_year,
        });
    }

    pub fn add_person(&mut self, person: Person) {
        self.personnel.push(person);
    }

    pub fn personnel(&self) -> &[Person] {
        &self.personnel
    }

    pub fn system(&self, id: &str) -> Option<&StarSystem> {
        self.systems.get(id)
    }
}

impl CampaignContext for Campaign {
    fn local_date(&self) -> Date {
        self.date
    }

    fn faction_code(&self) -> &str {
        &self.faction_code
    }

    fn current_system_id(&self) -> &str {
        &self.current_system
    }

    fn current_system_name(&self) -> &str {
        self.systems
            .get(&self.current_system)
            .map(|s| s.name.as_str())
            .unwrap_or(self.current_system.as_str())
    }

    fn current_system_factions(&self) -> Vec<String> {
        self.systems
            .get(&self.current_system)
            .map(|s| s.factions(self.game_year()))
            .unwrap_or_default()
    }

    fn is_on_planet(&self) -> bool {
        self.on_planet
    }

    fn is_at_war(&self, faction: &str, other: &str) -> bool {
        let year = self.game_year();
        self.wars
            .iter()
            .any(|war| war.involves(faction, other) && war.active_in(year))
    }

    fn simplified_travel_time(&self, system_id: &str) -> i32 {
        if system_id == self.current_system {
            return 0;
        }
        match self.routes.get(system_id) {
            Some(path) => path.days.ceil() as i32,
            None => {
                tracing::debug!(
                    target: "campaign_core::campaign",
                    system = system_id,
                    "travel_time.unknown_route"
                );
                0
            }
        }
    }

    fn jump_path(&self, system_id: &str) -> Option<JumpPath> {
        if system_id == self.current_system {
            return Some(JumpPath { days: 0.0, jumps: 0 });
        }
        self.routes.get(system_id).copied()
    }

    fn find_best_in_role(
        &self,
        role: PersonnelRole,
        primary: SkillType,
        secondary: SkillType,
    ) -> Option<&Person> {
        let rank = |p: &Person| {
            (
                p.skill(primary).unwrap_or(-1),
                p.skill(secondary).unwrap_or(-1),
            )
        };

        let mut best: Option<&Person> = None;
        for person in self.personnel.iter().filter(|p| p.primary_role == role) {
            if best.map_or(true, |current| rank(person) > rank(current)) {
                best = Some(person);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn campaign() -> Campaign {
        let home = StarSystem::new("Galax", "Galax")
            .owned_by(2900, &["FS"])
            .owned_by(3050, &["LA", "FS"]);
        Campaign::new(date!(3051 - 03 - 01), "MERC", home)
    }

    #[test]
    fn test_ownership_uses_latest_record() {
        let c = campaign();
        assert_eq!(c.current_system_factions(), vec!["LA", "FS"]);
        let system = c.system("Galax").unwrap();
        assert_eq!(system.factions(3000), vec!["FS"]);
        assert!(system.factions(2000).is_empty());
    }

    #[test]
    fn test_war_is_symmetric_and_bounded() {
        let mut c = campaign();
        c.add_war("FS", "DC", 3028, Some(3030));
        c.add_war("LA", "FWL", 3050, None);

        assert!(!c.is_at_war("FS", "DC"));
        assert!(c.is_at_war("FWL", "LA"));
        assert!(c.is_at_war("LA", "FWL"));
        assert!(!c.is_at_war("LA", "DC"));
    }

    #[test]
    fn test_travel_time_rounds_up() {
        let mut c = campaign();
        c.add_route("Tharkad", 20.4, 3);
        assert_eq!(c.simplified_travel_time("Tharkad"), 21);
        assert_eq!(c.simplified_travel_time("Galax"), 0);
        assert_eq!(c.simplified_travel_time("Nowhere"), 0);
        assert_eq!(c.jump_path("Tharkad").unwrap().jumps, 3);
        assert!(c.jump_path("Nowhere").is_none());
    }

    #[test]
    fn test_find_best_in_role() {
        let mut c = campaign();
        c.add_person(
            Person::new(1, "A", "FS")
                .with_role(PersonnelRole::AdminCommand)
                .with_skill(SkillType::Negotiation, 2),
        );
        c.add_person(
            Person::new(2, "B", "FS")
                .with_role(PersonnelRole::AdminCommand)
                .with_skill(SkillType::Negotiation, 2)
                .with_skill(SkillType::Administration, 3),
        );
        c.add_person(
            Person::new(3, "C", "FS")
                .with_role(PersonnelRole::AdminLogistics)
                .with_skill(SkillType::Negotiation, 5),
        );

        let best = c
            .find_best_in_role(
                PersonnelRole::AdminCommand,
                SkillType::Negotiation,
                SkillType::Administration,
            )
            .unwrap();
        assert_eq!(best.id, 2);
        assert!(c
            .find_best_in_role(
                PersonnelRole::AdminTransport,
                SkillType::Negotiation,
                SkillType::Administration,
            )
            .is_none());
    }
}
