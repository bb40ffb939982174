//! Academy record and its enrollment rules

use crate::campaign::CampaignContext;
use crate::error::{CampaignError, Result};
use crate::personnel::Person;
use crate::skills::{parse_skill, split_curriculum, SkillType};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Year used for "never" in construction/destruction and age bounds
pub const FAR_FUTURE: i32 = 9999;

fn far_future() -> i32 {
    FAR_FUTURE
}

/// An educational institution personnel can be sent to.
///
/// Read-only after loading. The three course lists (`qualifications`,
/// `curriculums`, `qualification_start_years`) are parallel: entry `i` of each
/// describes course `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Academy {
    name: String,
    #[serde(default)]
    is_military: bool,
    #[serde(default)]
    description: String,
    #[serde(default)]
    academy_faction: Option<String>,
    #[serde(default)]
    faction_discount: i32,
    #[serde(default)]
    is_faction_restricted: bool,
    #[serde(default)]
    is_local: bool,
    #[serde(default, alias = "locationSystem")]
    location_systems: Vec<String>,
    construction_year: i32,
    #[serde(default = "far_future")]
    destruction_year: i32,
    tuition: i32,
    duration_days: i32,
    faculty_skill: i32,
    education_level_min: i32,
    education_level_max: i32,
    #[serde(default)]
    age_min: i32,
    #[serde(default = "far_future")]
    age_max: i32,
    #[serde(default, alias = "qualification")]
    qualifications: Vec<String>,
    #[serde(default, alias = "curriculum")]
    curriculums: Vec<String>,
    #[serde(default, alias = "qualificationStartYear")]
    qualification_start_years: Vec<i32>,
    base_skill_level: i32,
    /// Name of the academy set this record was loaded from
    #[serde(default, skip_serializing)]
    set: String,
}

impl Academy {
    /// Parse a single academy document
    pub fn from_json(json: &str) -> Result<Self> {
        let academy: Academy = serde_json::from_str(json)?;
        academy.validate()?;
        Ok(academy)
    }

    /// Check the course lists line up, the discount is a percentage and the
    /// education span is not inverted
    pub fn validate(&self) -> Result<()> {
        let courses = self.qualifications.len();
        if self.curriculums.len() != courses || self.qualification_start_years.len() != courses {
            return Err(self.invalid(format!(
                "course lists differ in length (qualifications {}, curriculums {}, start years {})",
                courses,
                self.curriculums.len(),
                self.qualification_start_years.len()
            )));
        }
        if !(0..=100).contains(&self.faction_discount) {
            return Err(self.invalid(format!(
                "faction discount {} outside 0-100",
                self.faction_discount
            )));
        }
        if self.education_level_max < self.education_level_min {
            return Err(self.invalid(format!(
                "education level max {} below min {}",
                self.education_level_max, self.education_level_min
            )));
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> CampaignError {
        CampaignError::InvalidAcademy {
            academy: self.name.clone(),
            reason,
        }
    }

    pub(crate) fn assign_set(&mut self, set: &str) {
        self.set = set.to_string();
    }

    pub fn set(&self) -> &str {
        &self.set
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_military(&self) -> bool {
        self.is_military
    }

    pub fn is_local(&self) -> bool {
        self.is_local
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location_systems(&self) -> &[String] {
        &self.location_systems
    }

    pub fn construction_year(&self) -> i32 {
        self.construction_year
    }

    pub fn destruction_year(&self) -> i32 {
        self.destruction_year
    }

    pub fn age_min(&self) -> i32 {
        self.age_min
    }

    pub fn age_max(&self) -> i32 {
        self.age_max
    }

    pub fn tuition(&self) -> i32 {
        self.tuition
    }

    pub fn duration_days(&self) -> i32 {
        self.duration_days
    }

    pub fn faction_discount_raw(&self) -> i32 {
        self.faction_discount
    }

    pub fn is_faction_restricted(&self) -> bool {
        self.is_faction_restricted
    }

    pub fn faculty_skill(&self) -> i32 {
        self.faculty_skill
    }

    pub fn education_level_min(&self) -> i32 {
        self.education_level_min
    }

    pub fn education_level_max(&self) -> i32 {
        self.education_level_max
    }

    pub fn qualifications(&self) -> &[String] {
        &self.qualifications
    }

    pub fn curriculums(&self) -> &[String] {
        &self.curriculums
    }

    pub fn qualification_start_years(&self) -> &[i32] {
        &self.qualification_start_years
    }

    pub fn base_skill_level(&self) -> i32 {
        self.base_skill_level
    }

    /// Tuition scaled by how many education tiers above `tier_min` are taught
    #[inline]
    pub fn tuition_adjusted(&self, tier_min: i32, education_level: i32) -> i64 {
        let tiers = (i64::from(education_level) - i64::from(tier_min)) / 2;
        i64::from(self.tuition) * tiers
    }

    /// Factions the academy belongs to: the local owners for local academies
    pub fn academy_factions<C: CampaignContext + ?Sized>(&self, campaign: &C) -> Vec<String> {
        if self.is_local {
            return campaign.current_system_factions();
        }
        self.academy_faction.iter().cloned().collect()
    }

    fn is_member(&self, factions: &[String], person: &Person) -> bool {
        factions.iter().any(|f| *f == person.origin_faction)
    }

    /// Tuition multiplier for a person, 1.0 unless they share the academy's faction.
    ///
    /// The discount percentage is divided by 100 in integer arithmetic, so only
    /// a discount of exactly 100 yields a non-zero multiplier for members.
    pub fn faction_discount_adjusted<C: CampaignContext + ?Sized>(
        &self,
        campaign: &C,
        person: &Person,
    ) -> f64 {
        if self.is_member(&self.academy_factions(campaign), person) {
            (self.faction_discount / 100) as f64
        } else {
            1.0
        }
    }

    /// Whether the academy will take the person as a student
    ///
    /// An unrestricted academy with no faction of its own is at war with
    /// nobody and admits everyone.
    pub fn accepting_applicants<C: CampaignContext + ?Sized>(
        &self,
        campaign: &C,
        person: &Person,
    ) -> bool {
        let factions = self.academy_factions(campaign);

        if self.is_faction_restricted {
            return self.is_member(&factions, person);
        }
        if !self.is_local && self.academy_faction.is_none() {
            return true;
        }

        factions
            .iter()
            .any(|faction| !campaign.is_at_war(&person.origin_faction, faction))
    }

    /// Standing in `year`: built and not yet destroyed
    #[inline]
    pub fn is_operational(&self, year: i32) -> bool {
        year >= self.construction_year && year < self.destruction_year
    }

    #[inline]
    pub fn is_age_eligible(&self, age: i32) -> bool {
        age >= self.age_min && age <= self.age_max
    }

    /// Indices of courses offered in `year`
    pub fn available_courses(&self, year: i32) -> Vec<usize> {
        self.qualification_start_years
            .iter()
            .enumerate()
            .filter(|(_, start)| **start <= year)
            .map(|(index, _)| index)
            .collect()
    }

    /// Curriculum entry of one course
    pub fn curriculum(&self, course_index: usize) -> Result<&str> {
        self.curriculums
            .get(course_index)
            .map(String::as_str)
            .ok_or_else(|| CampaignError::CourseNotFound {
                academy: self.name.clone(),
                index: course_index,
            })
    }

    /// Skills taught by one course
    pub fn course_skills(&self, course_index: usize) -> Result<SmallVec<[SkillType; 8]>> {
        split_curriculum(self.curriculum(course_index)?)
            .into_iter()
            .map(parse_skill)
            .collect()
    }

    /// Education tiers above the minimum the person would study at,
    /// `None` when they do not meet the minimum
    pub fn education_level_for(&self, person: &Person) -> Option<i32> {
        if person.highest_education < self.education_level_min {
            None
        } else if person.highest_education >= self.education_level_max {
            Some(self.education_level_max - self.education_level_min)
        } else {
            Some(person.highest_education - self.education_level_min)
        }
    }
}
