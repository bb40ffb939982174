//! Course tooltip: what a person would gain from one academy course

use std::fmt::Write;

use super::Academy;
use crate::campaign::CampaignContext;
use crate::error::Result;
use crate::personnel::Person;
use crate::skills::{parse_skill, split_curriculum, SkillType};

/// Travel time assumed for an academy in the current system, in days
const LOCAL_TRAVEL_DAYS: i32 = 2;

/// Expected improvement for one curriculum skill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillGain {
    NothingToLearn,
    Gain(i32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurriculumLine {
    /// Label as written in the curriculum
    pub label: String,
    pub skill: SkillType,
    pub gain: SkillGain,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetails {
    pub curriculum: Vec<CurriculumLine>,
    /// Tuition after the faction discount, in C-bills
    pub tuition: f64,
    pub duration_weeks: i32,
    pub distance_weeks: i32,
    /// Furthest campus, or the current system
    pub destination: String,
    pub faculty_skill: i32,
    pub education_level: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipBody {
    Ineligible { education_level_min: i32 },
    Eligible(CourseDetails),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseTooltip {
    pub description: String,
    pub body: TooltipBody,
}

impl CourseTooltip {
    pub fn is_ineligible(&self) -> bool {
        matches!(self.body, TooltipBody::Ineligible { .. })
    }

    pub fn details(&self) -> Option<&CourseDetails> {
        match &self.body {
            TooltipBody::Eligible(details) => Some(details),
            TooltipBody::Ineligible { .. } => None,
        }
    }

    /// Render as HTML for a hover tooltip
    pub fn render_html(&self) -> String {
        let mut out = String::with_capacity(256);
        let _ = write!(out, "<html><i>{}</i><br><br>", self.description);

        let details = match &self.body {
            TooltipBody::Ineligible {
                education_level_min,
            } => {
                let _ = write!(
                    out,
                    "<b>Ineligible: requires education level {}</b></html>",
                    education_level_min
                );
                return out;
            }
            TooltipBody::Eligible(details) => details,
        };

        out.push_str("<b>Curriculum</b><br>");
        for line in &details.curriculum {
            match line.gain {
                SkillGain::NothingToLearn => {
                    let _ = write!(out, "{} (Nothing to learn)<br>", line.label);
                }
                SkillGain::Gain(gain) => {
                    let _ = write!(out, "{} (+{})<br>", line.label, gain);
                }
            }
        }

        let _ = write!(
            out,
            "<br><b>Tuition:</b> {} CSB<br>\
             <b>Duration:</b> {} weeks<br>\
             <b>Distance:</b> {} weeks ({})<br>\
             <b>Faculty Skill:</b> {}+<br>\
             <b>Education Level:</b> {}+<br></html>",
            details.tuition,
            details.duration_weeks,
            details.distance_weeks,
            details.destination,
            details.faculty_skill,
            details.education_level,
        );
        out
    }
}

impl Academy {
    /// Build the tooltip for `person` considering course `course_index`
    pub fn tooltip<C: CampaignContext + ?Sized>(
        &self,
        campaign: &C,
        person: &Person,
        course_index: usize,
    ) -> Result<CourseTooltip> {
        let description = self.description().to_string();

        let Some(education_level) = self.education_level_for(person) else {
            return Ok(CourseTooltip {
                description,
                body: TooltipBody::Ineligible {
                    education_level_min: self.education_level_min(),
                },
            });
        };

        let target_level = self.base_skill_level() + education_level;

        let mut curriculum = Vec::new();
        for label in split_curriculum(self.curriculum(course_index)?) {
            let skill = parse_skill(label)?;
            let current = person.skill_level(skill);
            let gain = if person.has_skill(skill) && current >= target_level {
                SkillGain::NothingToLearn
            } else {
                SkillGain::Gain(target_level - current)
            };
            curriculum.push(CurriculumLine {
                label: label.to_string(),
                skill,
                gain,
            });
        }

        let (distance, destination) = self.furthest_campus(campaign);

        Ok(CourseTooltip {
            description,
            body: TooltipBody::Eligible(CourseDetails {
                curriculum,
                tuition: self.tuition() as f64 * self.faction_discount_adjusted(campaign, person),
                duration_weeks: self.duration_days() / 7,
                distance_weeks: distance / 7,
                destination,
                faculty_skill: self.faculty_skill(),
                education_level,
            }),
        })
    }

    /// Travel days to the furthest campus and its name
    fn furthest_campus<C: CampaignContext + ?Sized>(&self, campaign: &C) -> (i32, String) {
        let mut distance = LOCAL_TRAVEL_DAYS;
        let mut destination = campaign.current_system_name().to_string();

        if !self.is_local() {
            for system in self.location_systems() {
                let days = campaign.simplified_travel_time(system);
                if days > distance {
                    distance = days;
                    destination = system.clone();
                }
            }
        }

        (distance, destination)
    }
}
