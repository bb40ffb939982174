//! Configuration module for academy data
//!
//! Academy sets are JSON documents, each holding a named list of academies.
//! A directory of sets is loaded from a file, from the path named by
//! `CAMPAIGN_ACADEMY_DATA`, or from the dataset built into the crate.

use crate::education::Academy;
use crate::error::{CampaignError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an academy data file to load instead of the builtin set
pub const ACADEMY_DATA_ENV: &str = "CAMPAIGN_ACADEMY_DATA";

pub const BUILTIN_ACADEMY_DATA: &str = include_str!("../data/academies.json");

/// A named collection of academies
#[derive(Debug, Clone, Deserialize)]
pub struct AcademySet {
    pub name: String,
    #[serde(default)]
    pub academies: Vec<Academy>,
}

impl AcademySet {
    /// Parse one set, stamping the set name on each academy and validating it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut set: AcademySet = serde_json::from_str(json)?;
        set.prepare()?;
        Ok(set)
    }

    fn prepare(&mut self) -> Result<()> {
        for academy in &mut self.academies {
            academy.assign_set(&self.name);
            if let Err(err) = academy.validate() {
                tracing::warn!(
                    target: "campaign_core::config",
                    set = %self.name,
                    academy = academy.name(),
                    error = %err,
                    "academy.rejected"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Document shape: either one set or a list of sets
#[derive(Deserialize)]
#[serde(untagged)]
enum AcademyDocument {
    Many(Vec<AcademySet>),
    One(AcademySet),
}

/// All loaded academy sets, keyed by set name
#[derive(Debug, Clone, Default)]
pub struct AcademyDirectory {
    sets: BTreeMap<String, Vec<Academy>>,
}

impl AcademyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document holding one set or a list of sets
    pub fn from_json_str(json: &str) -> Result<Self> {
        let sets = match serde_json::from_str(json)? {
            AcademyDocument::Many(sets) => sets,
            AcademyDocument::One(set) => vec![set],
        };

        let mut directory = Self::new();
        for mut set in sets {
            set.prepare()?;
            directory.insert_set(set);
        }
        Ok(directory)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CampaignError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_ACADEMY_DATA)
    }

    /// Load from the file named by `CAMPAIGN_ACADEMY_DATA`, falling back to the builtin data
    pub fn load_from_env() -> Result<Self> {
        if let Some(path) = env::var_os(ACADEMY_DATA_ENV).map(PathBuf::from) {
            match Self::from_file(&path) {
                Ok(directory) => {
                    tracing::info!(
                        target: "campaign_core::config",
                        path = %path.display(),
                        sets = directory.sets.len(),
                        "academy_data.loaded=file"
                    );
                    return Ok(directory);
                }
                Err(err) => {
                    tracing::warn!(
                        target: "campaign_core::config",
                        path = %path.display(),
                        error = %err,
                        "academy_data.load_failed"
                    );
                }
            }
        }

        let directory = Self::builtin()?;
        tracing::info!(
            target: "campaign_core::config",
            sets = directory.sets.len(),
            "academy_data.loaded=builtin"
        );
        Ok(directory)
    }

    /// Add a set, replacing any set of the same name
    pub fn insert_set(&mut self, set: AcademySet) {
        if self.sets.contains_key(&set.name) {
            tracing::debug!(
                target: "campaign_core::config",
                set = %set.name,
                "academy_set.replaced"
            );
        }
        self.sets.insert(set.name, set.academies);
    }

    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn academies_in(&self, set: &str) -> Result<&[Academy]> {
        self.sets
            .get(set)
            .map(Vec::as_slice)
            .ok_or_else(|| CampaignError::AcademySetNotFound(set.to_string()))
    }

    pub fn academy(&self, set: &str, name: &str) -> Result<&Academy> {
        self.academies_in(set)?
            .iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| CampaignError::AcademyNotFound {
                set: set.to_string(),
                name: name.to_string(),
            })
    }

    /// Academies standing in `year`, across all sets
    pub fn open_academies(&self, year: i32) -> impl Iterator<Item = &Academy> {
        self.sets
            .values()
            .flatten()
            .filter(move |a| a.is_operational(year))
    }

    pub fn len(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
