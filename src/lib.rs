//! Campaign Core - rules for a tabletop-wargame campaign manager
//!
//! This crate provides the academy education rules, the skill label table,
//! and contract clause negotiation with its summary view.

pub mod campaign;
pub mod config;
pub mod contract;
pub mod education;
pub mod error;
pub mod personnel;
pub mod skills;

use crate::config::AcademyDirectory;
use crate::error::{CampaignError, Result};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::sync::Arc;

// ============================================================================
// Cached Academy Directory
// ============================================================================

/// Global academy directory
static ACADEMIES: OnceCell<Arc<RwLock<AcademyDirectory>>> = OnceCell::new();

/// Install the academy directory used by [`with_academies`]
///
/// Calling this again replaces the directory in place.
pub fn init_academies(directory: AcademyDirectory) {
    let cached = ACADEMIES.get_or_init(|| Arc::new(RwLock::new(AcademyDirectory::new())));
    *cached.write() = directory;
    tracing::debug!(
        target: "campaign_core::config",
        academies = cached.read().len(),
        "academy_directory.installed"
    );
}

/// Load academy data per `CAMPAIGN_ACADEMY_DATA` (or the builtin set) and install it
pub fn init_academies_from_env() -> Result<()> {
    let directory = AcademyDirectory::load_from_env()?;
    init_academies(directory);
    Ok(())
}

/// Check if the academy directory is initialized
pub fn is_academies_initialized() -> bool {
    ACADEMIES.get().is_some()
}

/// Run `f` against the installed academy directory
///
/// # Errors
/// `NotInitialized` if neither [`init_academies`] nor
/// [`init_academies_from_env`] was called first
pub fn with_academies<T>(f: impl FnOnce(&AcademyDirectory) -> T) -> Result<T> {
    let directory = ACADEMIES.get().ok_or(CampaignError::NotInitialized)?;
    let guard = directory.read();
    Ok(f(&guard))
}
