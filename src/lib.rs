//! Relationship-compatibility quiz scoring.
//!
//! [`core::calculate_compatibility_profile`] turns a map of question id to
//! option index into a [`core::profile::CompatibilityProfile`], and
//! [`core::preview::generate_profile_preview`] cuts that down to a teaser.

pub mod config;
pub mod core;
pub mod utils;

pub use crate::core::answers::AnswersMap;
pub use crate::core::preview::{PreviewProfile, generate_profile_preview};
pub use crate::core::profile::CompatibilityProfile;
pub use crate::core::{
    ScoringOptions, TipSelection, calculate_compatibility_profile,
    calculate_compatibility_profile_with,
};
