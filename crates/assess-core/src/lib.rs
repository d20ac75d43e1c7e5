//! # Assess-Core
//!
//! Core types for the assessment scoring engine: the fixed dimension sets of
//! each assessment category, the three-band classifier, the descriptive
//! lexicon attached to every (dimension, band) pair and the profile types
//! produced by scoring.

pub mod band;
pub mod dimension;
pub mod error;
pub mod lexicon;
pub mod profile;
pub mod sheet;
pub mod types;

pub use band::*;
pub use dimension::*;
pub use error::{Error, Result};
pub use lexicon::*;
pub use profile::*;
pub use sheet::*;
pub use types::*;
