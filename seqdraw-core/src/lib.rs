//! Core data model for the seqdraw workspace.
//!
//! This crate holds the types shared by every other seqdraw crate: the
//! [`Strand`](models::Strand) of a genomic interval, the half-open
//! [`Interval`](models::Interval) used by the overlap index, and the
//! [`FeatureRecord`](models::FeatureRecord)/[`FeatureSet`](models::FeatureSet)
//! pair that represents annotated feature intervals loaded from a
//! BED-like table.

pub mod errors;
pub mod models;
pub mod utils;
