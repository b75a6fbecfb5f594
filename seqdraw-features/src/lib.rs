//! Queryable index over annotated genomic feature intervals.
//!
//! [`FeatureStore`] owns a set of feature records and answers the two
//! queries the sampler needs: does any single feature cover more than a
//! threshold fraction of a window ([`FeatureStore::is_positive`]), and
//! what is the per-position, per-feature label matrix for a window
//! ([`FeatureStore::label_matrix`]). Both are backed by a per-chromosome
//! [`Bits`] index so query cost is bounded by binary search, not by the
//! total record count.

pub mod bits;
pub mod errors;
pub mod store;

pub use bits::Bits;
pub use errors::FeatureStoreError;
pub use store::{FeatureIndex, FeatureStore};
