//! Drawing labeled training examples from a reference genome.
//!
//! The [`Sampler`] orchestrates everything the other seqdraw crates
//! provide: it picks a genomic locus (positive examples come from
//! annotated feature records, background examples from
//! rejection-sampled random loci), computes the sequence and label
//! windows around it, and materializes a one-hot sequence encoding
//! paired with a per-position label matrix.
//!
//! Sampling is reproducible: a [`Sampler`] owns a single seedable RNG
//! and every operation draws from it in a fixed, documented order, so
//! two samplers built with the same seed and configuration produce
//! identical example streams.

pub mod batch;
pub mod config;
pub mod errors;
pub mod sampler;

pub use batch::Batch;
pub use config::{SamplerConfig, SamplingMode};
pub use errors::SamplerError;
pub use sampler::{MAX_RETRIES, Sample, Sampler};
