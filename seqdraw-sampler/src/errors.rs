use thiserror::Error;

use seqdraw_features::FeatureStoreError;
use seqdraw_genome::GenomeError;

use crate::config::SamplingMode;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("Invalid sampler configuration: {0}")]
    InvalidConfig(String),

    #[error("No records eligible for positive sampling in '{0}' mode")]
    EmptyActiveView(SamplingMode),

    #[error("Chromosome {chrom} (length {length}) is too short for radius {radius}")]
    ChromosomeTooShort {
        chrom: String,
        length: u32,
        radius: u32,
    },

    #[error(
        "Background sampling exhausted {0} retries; lower the overlap threshold or check the feature density"
    )]
    ExhaustedRetries(usize),

    #[error(transparent)]
    Genome(#[from] GenomeError),

    #[error(transparent)]
    FeatureStore(#[from] FeatureStoreError),
}
