use seqdraw_core::models::Strand;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureStoreError {
    #[error("Record {chrom}:{start}-{end} references unknown feature '{feature}'")]
    UnknownFeature {
        feature: String,
        chrom: String,
        start: u32,
        end: u32,
    },

    #[error("Strand must be one of '+' or '-'. Input was '{0}'")]
    InvalidStrand(Strand),
}
