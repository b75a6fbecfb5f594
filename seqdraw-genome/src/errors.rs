use seqdraw_core::models::Strand;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenomeError {
    #[error("Strand must be one of '+' or '-'. Input was '{0}'")]
    InvalidStrand(Strand),

    #[error("Unknown chromosome: {0}")]
    UnknownChromosome(String),

    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Invalid FASTA: {0}")]
    InvalidFasta(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
