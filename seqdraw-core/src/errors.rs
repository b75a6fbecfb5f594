use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureSetError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Error parsing feature record: {0}")]
    RecordParse(String),

    #[error("Invalid interval {chrom}:{start}-{end}: start must be less than end")]
    InvalidInterval { chrom: String, start: u32, end: u32 },

    #[error("Corrupted file. 0 records found in the file: {0}")]
    EmptyFeatureSet(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
