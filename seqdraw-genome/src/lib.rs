//! Strand-aware access to reference sequences, plus one-hot encoding.
//!
//! The [`SequenceProvider`] trait is the boundary the sampler sees:
//! random-access retrieval of a subsequence of a named chromosome, with
//! reverse-strand requests answered as the reverse complement of the
//! forward subsequence. [`Genome`] is the in-memory implementation,
//! loadable from a plain or gzipped FASTA file. [`Alphabet`] turns a
//! retrieved sequence into the fixed-width numeric encoding a sequence
//! model consumes.

pub mod alphabet;
pub mod errors;
pub mod fasta;
pub mod genome;

pub use alphabet::Alphabet;
pub use errors::GenomeError;
pub use genome::{Genome, SequenceProvider, reverse_complement};
