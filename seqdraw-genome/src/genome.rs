use std::collections::HashMap;
use std::path::Path;

use seqdraw_core::models::Strand;

use crate::errors::GenomeError;
use crate::fasta::load_fasta;

/// Random-access retrieval of reference sequence, strand-aware.
///
/// This is the boundary between the sampler and whatever holds the
/// genome: an in-memory map ([`Genome`]), or any other backend a caller
/// wants to plug in. Lookups are expected to be fast random access;
/// nothing in the sampling hot path tolerates long-latency I/O.
pub trait SequenceProvider {
    /// The names of every chromosome in this genome, sorted.
    fn chromosome_names(&self) -> &[String];

    /// Length of the named chromosome in bases.
    fn chromosome_length(&self, chrom: &str) -> Result<u32, GenomeError>;

    /// The subsequence over `[start, end)` of the named chromosome.
    ///
    /// Returns an empty string when `start` is at or past the end of
    /// the chromosome; `end` is clamped to the chromosome length. For
    /// [`Strand::Reverse`] the result is the reverse complement of the
    /// forward-strand subsequence. [`Strand::Unknown`] is rejected with
    /// [`GenomeError::InvalidStrand`].
    fn get_sequence(
        &self,
        chrom: &str,
        start: u32,
        end: u32,
        strand: Strand,
    ) -> Result<String, GenomeError>;
}

/// Base-pair complement: A↔T, G↔C, case preserved. Any other symbol
/// (N, IUPAC ambiguity codes, gaps) maps to itself.
#[inline]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'a' => b't',
        b't' => b'a',
        b'g' => b'c',
        b'c' => b'g',
        other => other,
    }
}

/// The reverse complement of a sequence.
pub fn reverse_complement(sequence: &str) -> String {
    sequence
        .bytes()
        .rev()
        .map(|b| complement(b) as char)
        .collect()
}

/// An in-memory genome: one sequence per chromosome, loaded once.
///
/// # Examples
///
/// ```
/// use seqdraw_genome::{Genome, SequenceProvider};
/// use seqdraw_core::models::Strand;
/// use std::collections::HashMap;
///
/// let genome = Genome::new(HashMap::from([
///     ("chr1".to_string(), "ACGTACGT".to_string()),
/// ]));
///
/// let forward = genome.get_sequence("chr1", 0, 4, Strand::Forward).unwrap();
/// assert_eq!(forward, "ACGT");
///
/// let reverse = genome.get_sequence("chr1", 0, 4, Strand::Reverse).unwrap();
/// assert_eq!(reverse, "ACGT"); // ACGT is its own reverse complement
/// ```
pub struct Genome {
    names: Vec<String>,
    sequences: HashMap<String, String>,
}

impl Genome {
    pub fn new(sequences: HashMap<String, String>) -> Self {
        let mut names: Vec<String> = sequences.keys().cloned().collect();
        names.sort();
        Genome { names, sequences }
    }

    /// Load a genome from a FASTA file (plain or gzipped).
    pub fn from_fasta<P: AsRef<Path>>(file_path: P) -> Result<Self, GenomeError> {
        Ok(Genome::new(load_fasta(file_path)?))
    }

    /// The full sequence of one chromosome on the given strand.
    pub fn chromosome_sequence(&self, chrom: &str, strand: Strand) -> Result<String, GenomeError> {
        let length = self.chromosome_length(chrom)?;
        self.get_sequence(chrom, 0, length, strand)
    }
}

impl SequenceProvider for Genome {
    fn chromosome_names(&self) -> &[String] {
        &self.names
    }

    fn chromosome_length(&self, chrom: &str) -> Result<u32, GenomeError> {
        self.sequences
            .get(chrom)
            .map(|seq| seq.len() as u32)
            .ok_or_else(|| GenomeError::UnknownChromosome(chrom.to_string()))
    }

    fn get_sequence(
        &self,
        chrom: &str,
        start: u32,
        end: u32,
        strand: Strand,
    ) -> Result<String, GenomeError> {
        if !strand.is_known() {
            return Err(GenomeError::InvalidStrand(strand));
        }

        let sequence = self
            .sequences
            .get(chrom)
            .ok_or_else(|| GenomeError::UnknownChromosome(chrom.to_string()))?;
        let length = sequence.len() as u32;

        if start >= length {
            return Ok(String::new());
        }
        let end = end.min(length);
        if end <= start {
            return Ok(String::new());
        }

        let forward = &sequence[start as usize..end as usize];
        match strand {
            Strand::Forward => Ok(forward.to_string()),
            Strand::Reverse => Ok(reverse_complement(forward)),
            Strand::Unknown => unreachable!("rejected above"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn genome() -> Genome {
        Genome::new(HashMap::from([
            ("chr1".to_string(), "AACCGGTTAACC".to_string()),
            ("chr2".to_string(), "ACGTN".to_string()),
        ]))
    }

    #[rstest]
    fn test_names_are_sorted(genome: Genome) {
        assert_eq!(genome.chromosome_names(), &["chr1", "chr2"]);
    }

    #[rstest]
    fn test_forward_subsequence(genome: Genome) {
        let seq = genome.get_sequence("chr1", 2, 6, Strand::Forward).unwrap();
        assert_eq!(seq, "CCGG");
    }

    #[rstest]
    fn test_reverse_complement_round_trip(genome: Genome) {
        let forward = genome.get_sequence("chr1", 1, 9, Strand::Forward).unwrap();
        let reverse = genome.get_sequence("chr1", 1, 9, Strand::Reverse).unwrap();
        assert_eq!(reverse, reverse_complement(&forward));
        assert_eq!(reverse_complement(&reverse), forward);
    }

    #[rstest]
    fn test_non_acgt_symbols_self_complement(genome: Genome) {
        let reverse = genome.get_sequence("chr2", 0, 5, Strand::Reverse).unwrap();
        assert_eq!(reverse, "NACGT");
    }

    #[rstest]
    fn test_end_clamped_to_chromosome_length(genome: Genome) {
        let clamped = genome
            .get_sequence("chr1", 8, 1000, Strand::Forward)
            .unwrap();
        let exact = genome.get_sequence("chr1", 8, 12, Strand::Forward).unwrap();
        assert_eq!(clamped, exact);
    }

    #[rstest]
    fn test_start_past_end_returns_empty(genome: Genome) {
        let seq = genome
            .get_sequence("chr1", 12, 20, Strand::Forward)
            .unwrap();
        assert_eq!(seq, "");
    }

    #[rstest]
    fn test_unknown_strand_rejected(genome: Genome) {
        let result = genome.get_sequence("chr1", 0, 4, Strand::Unknown);
        assert!(matches!(result, Err(GenomeError::InvalidStrand(_))));
    }

    #[rstest]
    fn test_unknown_chromosome_rejected(genome: Genome) {
        let result = genome.get_sequence("chr99", 0, 4, Strand::Forward);
        assert!(matches!(result, Err(GenomeError::UnknownChromosome(_))));
    }

    #[rstest]
    fn test_chromosome_sequence_reverse(genome: Genome) {
        let seq = genome.chromosome_sequence("chr2", Strand::Reverse).unwrap();
        assert_eq!(seq, "NACGT");
    }

    #[test]
    fn test_complement_preserves_case() {
        assert_eq!(complement(b'a'), b't');
        assert_eq!(complement(b'G'), b'C');
        assert_eq!(complement(b'n'), b'n');
    }
}
