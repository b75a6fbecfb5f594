use std::collections::HashSet;

use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;

use seqdraw_core::models::{FeatureRecord, Strand};
use seqdraw_features::FeatureStore;
use seqdraw_genome::{Alphabet, SequenceProvider};

use crate::config::{SamplerConfig, SamplingMode};
use crate::errors::SamplerError;

/// Retry bound shared by background rejection sampling and batch fill.
pub const MAX_RETRIES: usize = 100;

/// How many chromosome names are drawn (uniformly, with replacement)
/// per refill of the background candidate pool.
const CHROM_POOL_BATCH: usize = 2000;

/// One drawn example: the locus it came from plus its encodings.
///
/// `sequence` has shape `[sequence_window, alphabet]` and `labels`
/// (absent for sequence-only draws) `[label_window, n_features]`. A
/// locus close to a chromosome boundary yields windows shorter than
/// nominal; [`Sampler::get_batch`](crate::Sampler::get_batch) discards
/// and redraws those, but single draws hand them to the caller as-is.
#[derive(Debug, Clone)]
pub struct Sample {
    pub chrom: String,
    pub position: u32,
    pub strand: Strand,
    pub sequence: Array2<f32>,
    pub labels: Option<Array2<f32>>,
}

/// Draws positive, background, and mixed examples from a genome and a
/// [`FeatureStore`].
///
/// The sampler owns all of its mutable state: the current mode, the
/// active record view derived from it, the background chromosome pool,
/// and a seedable RNG. One instance is single-threaded; for parallel
/// batch generation use independent instances (the [`FeatureStore`] is
/// read-only and can be shared).
pub struct Sampler<G: SequenceProvider> {
    pub(crate) genome: G,
    pub(crate) store: FeatureStore,
    pub(crate) alphabet: Alphabet,
    holdout: HashSet<String>,
    mode: SamplingMode,
    /// Indices into `store.records()` eligible for positive sampling.
    active: Vec<usize>,
    chrom_pool: Vec<String>,
    pub(crate) radius: u32,
    pub(crate) padding: u32,
    overlap_threshold: f64,
    rng: StdRng,
}

impl<G: SequenceProvider> Sampler<G> {
    pub fn new(genome: G, store: FeatureStore, config: SamplerConfig) -> Result<Self, SamplerError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mode = config.mode;
        let padding = config.padding();
        let mut sampler = Sampler {
            genome,
            store,
            alphabet: Alphabet::dna(),
            holdout: config.holdout_chromosomes,
            mode,
            active: Vec::new(),
            chrom_pool: Vec::new(),
            radius: config.radius,
            padding,
            overlap_threshold: config.overlap_threshold,
            rng,
        };
        sampler.set_mode(mode);
        Ok(sampler)
    }

    pub fn mode(&self) -> SamplingMode {
        self.mode
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    /// Total sequence-window length of a full-shape draw.
    pub fn window_size(&self) -> u32 {
        2 * (self.radius + self.padding) + 1
    }

    /// Total label-window length of a full-shape draw.
    pub fn label_window_size(&self) -> u32 {
        2 * self.radius + 1
    }

    pub fn store(&self) -> &FeatureStore {
        &self.store
    }

    /// Switch modes, rebuilding the active view.
    ///
    /// The view is always refiltered from the untouched full record
    /// set, never from a previously filtered view, so repeated switches
    /// cannot drift.
    pub fn set_mode(&mut self, mode: SamplingMode) {
        self.mode = mode;
        self.active = self
            .store
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| match mode {
                SamplingMode::All => true,
                SamplingMode::Train => !self.holdout.contains(&record.chrom),
                SamplingMode::Test => self.holdout.contains(&record.chrom),
            })
            .map(|(index, _)| index)
            .collect();
    }

    /// The records eligible for positive sampling under the current mode.
    pub fn active_records(&self) -> impl Iterator<Item = &FeatureRecord> + '_ {
        self.active.iter().map(|&index| &self.store.records()[index])
    }

    /// Draw a positive example from a uniformly chosen active record.
    ///
    /// Draw order per call: record, position within the record, then
    /// strand (only when the record's strand is unspecified).
    pub fn sample_positive(&mut self, sequence_only: bool) -> Result<Sample, SamplerError> {
        if self.active.is_empty() {
            return Err(SamplerError::EmptyActiveView(self.mode));
        }

        let index = self.active[self.rng.gen_range(0..self.active.len())];
        let record = &self.store.records()[index];
        let (chrom, start, end, record_strand) =
            (record.chrom.clone(), record.start, record.end, record.strand);

        let position = self.rng.gen_range(start..end);
        let strand = match record_strand {
            Strand::Unknown => self.random_strand(),
            known => known,
        };

        self.retrieve(&chrom, position, strand, sequence_only)
    }

    /// Draw a background example: a random locus verified not to
    /// overlap an annotated feature beyond the configured threshold.
    ///
    /// Draw order per attempt: chromosome (from the candidate pool,
    /// refilled in batches of 2000), position, strand, then the
    /// rejection query. Candidates on chromosomes shorter than
    /// `2 * radius` are discarded; every discard or rejection counts
    /// against the same bound of [`MAX_RETRIES`] attempts.
    pub fn sample_background(&mut self, sequence_only: bool) -> Result<Sample, SamplerError> {
        for _ in 0..MAX_RETRIES {
            let (chrom, position, strand) = match self.background_candidate() {
                Ok(candidate) => candidate,
                Err(SamplerError::ChromosomeTooShort { .. }) => continue,
                Err(err) => return Err(err),
            };

            let positive = self.store.is_positive(
                &chrom,
                position - self.radius,
                position + self.radius + 1,
                self.overlap_threshold,
            );
            if positive {
                // a false negative; redraw
                continue;
            }

            return self.retrieve(&chrom, position, strand, sequence_only);
        }
        Err(SamplerError::ExhaustedRetries(MAX_RETRIES))
    }

    /// Draw a positive example with probability `positive_probability`,
    /// otherwise a background example.
    pub fn sample_mixture(
        &mut self,
        positive_probability: f64,
        sequence_only: bool,
    ) -> Result<Sample, SamplerError> {
        if !(0.0..=1.0).contains(&positive_probability) {
            return Err(SamplerError::InvalidConfig(format!(
                "positive probability must be in [0, 1], got {}",
                positive_probability
            )));
        }

        if self.rng.gen_bool(positive_probability) {
            self.sample_positive(sequence_only)
        } else {
            self.sample_background(sequence_only)
        }
    }

    fn random_strand(&mut self) -> Strand {
        if self.rng.gen_bool(0.5) {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }

    fn background_candidate(&mut self) -> Result<(String, u32, Strand), SamplerError> {
        let chrom = match self.chrom_pool.pop() {
            Some(chrom) => chrom,
            None => {
                let names = self.genome.chromosome_names();
                if names.is_empty() {
                    return Err(SamplerError::InvalidConfig(
                        "genome has no chromosomes".to_string(),
                    ));
                }
                self.chrom_pool = (0..CHROM_POOL_BATCH)
                    .map(|_| names[self.rng.gen_range(0..names.len())].clone())
                    .collect();
                match self.chrom_pool.pop() {
                    Some(chrom) => chrom,
                    None => unreachable!("pool was just refilled"),
                }
            }
        };

        let length = self.genome.chromosome_length(&chrom)?;
        if length <= 2 * self.radius {
            return Err(SamplerError::ChromosomeTooShort {
                chrom,
                length,
                radius: self.radius,
            });
        }

        let position = self.rng.gen_range(self.radius..length - self.radius);
        let strand = self.random_strand();
        Ok((chrom, position, strand))
    }

    /// Materialize the example at a locus: fetch and encode the
    /// sequence window, and (unless `sequence_only`) the label matrix
    /// over the narrower label window.
    fn retrieve(
        &mut self,
        chrom: &str,
        position: u32,
        strand: Strand,
        sequence_only: bool,
    ) -> Result<Sample, SamplerError> {
        let flank = self.radius + self.padding;
        let sequence_start = position.saturating_sub(flank);
        let sequence_end = position + flank + 1;

        let raw = self
            .genome
            .get_sequence(chrom, sequence_start, sequence_end, strand)?;
        let sequence = self.alphabet.encode(&raw);

        let labels = if sequence_only {
            None
        } else {
            let label_start = position.saturating_sub(self.radius);
            let label_end = position + self.radius + 1;
            Some(self.store.label_matrix(chrom, label_start, label_end, strand)?)
        };

        Ok(Sample {
            chrom: chrom.to_string(),
            position,
            strand,
            sequence,
            labels,
        })
    }
}
