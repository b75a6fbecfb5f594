use ndarray::{Array3, s};

use seqdraw_genome::SequenceProvider;

use crate::errors::SamplerError;
use crate::sampler::{MAX_RETRIES, Sampler};

/// A stack of mixture draws ready for a training step.
///
/// `sequences` has shape `[batch, sequence_window, alphabet]`;
/// `labels` (absent for sequence-only batches)
/// `[batch, label_window, n_features]`.
#[derive(Debug, Clone)]
pub struct Batch {
    pub sequences: Array3<f32>,
    pub labels: Option<Array3<f32>>,
}

impl<G: SequenceProvider> Sampler<G> {
    /// Draw `batch_size` mixture examples and stack them.
    ///
    /// A draw whose windows were truncated by a chromosome boundary is
    /// discarded and redrawn, so a returned batch is always completely
    /// filled; zero-padded rows never stand in for a failed draw. Each
    /// slot is bounded by [`MAX_RETRIES`] redraws before the call fails
    /// with [`SamplerError::ExhaustedRetries`].
    pub fn get_batch(
        &mut self,
        batch_size: usize,
        positive_probability: f64,
        sequence_only: bool,
    ) -> Result<Batch, SamplerError> {
        let window = self.window_size() as usize;
        let label_window = self.label_window_size() as usize;

        let mut sequences = Array3::<f32>::zeros((batch_size, window, self.alphabet.len()));
        let mut labels = if sequence_only {
            None
        } else {
            Some(Array3::<f32>::zeros((
                batch_size,
                label_window,
                self.store.n_features(),
            )))
        };

        for slot in 0..batch_size {
            let mut filled = false;
            for _ in 0..MAX_RETRIES {
                let sample = self.sample_mixture(positive_probability, sequence_only)?;

                if sample.sequence.nrows() != window {
                    continue;
                }
                if let Some(sample_labels) = &sample.labels {
                    if sample_labels.nrows() != label_window {
                        continue;
                    }
                }

                sequences
                    .slice_mut(s![slot, .., ..])
                    .assign(&sample.sequence);
                if let (Some(stack), Some(sample_labels)) = (labels.as_mut(), sample.labels.as_ref())
                {
                    stack.slice_mut(s![slot, .., ..]).assign(sample_labels);
                }
                filled = true;
                break;
            }
            if !filled {
                return Err(SamplerError::ExhaustedRetries(MAX_RETRIES));
            }
        }

        Ok(Batch { sequences, labels })
    }
}
