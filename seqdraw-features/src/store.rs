use std::collections::HashMap;

use ndarray::{Array2, s};

use seqdraw_core::models::{FeatureRecord, FeatureSet, Interval, Strand};

use crate::bits::Bits;
use crate::errors::FeatureStoreError;

/// Bijective mapping from feature name to a dense channel in
/// `[0, n_features)`, fixed at construction.
#[derive(Clone, Debug, Default)]
pub struct FeatureIndex {
    names: Vec<String>,
    channels: HashMap<String, usize>,
}

impl FeatureIndex {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        let mut deduped: Vec<String> = Vec::new();
        let mut channels = HashMap::new();
        for name in names {
            if !channels.contains_key(&name) {
                channels.insert(name.clone(), deduped.len());
                deduped.push(name);
            }
        }
        FeatureIndex {
            names: deduped,
            channels,
        }
    }

    pub fn channel(&self, name: &str) -> Option<usize> {
        self.channels.get(name).copied()
    }

    pub fn name(&self, channel: usize) -> Option<&str> {
        self.names.get(channel).map(|s| s.as_str())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// An immutable, queryable index over annotated feature intervals.
///
/// Built once from a [`FeatureSet`] and a declared feature list; every
/// record must name a feature from that list or construction fails with
/// [`FeatureStoreError::UnknownFeature`]. Failing at load time is
/// deliberate: a record whose feature cannot be resolved is a
/// configuration error, and zero-filling its labels later would mask
/// it.
///
/// The store is read-only after construction and safe to share across
/// threads.
pub struct FeatureStore {
    index: FeatureIndex,
    records: Vec<FeatureRecord>,
    by_chrom: HashMap<String, Bits<usize>>,
}

impl FeatureStore {
    /// Build the store against an explicit feature list.
    pub fn build(features: FeatureSet, index: FeatureIndex) -> Result<Self, FeatureStoreError> {
        let records = features.records;

        let mut per_chrom: HashMap<String, Vec<Interval<usize>>> = HashMap::new();
        for record in &records {
            let channel = index.channel(&record.feature).ok_or_else(|| {
                FeatureStoreError::UnknownFeature {
                    feature: record.feature.clone(),
                    chrom: record.chrom.clone(),
                    start: record.start,
                    end: record.end,
                }
            })?;
            per_chrom
                .entry(record.chrom.clone())
                .or_default()
                .push(Interval {
                    start: record.start,
                    end: record.end,
                    val: channel,
                });
        }

        let by_chrom = per_chrom
            .into_iter()
            .map(|(chrom, intervals)| (chrom, Bits::build(intervals)))
            .collect();

        Ok(FeatureStore {
            index,
            records,
            by_chrom,
        })
    }

    /// Build the store with the feature list discovered from the set
    /// itself (distinct names in first-seen order).
    pub fn from_feature_set(features: FeatureSet) -> Result<Self, FeatureStoreError> {
        let index = FeatureIndex::new(features.feature_names());
        FeatureStore::build(features, index)
    }

    pub fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    pub fn feature_index(&self) -> &FeatureIndex {
        &self.index
    }

    pub fn n_features(&self) -> usize {
        self.index.len()
    }

    /// Whether some single record overlapping `[start, end)` covers
    /// strictly more than `threshold` of the window.
    ///
    /// The cutoff is `threshold * (end - start - 1)`, not
    /// `threshold * (end - start)`: the `- 1` reproduces the coverage
    /// rule the existing labeled datasets were built with, and is kept
    /// for compatibility with them.
    pub fn is_positive(&self, chrom: &str, start: u32, end: u32, threshold: f64) -> bool {
        let Some(bits) = self.by_chrom.get(chrom) else {
            return false;
        };
        let cutoff = threshold * f64::from(end.saturating_sub(start).saturating_sub(1));
        bits.find_iter(start, end)
            .any(|iv| f64::from(iv.intersect(start, end)) > cutoff)
    }

    /// The `[end - start, n_features]` label matrix for a window: 1
    /// wherever a record's feature covers a position, 0 elsewhere.
    ///
    /// On the forward strand a record occupies rows
    /// `[record.start - start, record.end - start)`. On the reverse
    /// strand the window is mirrored, so it occupies
    /// `[end - record.end, end - record.start)` instead. Either way the
    /// rows are clipped to the window before writing.
    pub fn label_matrix(
        &self,
        chrom: &str,
        start: u32,
        end: u32,
        strand: Strand,
    ) -> Result<Array2<f32>, FeatureStoreError> {
        if !strand.is_known() {
            return Err(FeatureStoreError::InvalidStrand(strand));
        }

        let width = end.saturating_sub(start) as usize;
        let mut matrix = Array2::<f32>::zeros((width, self.index.len()));

        let Some(bits) = self.by_chrom.get(chrom) else {
            return Ok(matrix);
        };

        for iv in bits.find_iter(start, end) {
            let (row_start, row_end) = match strand {
                Strand::Forward => (
                    i64::from(iv.start) - i64::from(start),
                    i64::from(iv.end) - i64::from(start),
                ),
                Strand::Reverse => (
                    i64::from(end) - i64::from(iv.end),
                    i64::from(end) - i64::from(iv.start),
                ),
                Strand::Unknown => unreachable!("rejected above"),
            };
            let row_start = row_start.clamp(0, width as i64) as usize;
            let row_end = row_end.clamp(0, width as i64) as usize;
            matrix.slice_mut(s![row_start..row_end, iv.val]).fill(1.0);
        }

        Ok(matrix)
    }
}
