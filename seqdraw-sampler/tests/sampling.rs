//! End-to-end sampling scenarios across the whole stack: genome,
//! feature store, and sampler together.

use std::collections::{HashMap, HashSet};

use seqdraw_core::models::{FeatureRecord, FeatureSet, Strand};
use seqdraw_features::{FeatureIndex, FeatureStore};
use seqdraw_genome::Genome;
use seqdraw_sampler::{Sampler, SamplerConfig, SamplingMode};

fn single_record_sampler(seed: u64) -> Sampler<Genome> {
    // one feature record on chr1, plus a large unannotated chr2 so
    // background sampling has plenty of negative space
    let genome = Genome::new(HashMap::from([
        ("chr1".to_string(), "ACGT".repeat(75)),
        ("chr2".to_string(), "ACGT".repeat(2500)),
    ]));
    let features = FeatureSet::from(vec![FeatureRecord {
        chrom: "chr1".to_string(),
        start: 100,
        end: 200,
        strand: Strand::Forward,
        feature: "X".to_string(),
        rest: None,
    }]);
    let store = FeatureStore::build(features, FeatureIndex::new(["X".to_string()])).unwrap();

    let config = SamplerConfig {
        radius: 5,
        window_size: 11,
        holdout_chromosomes: HashSet::new(),
        mode: SamplingMode::All,
        overlap_threshold: 0.5,
        seed: Some(seed),
    };
    Sampler::new(genome, store, config).unwrap()
}

#[test]
fn positive_draws_center_on_the_record() {
    let mut sampler = single_record_sampler(42);

    for _ in 0..1000 {
        let sample = sampler.sample_positive(false).unwrap();
        assert_eq!(sample.chrom, "chr1");
        assert!(
            (100..200).contains(&sample.position),
            "center {} outside the record",
            sample.position
        );

        // the center row of the label window sits on the record
        let labels = sample.labels.unwrap();
        let center = labels.nrows() / 2;
        assert_eq!(labels[[center, 0]], 1.0);
    }
}

#[test]
fn background_draws_are_never_positive() {
    let mut sampler = single_record_sampler(43);
    let threshold = 0.5;

    for _ in 0..500 {
        let sample = sampler.sample_background(false).unwrap();
        let start = sample.position - 5;
        let end = sample.position + 6;
        assert!(
            !sampler.store().is_positive(&sample.chrom, start, end, threshold),
            "background draw at {}:{} overlaps a feature",
            sample.chrom,
            sample.position
        );
    }
}

#[test]
fn mixture_ratio_converges_to_the_requested_probability() {
    let mut sampler = single_record_sampler(44);
    let draws = 10_000;
    let p = 0.5;

    // a draw came from the positive path exactly when its center row is
    // labeled: positives always center inside the record, and any
    // background candidate centered there would have been rejected
    let mut positives = 0usize;
    for _ in 0..draws {
        let sample = sampler.sample_mixture(p, false).unwrap();
        let labels = sample.labels.unwrap();
        let center = labels.nrows() / 2;
        if labels[[center, 0]] == 1.0 {
            positives += 1;
        }
    }

    let fraction = positives as f64 / draws as f64;
    assert!(
        (fraction - p).abs() < 0.02,
        "positive fraction {} too far from {}",
        fraction,
        p
    );
}

#[test]
fn sequence_window_matches_the_genome() {
    let mut sampler = single_record_sampler(45);

    let sample = sampler.sample_positive(false).unwrap();
    assert_eq!(sample.sequence.shape(), &[11, 4]);
    // every position in the test genome is a known base
    assert_eq!(sample.sequence.sum(), 11.0);
}

#[test]
fn holdout_partition_controls_positive_sampling() {
    let genome = Genome::new(HashMap::from([
        ("chr1".to_string(), "ACGT".repeat(250)),
        ("chr8".to_string(), "ACGT".repeat(250)),
    ]));
    let features = FeatureSet::from(vec![
        FeatureRecord {
            chrom: "chr1".to_string(),
            start: 100,
            end: 200,
            strand: Strand::Forward,
            feature: "X".to_string(),
            rest: None,
        },
        FeatureRecord {
            chrom: "chr8".to_string(),
            start: 300,
            end: 400,
            strand: Strand::Forward,
            feature: "X".to_string(),
            rest: None,
        },
    ]);
    let store = FeatureStore::build(features, FeatureIndex::new(["X".to_string()])).unwrap();

    let config = SamplerConfig {
        radius: 5,
        window_size: 11,
        holdout_chromosomes: HashSet::from(["chr8".to_string()]),
        mode: SamplingMode::Train,
        overlap_threshold: 0.5,
        seed: Some(46),
    };
    let mut sampler = Sampler::new(genome, store, config).unwrap();

    for _ in 0..100 {
        let sample = sampler.sample_positive(true).unwrap();
        assert_eq!(sample.chrom, "chr1");
    }

    sampler.set_mode(SamplingMode::Test);
    for _ in 0..100 {
        let sample = sampler.sample_positive(true).unwrap();
        assert_eq!(sample.chrom, "chr8");
    }
}
