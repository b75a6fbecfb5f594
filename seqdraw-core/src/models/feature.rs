use std::fmt::{self, Display};
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::errors::FeatureSetError;
use crate::models::Strand;
use crate::utils::get_dynamic_reader;

///
/// One annotated feature interval: a half-open genomic range plus the
/// name of the feature it carries.
///
/// Records come from tab-separated tables with the columns
/// `[chrom, start, end, strand, feature]`; anything after the fifth
/// column (e.g. a metadata index) is kept verbatim in `rest` but never
/// interpreted.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct FeatureRecord {
    pub chrom: String,
    pub start: u32,
    pub end: u32,
    pub strand: Strand,
    pub feature: String,

    pub rest: Option<String>,
}

impl FeatureRecord {
    ///
    /// Get length of the interval
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }
}

impl Display for FeatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}{}",
            self.chrom,
            self.start,
            self.end,
            self.strand,
            self.feature,
            self.rest
                .as_deref()
                .map_or(String::new(), |s| format!("\t{}", s)),
        )
    }
}

///
/// FeatureSet struct, the representation of a feature annotation table,
/// such as a BED file with strand and feature-name columns.
///
#[derive(Clone, Debug)]
pub struct FeatureSet {
    pub records: Vec<FeatureRecord>,
    pub path: Option<PathBuf>,
}

impl TryFrom<&Path> for FeatureSet {
    type Error = FeatureSetError;

    ///
    /// Create a new [FeatureSet] from a tab-separated annotation file
    /// (plain or gzipped).
    ///
    /// # Arguments:
    /// - value: path to the annotation file on disk.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value)
            .map_err(|err| FeatureSetError::FileReadError(err.to_string()))?;

        let mut records: Vec<FeatureRecord> = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;

            if line.starts_with("browser")
                || line.starts_with("track")
                || line.starts_with('#')
                || line.is_empty()
            {
                continue;
            }

            let record = parse_record(&line)
                .map_err(|err| FeatureSetError::RecordParse(format!("line {}: {}", index + 1, err)))?;

            if record.start >= record.end {
                return Err(FeatureSetError::InvalidInterval {
                    chrom: record.chrom,
                    start: record.start,
                    end: record.end,
                });
            }

            records.push(record);
        }

        if records.is_empty() {
            return Err(FeatureSetError::EmptyFeatureSet(
                value.display().to_string(),
            ));
        }

        Ok(FeatureSet {
            records,
            path: Some(value.to_path_buf()),
        })
    }
}

impl From<Vec<FeatureRecord>> for FeatureSet {
    fn from(records: Vec<FeatureRecord>) -> Self {
        FeatureSet {
            records,
            path: None,
        }
    }
}

impl FeatureSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    ///
    /// The distinct feature names in this set, in order of first
    /// appearance. This is the declared feature list used to build a
    /// feature-channel index when the caller does not supply one.
    ///
    pub fn feature_names(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut names = Vec::new();
        for record in &self.records {
            if seen.insert(record.feature.as_str()) {
                names.push(record.feature.clone());
            }
        }
        names
    }
}

fn parse_record(line: &str) -> Result<FeatureRecord, String> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 5 {
        return Err(format!(
            "expected at least 5 tab-separated columns, found {}",
            parts.len()
        ));
    }

    let start = parts[1]
        .parse::<u32>()
        .map_err(|_| format!("invalid start coordinate: {}", parts[1]))?;
    let end = parts[2]
        .parse::<u32>()
        .map_err(|_| format!("invalid end coordinate: {}", parts[2]))?;
    let strand = parts[3].parse::<Strand>()?;

    let rest = if parts.len() > 5 {
        Some(parts[5..].join("\t"))
    } else {
        None
    };

    Ok(FeatureRecord {
        chrom: parts[0].to_string(),
        start,
        end,
        strand,
        feature: parts[4].to_string(),
        rest,
    })
}
