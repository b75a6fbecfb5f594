use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use seqdraw_core::utils::get_dynamic_reader;

use crate::errors::GenomeError;

/// Read every sequence in a FASTA file (plain or gzipped) into memory.
///
/// The record name is the first whitespace-delimited token of the
/// header line; any description after it is dropped. Returns a map
/// from record name to sequence.
pub fn load_fasta<P: AsRef<Path>>(file_path: P) -> Result<HashMap<String, String>, GenomeError> {
    let reader = get_dynamic_reader(file_path.as_ref())
        .map_err(|err| GenomeError::FileReadError(err.to_string()))?;

    let mut sequences: HashMap<String, String> = HashMap::new();
    let mut current_id: Option<String> = None;
    let mut current_seq = String::new();

    for line in reader.lines() {
        let line = line?;

        if let Some(header) = line.strip_prefix('>') {
            if let Some(id) = current_id.take() {
                sequences.insert(id, std::mem::take(&mut current_seq));
            }

            let id = header
                .split_whitespace()
                .next()
                .ok_or_else(|| GenomeError::InvalidFasta("record with empty header".to_string()))?
                .to_string();
            if sequences.contains_key(&id) {
                return Err(GenomeError::InvalidFasta(format!(
                    "duplicate record name: {}",
                    id
                )));
            }
            current_id = Some(id);
        } else if !line.trim().is_empty() {
            if current_id.is_none() {
                return Err(GenomeError::InvalidFasta(
                    "sequence data before the first header".to_string(),
                ));
            }
            current_seq.push_str(line.trim());
        }
    }

    if let Some(id) = current_id.take() {
        sequences.insert(id, current_seq);
    }

    if sequences.is_empty() {
        return Err(GenomeError::InvalidFasta(format!(
            "no records found in {}",
            file_path.as_ref().display()
        )));
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_load_multiline_records() {
        let mut file = tempfile::NamedTempFile::with_suffix(".fa").unwrap();
        file.write_all(b">chr1 primary assembly\nACGT\nACGT\n>chr2\nTTTT\n")
            .unwrap();

        let sequences = load_fasta(file.path()).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences["chr1"], "ACGTACGT");
        assert_eq!(sequences["chr2"], "TTTT");
    }

    #[test]
    fn test_sequence_before_header_is_fatal() {
        let mut file = tempfile::NamedTempFile::with_suffix(".fa").unwrap();
        file.write_all(b"ACGT\n>chr1\nACGT\n").unwrap();

        assert!(matches!(
            load_fasta(file.path()),
            Err(GenomeError::InvalidFasta(_))
        ));
    }

    #[test]
    fn test_duplicate_record_is_fatal() {
        let mut file = tempfile::NamedTempFile::with_suffix(".fa").unwrap();
        file.write_all(b">chr1\nACGT\n>chr1\nTTTT\n").unwrap();

        assert!(matches!(
            load_fasta(file.path()),
            Err(GenomeError::InvalidFasta(_))
        ));
    }

    #[test]
    fn test_empty_file_is_fatal() {
        let file = tempfile::NamedTempFile::with_suffix(".fa").unwrap();

        assert!(matches!(
            load_fasta(file.path()),
            Err(GenomeError::InvalidFasta(_))
        ));
    }
}
