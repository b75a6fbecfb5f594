use std::collections::HashMap;

use ndarray::Array2;

/// An ordered, finite symbol alphabet and its one-hot encoder.
///
/// Each symbol owns one column of the encoding; a symbol that is not in
/// the alphabet encodes as an all-zero row. That is deliberate:
/// ambiguous bases (N and friends) are "no base", not an error. The
/// match is byte-exact, so a soft-masked lowercase base is likewise a
/// zero row under the uppercase DNA alphabet.
///
/// # Examples
///
/// ```
/// use seqdraw_genome::Alphabet;
///
/// let alphabet = Alphabet::dna();
/// let encoding = alphabet.encode("AGN");
/// assert_eq!(encoding.shape(), &[3, 4]);
/// assert_eq!(encoding.row(0).sum(), 1.0);
/// assert_eq!(encoding.row(2).sum(), 0.0); // N is not in the alphabet
/// ```
#[derive(Clone, Debug)]
pub struct Alphabet {
    symbols: Vec<u8>,
    index: HashMap<u8, usize>,
}

impl Alphabet {
    pub fn new(symbols: impl IntoIterator<Item = u8>) -> Self {
        let mut deduped: Vec<u8> = Vec::new();
        let mut index = HashMap::new();
        for symbol in symbols {
            if !index.contains_key(&symbol) {
                index.insert(symbol, deduped.len());
                deduped.push(symbol);
            }
        }
        Alphabet {
            symbols: deduped,
            index,
        }
    }

    /// The DNA alphabet, in `A, G, C, T` column order.
    pub fn dna() -> Self {
        Alphabet::new(*b"AGCT")
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// One-hot encode a sequence: row `i` is the indicator of
    /// `sequence[i]` against this alphabet, shape `[len, alphabet]`.
    pub fn encode(&self, sequence: &str) -> Array2<f32> {
        let mut encoding = Array2::<f32>::zeros((sequence.len(), self.symbols.len()));
        for (position, byte) in sequence.bytes().enumerate() {
            if let Some(&channel) = self.index.get(&byte) {
                encoding[[position, channel]] = 1.0;
            }
        }
        encoding
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::dna()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("", 0)]
    #[case("A", 1)]
    #[case("ACGTACGT", 8)]
    fn test_encoding_shape(#[case] sequence: &str, #[case] rows: usize) {
        let encoding = Alphabet::dna().encode(sequence);
        assert_eq!(encoding.shape(), &[rows, 4]);
    }

    #[test]
    fn test_rows_are_one_hot() {
        let alphabet = Alphabet::dna();
        let encoding = alphabet.encode("AGCT");
        // column order is A, G, C, T
        for (row, expected_channel) in (0..4).zip([0usize, 1, 2, 3]) {
            assert_eq!(encoding.row(row).sum(), 1.0);
            assert_eq!(encoding[[row, expected_channel]], 1.0);
        }
    }

    #[test]
    fn test_unknown_symbols_encode_as_zero_rows() {
        let encoding = Alphabet::dna().encode("NaX");
        for row in 0..3 {
            assert_eq!(encoding.row(row).sum(), 0.0);
        }
    }

    #[test]
    fn test_duplicate_symbols_collapse() {
        let alphabet = Alphabet::new(*b"AGCTA");
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet.symbols(), b"AGCT");
    }
}
