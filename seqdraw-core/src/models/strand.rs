use std::fmt::{self, Display};
use std::str::FromStr;

/// The reading direction of a genomic interval.
///
/// `Unknown` corresponds to the `'.'` strand token in BED-like tables:
/// the annotation applies to both strands, and samplers resolve it to a
/// concrete side with a coin flip at draw time.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
    Unknown,
}

impl Strand {
    /// Whether this strand names a concrete reading direction.
    pub fn is_known(&self) -> bool {
        !matches!(self, Strand::Unknown)
    }
}

impl FromStr for Strand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            "." => Ok(Strand::Unknown),
            _ => Err(format!("Invalid strand token: {}", s)),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
            Strand::Unknown => write!(f, "."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_and_display_round_trip() {
        for token in ["+", "-", "."] {
            let strand: Strand = token.parse().unwrap();
            assert_eq!(strand.to_string(), token);
        }
    }

    #[test]
    fn test_invalid_token_rejected() {
        assert!("x".parse::<Strand>().is_err());
        assert!("".parse::<Strand>().is_err());
    }
}
