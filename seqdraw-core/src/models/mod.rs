pub mod feature;
pub mod interval;
pub mod strand;

pub use feature::{FeatureRecord, FeatureSet};
pub use interval::Interval;
pub use strand::Strand;
