#[cfg(feature = "core")]
#[doc(inline)]
pub use seqdraw_core as core;

#[cfg(feature = "genome")]
#[doc(inline)]
pub use seqdraw_genome as genome;

#[cfg(feature = "features")]
#[doc(inline)]
pub use seqdraw_features as features;

#[cfg(feature = "sampler")]
#[doc(inline)]
pub use seqdraw_sampler as sampler;
