pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod random;
pub mod seed;
pub mod strength;

pub use catalog::WordCatalog;
pub use config::{Capitalization, PassphraseConfig, Separator};
pub use engine::{GenerationResult, PassphraseEngine};
pub use error::{Error, Result};
pub use random::{KeystreamRandom, RandomSource, ThreadRandom};
pub use seed::derive_seed;
pub use strength::{StrengthLevel, StrengthReport, calculate_strength};
