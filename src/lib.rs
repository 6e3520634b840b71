pub mod config;
pub mod eval;
pub mod metric;
pub mod pairs;
pub mod report;
pub mod resolver;
pub mod store;

// Re-export commonly used types
pub use eval::{evaluate, EvalError, Outcome, Verification};
pub use metric::Metric;
pub use pairs::{MatchedPair, MismatchedPair, PairLists};
pub use resolver::{IndexTable, Resolver};
pub use store::{EmbeddingRecord, EmbeddingStore};
