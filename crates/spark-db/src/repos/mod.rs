//! Repository methods, implemented as `impl SparkDb` blocks per entity.

pub mod cards;
pub mod decks;
pub mod meta;
pub mod rules;
pub mod sets;
pub mod users;

pub use cards::BatchOutcome;
pub use rules::RuleWriteOutcome;
