//! # spark-rarity
//!
//! Rarity backfill for card rows imported without one.
//!
//! Resolution is a prioritized chain of sources, first answer wins:
//! cache, then the local bulk reference data (most specific match first),
//! then — only when no bulk data is available at all — a remote exact-name
//! lookup, with a shape heuristic as the terminal safety net. Every
//! resolution is memoized into a JSON-file cache before it is applied, so
//! repeat runs short-circuit in O(1).

pub mod backfill;
pub mod bulk;
pub mod cache;
pub mod error;
pub mod heuristic;
pub mod remote;

pub use backfill::backfill_rarities;
pub use bulk::BulkIndex;
pub use cache::RarityCache;
pub use error::RarityError;
pub use remote::RemoteClient;
