//! # spark-search
//!
//! Ranked card-name search: a pure relevance scorer plus a thin adapter
//! that pulls candidate rows from spark-db and re-ranks them in memory.

pub mod cards;
pub mod error;
pub mod rank;

pub use cards::search_cards;
pub use error::SearchError;
pub use rank::{rank_by_relevance, score_name};
