//! # spark-core
//!
//! Core types and error types for Spark Arcanum.
//!
//! This crate provides the foundational types shared across all Spark crates:
//! - Entity structs for all domain objects (cards, sets, rules, decks, users)
//! - The rarity enum with its storage strings and tie-break priority
//! - Cross-cutting error types
//! - CLI response and run-summary types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
