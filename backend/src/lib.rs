//! # Costs Rust Backend
//!
//! Analysis engine for construction-project cost records.
//!
//! This crate provides the core of a cost-comparison tool for construction
//! projects: records carry per-sqm costs broken out by DIN 276 cost groups,
//! and the engine computes per-group statistics (average, min, max, sample
//! standard deviation) over the subset of records that are both flagged as
//! included and pass the active filter, optionally normalized to a common
//! cost basis through a year-dependent correction factor.
//!
//! ## Features
//!
//! - **Data Loading**: Parse project records from CSV exports
//! - **Filtering**: Area bounds and project-type selection (any/all matching)
//! - **Normalization**: Year-based correction factors with TOML persistence
//! - **Aggregation**: Full statistics recomputation on every mutation
//! - **Export**: CSV tables, plain-text reports, and JSON snapshots
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Consolidated public types and operations
//! - [`models`]: Records, cost groups, filter criteria, correction factors
//! - [`services`]: Filtering, statistics, aggregation, and the session
//!   controller that recomputes after every mutation
//! - [`db`]: The owned in-memory record store and settings persistence
//! - [`parsing`]: CSV ingestion with the loader's defaulting rules
//! - [`export`]: Renderers consuming engine output verbatim
//!
//! The engine itself is a total, synchronous function of its inputs: no
//! async runtime, no background work, no error path. Recomputation is full
//! rather than incremental: datasets are small and a linear pass per
//! mutation removes the entire class of stale-partial-sum bugs.
//!
//! The crate exposes no process entry point; CLI or GUI surfaces are
//! external consumers of [`api`].

pub mod api;

pub mod db;
pub mod models;

pub mod export;
pub mod parsing;

pub mod services;
