//! # Pepsift Core Library
//!
//! A library for screening large peptide sequence collections by sequence
//! pattern and by physicochemical descriptor ranges (net charge, isoelectric
//! point, hydrophobicity, Boman index, hydrophobic moment).
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless building blocks: the
//!   residue chemistry tables and the pure descriptor math, sequence
//!   normalization, sequence-pattern compilation, and file I/O
//!   (FASTA-like, delimited-text, JSON).
//!
//! - **[`engine`]: The Logic Core.** This stateful layer orchestrates bulk
//!   screening. It includes the [`engine::context::SessionContext`] that owns
//!   the working collection and the descriptor cache, the chunked batch tasks
//!   (filter, render, cache warm-up) with progress reporting, and the
//!   last-request-wins supersession mechanism.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level,
//!   user-facing layer. It ties the `engine` and `core` together to execute
//!   a complete search: filter the collection, build highlighted display
//!   rows, and summarize the matching subset.

pub mod core;
pub mod engine;
pub mod workflows;
