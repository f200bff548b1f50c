//! # Nomina - Proper-Name Normalization
//!
//! Nomina normalizes human proper-name strings (people's names, street and
//! address names) written in Portuguese-influenced orthography into a
//! canonical capitalized form.
//!
//! ## Overview
//!
//! Raw name data tends to arrive fully uppercased, irregularly spaced, and
//! with abbreviation periods glued to the next word ("JOÃO A.DA  SILVA").
//! Normalization title-cases every word, keeps linguistic particles such as
//! "de" and "von" lowercase, uppercases Roman numerals, and collapses the
//! punctuation and whitespace noise along the way.
//!
//! ## Quick Start
//!
//! ```
//! use nomina::normalize;
//!
//! assert_eq!(normalize("JOÃO A. DA SILVA"), "João A. da Silva");
//! assert_eq!(normalize("av. papa joão xxiii"), "Av. Papa João XXIII");
//! assert_eq!(normalize("VON NEUMANN"), "von Neumann");
//! ```
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - [`normalizer`] - The normalization pipeline
//! - [`particles`] - The fixed set of lowercase name particles
//! - [`roman`] - Roman-numeral recognition
//!
//! All lookup data is immutable and lazily initialized, so [`normalize`] is
//! safe to call from any number of threads without coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod normalizer;
pub mod particles;
pub mod roman;

// Re-export commonly used items
pub use normalizer::{normalize, NameNormalizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
