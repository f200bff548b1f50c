//! The fixed set of name particles that stay lowercase.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Connectives and prepositions conventionally kept lowercase in proper
/// names, drawn from Portuguese and the other languages commonly seen in
/// Brazilian name data (Italian, Spanish, Dutch, German).
pub const PARTICLES: [&str; 20] = [
    "de", "di", "do", "da", "dos", "das", "dello", "della", "dalla", "dal",
    "del", "e", "em", "na", "no", "nas", "nos", "van", "von", "y",
];

static PARTICLE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PARTICLES.iter().copied().collect());

/// Returns the canonical lowercase spelling if `token` is a particle.
///
/// Matching is exact whole-token and case-insensitive; a token that merely
/// contains a particle as a substring ("Dante", "Vonda") never matches.
pub fn canonical(token: &str) -> Option<&'static str> {
    let lower = token.to_lowercase();
    PARTICLE_SET.get(lower.as_str()).copied()
}

/// Tests whether `token` is one of the fixed particles, ignoring case.
pub fn is_particle(token: &str) -> bool {
    canonical(token).is_some()
}
