//! The proper-name normalization pipeline.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::particles;
use crate::roman;

// Maximal runs of whitespace collapse to a single ASCII space.
static MULTIPLE_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes proper-name strings into canonical capitalized form.
///
/// The normalizer is stateless; all lookup data lives in immutable statics,
/// so a single instance (or the [`normalize`] free function) can be shared
/// across threads freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameNormalizer;

impl NameNormalizer {
    /// Creates a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalizes the given proper name.
    ///
    /// The pipeline, in order:
    ///
    /// 1. Every period gains a trailing space, so abbreviated name parts
    ///    ("A." in "JOÃO A.DA SILVA") separate from the word that follows
    ///    once the string is split on spaces.
    /// 2. Runs of whitespace, whether introduced by step 1 or present in the
    ///    input, collapse to single spaces.
    /// 3. The string is trimmed and split into word tokens; empty tokens are
    ///    skipped.
    /// 4. Each token is title-cased, then checked against the particle set
    ///    (lowercase wins) and the Roman-numeral grammar (uppercase wins,
    ///    evaluated last).
    /// 5. The tokens are rejoined with single spaces, in original order.
    ///
    /// Total over any input; the empty string normalizes to itself.
    ///
    /// # Example
    /// ```
    /// use nomina::NameNormalizer;
    ///
    /// let normalizer = NameNormalizer::new();
    /// assert_eq!(normalizer.normalize("MARIA    DE   SOUZA"), "Maria de Souza");
    /// ```
    pub fn normalize(&self, name: &str) -> String {
        log::trace!("normalizing name of {} bytes", name.len());

        let expanded = name.replace('.', ". ");
        let collapsed = MULTIPLE_SPACES.replace_all(&expanded, " ");

        let tokens: Vec<String> = collapsed
            .trim()
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(recase_token)
            .collect();

        tokens.join(" ")
    }
}

/// Title-cases one token, then applies the particle and numeral overrides.
fn recase_token(token: &str) -> String {
    let mut part = title_case(token);

    if let Some(canonical) = particles::canonical(&part) {
        part = canonical.to_string();
    }

    // Evaluated after the particle lookup and allowed to overwrite it, as
    // the reference behavior does ("di" uppercases to the numeral DI).
    if roman::is_roman_numeral(&part) {
        part = part.to_uppercase();
    }

    part
}

/// Title-cases a single word: first grapheme cluster uppercased, the rest
/// lowercased, both through Unicode case mappings ("ã" becomes "Ã").
fn title_case(word: &str) -> String {
    let mut graphemes = word.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut result = first.to_uppercase();
            result.push_str(&graphemes.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

/// One-shot convenience over [`NameNormalizer::normalize`].
///
/// # Example
/// ```
/// use nomina::normalize;
///
/// assert_eq!(normalize("rua XV de novembro"), "Rua XV de Novembro");
/// ```
pub fn normalize(name: &str) -> String {
    NameNormalizer::new().normalize(name)
}
