//! Roman-numeral recognition.
//!
//! Roman numerals are rare in people's names but common in street names and
//! regnal names ("Av. Papa João XXIII", "Dom Pedro II"), and they are always
//! written fully uppercase.

use once_cell::sync::Lazy;
use regex::Regex;

// Standard subtractive-notation grammar. Each group handles one decimal
// digit position, so the pattern rejects malformed forms like "IIII" or "VX".
static ROMAN_NUMERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M{0,4}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$").unwrap()
});

/// Tests whether the uppercase form of `token` is a valid Roman numeral.
///
/// Every group in the pattern is optional, so the regex itself would accept
/// the empty string; empty tokens are rejected here.
pub fn is_roman_numeral(token: &str) -> bool {
    !token.is_empty() && ROMAN_NUMERAL.is_match(&token.to_uppercase())
}
