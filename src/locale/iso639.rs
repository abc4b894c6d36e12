// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 code validation for catalog locales.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

/// Two-letter codes, sorted for binary search.
const ISO_639_1: &[&str] = &[
    "aa", "ab", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az",
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs",
    "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy",
    "da", "de", "dv", "dz",
    "ee", "el", "en", "eo", "es", "et", "eu",
    "fa", "ff", "fi", "fj", "fo", "fr", "fy",
    "ga", "gd", "gl", "gn", "gu", "gv",
    "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu",
    "ja", "jv",
    "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky",
    "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv",
    "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my",
    "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny",
    "oc", "oj", "om", "or", "os",
    "pa", "pi", "pl", "ps", "pt",
    "qu",
    "rm", "rn", "ro", "ru", "rw",
    "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw",
    "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty",
    "ug", "uk", "ur", "uz",
    "ve", "vi", "vo",
    "wa", "wo",
    "xh",
    "yi", "yo",
    "za", "zh", "zu",
];

/// Validates whether a string is a known ISO 639-1 two-letter language code.
///
/// Codes must be lowercase.
///
/// # Examples
/// ```
/// assert!(flag_catalog::locale::is_valid_iso639_1("no"));
/// assert!(!flag_catalog::locale::is_valid_iso639_1("xx"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO_639_1.binary_search(&code).is_ok()
}

/// English name of a language code, for console output.
///
/// Only covers the languages the quiz has shipped or been asked for.
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "no" | "nb" => Some("Norwegian"),
        "nn" => Some("Norwegian Nynorsk"),
        "sv" => Some("Swedish"),
        "da" => Some("Danish"),
        "fi" => Some("Finnish"),
        "de" => Some("German"),
        "fr" => Some("French"),
        "es" => Some("Spanish"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(ISO_639_1.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn valid_codes_accepted() {
        assert!(is_valid_iso639_1("en"));
        assert!(is_valid_iso639_1("no"));
        assert!(is_valid_iso639_1("nb"));
        assert!(is_valid_iso639_1("zu"));
    }

    #[test]
    fn invalid_codes_rejected() {
        assert!(!is_valid_iso639_1("xx"));
        assert!(!is_valid_iso639_1(""));
        assert!(!is_valid_iso639_1("nor"));
        assert!(!is_valid_iso639_1("NO"));
    }

    #[test]
    fn language_names_resolve() {
        assert_eq!(language_name("no"), Some("Norwegian"));
        assert_eq!(language_name("xx"), None);
    }
}
