use std::path::{Path, PathBuf};

/// Normalize locale identifiers to the underscore form Qt catalogs use
/// for file names and `language` attributes.
///
/// - Converts `-` to `_` (platforms often report `es-ES`).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('-', "_")
}

/// Candidate locale tags for catalog resolution, most specific first.
///
/// Example:
/// - `es_ES` -> `["es_ES", "es"]`
/// - `fr` -> `["fr"]`
pub fn locale_fallback_chain(locale: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    let mut chain = Vec::new();

    if !l.is_empty() {
        chain.push(l.clone());
        if let Some(lang) = l.split('_').next() {
            if !lang.is_empty() && lang != l {
                chain.push(lang.to_string());
            }
        }
    }

    chain
}

/// Candidate catalog files for a locale, most specific first:
/// `<dir>/<base>_<tag>.ts` for each tag in the fallback chain.
pub fn catalog_file_candidates(dir: &Path, base: &str, locale: &str) -> Vec<PathBuf> {
    locale_fallback_chain(locale)
        .into_iter()
        .map(|tag| dir.join(format!("{base}_{tag}.ts")))
        .collect()
}
