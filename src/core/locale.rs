//! Source locale resolution
//!
//! Decides which source locale to hand the translation provider. This is a
//! cheap classification, not language detection: any non-ASCII character is
//! taken as a sign the provider should detect the language itself.

/// Locale sentinel asking the translation provider to detect the language
pub const AUTO_LOCALE: &str = "auto";

/// Target locale used when none is configured or supplied
pub const DEFAULT_TARGET_LOCALE: &str = "en";

/// Resolve the source locale for `text`.
///
/// An explicit preferred locale that differs from the target wins. Otherwise
/// text containing non-ASCII characters resolves to [`AUTO_LOCALE`], and plain
/// ASCII text falls back to the preferred locale or [`AUTO_LOCALE`].
pub fn resolve_source_locale(preferred: &str, target: &str, text: &str) -> String {
    let preferred = Some(preferred.trim()).filter(|p| !p.is_empty());
    let target = Some(target.trim())
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_TARGET_LOCALE);

    if let Some(preferred) = preferred {
        if preferred != target {
            return preferred.to_string();
        }
    }

    if looks_non_ascii(text) {
        return AUTO_LOCALE.to_string();
    }

    preferred.unwrap_or(AUTO_LOCALE).to_string()
}

/// Whether `text` contains anything outside 7-bit ASCII
pub fn looks_non_ascii(text: &str) -> bool {
    !text.is_ascii()
}
