// Pure navigation logic - no engine or shell imports allowed.
// This module contains the address-resolution rule and can be unit tested.

use crate::settings::Settings;

/// Resolves raw address-bar input into a destination the engine can load.
///
/// Precedence:
/// 1. No "." anywhere -> it is a search term; build a search-engine query
///    URL with the input percent-encoded as the `q` parameter.
/// 2. No http(s) scheme -> assume a bare domain; prepend `https://`.
/// 3. Otherwise the input is already a URL and passes through byte-for-byte
///    (no normalization, no trailing-slash rewriting).
///
/// Known quirk, kept on purpose: empty input contains no "." and therefore
/// resolves to a search for the empty string.
pub fn resolve_destination(input: &str, settings: &Settings) -> String {
    if !input.contains('.') {
        return settings.search_engine.query_url(input);
    }
    if !input.starts_with("http://") && !input.starts_with("https://") {
        return format!("https://{}", input);
    }
    input.to_string()
}
