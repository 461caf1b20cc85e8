use super::protocols::{ProtocolRegistry, WWW_MARKER};
use super::types::MarkerMatch;

/// Locate the first registered marker inside `token`, falling back to `www.`.
///
/// Matching ignores ASCII case; the returned candidate keeps the token's own
/// casing and drops anything glued on before the marker. Scheme markers win
/// over `www.` so that `http://www.example.com` is never treated as bare.
pub fn match_marker<'a>(token: &'a str, registry: &ProtocolRegistry) -> Option<MarkerMatch<'a>> {
    // ASCII lowering keeps byte offsets identical to the original token.
    let lowered = token.to_ascii_lowercase();

    for marker in registry.iter().filter(|m| !m.is_empty()) {
        if let Some(start) = lowered.find(&marker.to_ascii_lowercase()) {
            return Some(MarkerMatch {
                candidate: &token[start..],
                bare_www: false,
            });
        }
    }

    lowered.find(WWW_MARKER).map(|start| MarkerMatch {
        candidate: &token[start..],
        bare_www: true,
    })
}
