use super::protocols::PROTO_HTTP;

/// U+FFFD, left behind by lossy decoding.
const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Endings that never belong to a URL. Includes U+FFFD as it looks after
/// being decoded as Latin-1 a second time.
const TRAILING_NOISE: [&str; 13] = [
    "\u{FFFD}", "ï¿½", "\"", "'", ":", ";", ".", "`", ",", "*", ">", ")", "]",
];

/// Strip trailing punctuation and decoding artifacts from a candidate link.
///
/// When `synthesize_http` is set the candidate is prefixed with `http://`
/// once, before stripping. Each pass removes the first U+FFFD anywhere in the
/// string and then at most one noise suffix; passes repeat until the string
/// ends cleanly or runs out. A single trailing `/` is dropped at the end.
pub fn clean_link(candidate: &str, synthesize_http: bool) -> String {
    let mut link = if synthesize_http {
        format!("{PROTO_HTTP}{candidate}")
    } else {
        candidate.to_owned()
    };

    // Truncation never introduces a U+FFFD, so stop looking once none is left.
    let mut replacement_left = true;
    loop {
        if replacement_left {
            match link.find(REPLACEMENT_CHAR) {
                Some(pos) => link.replace_range(pos..pos + REPLACEMENT_CHAR.len_utf8(), ""),
                None => replacement_left = false,
            }
        }

        match TRAILING_NOISE.iter().find(|noise| link.ends_with(*noise)) {
            Some(noise) => link.truncate(link.len() - noise.len()),
            None => break,
        }
    }

    if link.ends_with('/') {
        link.pop();
    }
    link
}
