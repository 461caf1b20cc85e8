use url::Url;

use super::protocols::{PROTO_HTTP, WWW_MARKER};
use crate::error::LinkParseError;

/// Check that a cleaned link is a well-formed URL.
///
/// Only the syntax is checked; the caller keeps its own string rather than the
/// parser's normalized form. A bare `www.` link that was left without a scheme
/// is checked as if it carried `http://`, since `Url` only parses absolute URLs.
pub fn validate_link(link: &str) -> Result<(), LinkParseError> {
    let parsed = if is_bare_www(link) {
        Url::parse(&format!("{PROTO_HTTP}{link}"))
    } else {
        Url::parse(link)
    };

    parsed
        .map(|_| ())
        .map_err(|source| LinkParseError::new(link, source))
}

fn is_bare_www(link: &str) -> bool {
    link.get(..WWW_MARKER.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(WWW_MARKER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_schemes() {
        for link in [
            "https://example.com",
            "http://example.com/a/b?c=d#e",
            "ftp://files.example.com/pub",
            "mailto:someone@example.com",
            "pw://vault/item",
        ] {
            assert!(validate_link(link).is_ok(), "{link} should validate");
        }
    }

    #[test]
    fn accepts_bare_www() {
        assert!(validate_link("www.example.com").is_ok());
        assert!(validate_link("WWW.Example.com/path").is_ok());
    }

    #[test]
    fn rejects_broken_ipv6_host() {
        let err = validate_link("http://[::1").unwrap_err();
        assert_eq!(err.link, "http://[::1");
        assert_eq!(err.source, url::ParseError::InvalidIpv6Address);
    }

    #[test]
    fn rejects_scheme_without_host() {
        let err = validate_link("https:/").unwrap_err();
        assert_eq!(err.link, "https:/");
    }

    #[test]
    fn rejects_bad_port() {
        assert!(validate_link("http://example.com:99999").is_err());
    }

    #[test]
    fn scheme_less_text_is_rejected() {
        let err = validate_link("mailto").unwrap_err();
        assert_eq!(err.source, url::ParseError::RelativeUrlWithoutBase);
    }
}
