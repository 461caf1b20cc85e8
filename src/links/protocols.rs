use tracing::debug;

pub const PROTO_HTTPS: &str = "https://";
pub const PROTO_HTTP: &str = "http://";
pub const PROTO_FTP: &str = "ftp://";
pub const PROTO_MAILTO: &str = "mailto:";

/// Not a scheme. Recognized regardless of what the registry holds.
pub const WWW_MARKER: &str = "www.";

pub const DEFAULT_PROTOCOLS: [&str; 4] = [PROTO_HTTPS, PROTO_HTTP, PROTO_FTP, PROTO_MAILTO];

/// Ordered list of scheme markers. Registration order is scan priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolRegistry {
    markers: Vec<String>,
}

impl ProtocolRegistry {
    pub fn new() -> Self {
        Self {
            markers: DEFAULT_PROTOCOLS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Append markers after the existing ones. Shape and duplicates are not checked.
    pub fn extend<I, S>(&mut self, markers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for marker in markers {
            let marker = marker.into();
            debug!(marker = %marker, "registering protocol marker");
            self.markers.push(marker);
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }
}

impl Default for ProtocolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
