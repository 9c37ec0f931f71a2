/// Wire format used by [`encode`](super::encode) and [`decode`](super::decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// A JSON object with one numeric field per axis.
    Json,
    /// bincode with its standard configuration. Axes are written positionally.
    Binary,
}

/// Configuration for encoding and decoding plottable records.
#[derive(Debug, Clone)]
pub struct CodecConfig {
    /// Wire format to produce and accept.
    pub format: Format,

    /// Indent JSON output. Ignored for [`Format::Binary`].
    pub pretty: bool,
}

impl Default for CodecConfig {
    /// Compact JSON.
    fn default() -> Self {
        Self {
            format: Format::Json,
            pretty: false,
        }
    }
}

impl CodecConfig {
    pub fn new(format: Format, pretty: bool) -> Self {
        Self { format, pretty }
    }

    /// Compact JSON configuration.
    pub fn json() -> Self {
        Self::default()
    }

    /// Indented JSON configuration.
    pub fn pretty_json() -> Self {
        Self {
            format: Format::Json,
            pretty: true,
        }
    }

    /// Binary configuration.
    pub fn binary() -> Self {
        Self {
            format: Format::Binary,
            pretty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = CodecConfig::default();
        assert_eq!(config.format, Format::Json);
        assert!(!config.pretty);
    }

    #[test]
    fn test_named_configurations() {
        assert_eq!(CodecConfig::json().format, Format::Json);

        let pretty = CodecConfig::pretty_json();
        assert_eq!(pretty.format, Format::Json);
        assert!(pretty.pretty);

        let binary = CodecConfig::binary();
        assert_eq!(binary.format, Format::Binary);
        assert!(!binary.pretty);

        let custom = CodecConfig::new(Format::Binary, true);
        assert_eq!(custom.format, Format::Binary);
        assert!(custom.pretty);
    }

    #[test]
    fn test_clone_and_debug() {
        let config = CodecConfig::pretty_json();
        let cloned = config.clone();
        assert_eq!(config.format, cloned.format);
        assert_eq!(config.pretty, cloned.pretty);

        let debug_string = format!("{:?}", config);
        assert!(debug_string.contains("CodecConfig"));
    }
}
