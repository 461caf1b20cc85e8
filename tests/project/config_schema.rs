use linkscanner::LinkScanner;
use linkscanner::config::{Config, OutputFormat};

#[test]
fn empty_config_deserializes_with_defaults() {
    let parsed: Config = toml::from_str("").expect("empty config should deserialize");

    assert!(parsed.scanner.fix_www);
    assert!(parsed.scanner.protocols.is_empty());
    assert_eq!(parsed.output.format, OutputFormat::Text);
    assert!(!parsed.output.indexed);
}

#[test]
fn full_config_deserializes() {
    let toml = r#"
[scanner]
fix_www = false
protocols = ["pw://", "go:"]

[output]
format = "json"
indexed = true
"#;

    let parsed: Config = toml::from_str(toml).expect("full config should deserialize");

    assert!(!parsed.scanner.fix_www);
    assert_eq!(parsed.scanner.protocols, vec!["pw://", "go:"]);
    assert_eq!(parsed.output.format, OutputFormat::Json);
    assert!(parsed.output.indexed);
    assert!(parsed.validate().is_ok());
}

#[test]
fn partial_sections_keep_field_defaults() {
    let toml = r#"
[scanner]
protocols = ["irc://"]
"#;

    let parsed: Config = toml::from_str(toml).expect("partial config should deserialize");
    assert!(parsed.scanner.fix_www);
    assert_eq!(parsed.output.format, OutputFormat::Text);
}

#[test]
fn unknown_format_is_rejected() {
    let toml = r#"
[output]
format = "yaml"
"#;

    assert!(toml::from_str::<Config>(toml).is_err());
}

#[test]
fn config_drives_scanner() {
    let toml = r#"
[scanner]
fix_www = false
protocols = ["irc://"]
"#;

    let parsed: Config = toml::from_str(toml).expect("config should deserialize");
    let scanner = LinkScanner::from_config(&parsed.scanner);

    let found = scanner.scan_links("join irc://irc.example.net/rust or www.example.org.");
    assert_eq!(found.links, vec!["irc://irc.example.net/rust", "www.example.org"]);
}

#[test]
fn serialized_defaults_round_trip_through_toml() {
    let text = Config::default().to_toml().expect("defaults should serialize");
    let parsed: Config = toml::from_str(&text).expect("serialized defaults should parse");
    assert_eq!(parsed.scanner, Config::default().scanner);
    assert_eq!(parsed.output, Config::default().output);
}
