fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/mapping/default_mapping.toml",
        include_str!("src/mapping/default_mapping.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
