fn main() {
    // Validate the embedded table at compile time.
    validate_toml(
        "src/table/default_kana.toml",
        include_str!("src/table/default_kana.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
