use std::fs;
use std::io::{self, Write};

use kana_core::table::{self, KanaTable, TableError};
use tracing::debug;

pub fn table_export() {
    die!(
        write_default_table(io::stdout().lock()),
        "Error writing output: {}"
    );
}

pub fn write_default_table<W: Write>(mut out: W) -> io::Result<()> {
    out.write_all(table::default_toml().as_bytes())?;
    out.flush()
}

pub fn table_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let summary = die!(table_summary(&content), "Error: {}");
    println!("{summary}");
}

/// One-line report for a valid table, e.g. `OK: 148 syllables, 22 modifiers`.
pub fn table_summary(toml_str: &str) -> Result<String, TableError> {
    let t = KanaTable::from_toml(toml_str)?;
    Ok(format!(
        "OK: {} syllables, {} modifiers",
        t.syllable_count(),
        t.modifier_count()
    ))
}

/// Install a custom table for the rest of the process.
pub fn table_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(KanaTable::init_custom(content), "Error loading {file}: {}");
    debug!(file, "custom kana table installed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_default_table() {
        let summary = table_summary(table::default_toml()).unwrap();
        assert_eq!(summary, "OK: 148 syllables, 22 modifiers");
    }

    #[test]
    fn summary_of_custom_table() {
        let toml = r#"
[syllables]
"か" = "ka"

[marks]
"っ" = "hold"
"#;
        assert_eq!(
            table_summary(toml).unwrap(),
            "OK: 1 syllables, 1 modifiers"
        );
    }

    #[test]
    fn summary_rejects_invalid_table() {
        let err = table_summary("[syllables]\n").unwrap_err();
        assert!(matches!(err, TableError::EmptySyllables));
    }

    #[test]
    fn exported_table_round_trips_through_validation() {
        let mut buf = Vec::new();
        write_default_table(&mut buf).unwrap();
        let exported = String::from_utf8(buf).unwrap();
        assert_eq!(exported, table::default_toml());
        assert_eq!(
            table_summary(&exported).unwrap(),
            "OK: 148 syllables, 22 modifiers"
        );
    }
}
