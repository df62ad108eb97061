use clap::Parser;

use kana_cli::commands::{table_ops, transliterate_ops};
use kana_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(
    name = "kana",
    about = "Convert katakana and hiragana to romaji, leaving everything else unchanged"
)]
struct Cli {
    /// Custom kana table (TOML) to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    table: Option<String>,
    /// Print the built-in kana table as TOML and exit
    #[arg(long, conflicts_with_all = ["validate_table", "text"])]
    export_table: bool,
    /// Validate a kana table TOML file and exit
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    validate_table: Option<String>,
    /// Text to convert; read from standard input when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    if cli.export_table {
        table_ops::table_export();
        return;
    }
    if let Some(file) = cli.validate_table {
        table_ops::table_validate(&file);
        return;
    }
    if let Some(file) = cli.table {
        table_ops::table_load(&file);
    }
    transliterate_ops::transliterate_cmd(&cli.text);
}
