use std::io::{self, Read, Write};

use kana_core::transliterate;

/// Text to transliterate: the words joined by single spaces, or all of
/// `stdin` when there are none.
pub fn read_input<R: Read>(words: &[String], mut stdin: R) -> io::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut buf = String::new();
    stdin.read_to_string(&mut buf)?;
    Ok(buf)
}

pub fn transliterate_cmd(words: &[String]) {
    let input = die!(
        read_input(words, io::stdin().lock()),
        "Error reading standard input: {}"
    );
    let output = transliterate(&input);
    let mut stdout = io::stdout().lock();
    die!(
        stdout
            .write_all(output.as_bytes())
            .and_then(|()| stdout.flush()),
        "Error writing output: {}"
    );
}
