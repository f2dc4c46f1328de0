//! `lex` and `dump` commands.

use std::fs::File;
use std::io::{self, Write};

use marka_lexer::{LexError, Scanner, TokenRecord};

/// Scan a file and print one line per token.
pub fn lex_file(path: &str) {
    let records = scan_file(path);

    println!("Tokens for '{}' ({} tokens):", path, records.len());
    for record in &records {
        println!("  {}", format_record(record));
    }
}

/// Scan a file and write its records to stdout as JSON.
pub fn dump_file(path: &str, pretty: bool) {
    let records = scan_file(path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_json(&records, pretty, &mut out) {
        eprintln!("error writing tokens: {e}");
        std::process::exit(1);
    }
}

fn scan_file(path: &str) -> Vec<TokenRecord> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            let msg = match e.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                _ => format!("error opening '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    tracing::debug!(path, "scanning");
    match Scanner::from_reader(file).tokenize() {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{}", describe_error(path, &e));
            std::process::exit(1);
        }
    }
}

/// `row:col  KIND  "literal"`, with the raw text appended when it differs.
pub(crate) fn format_record(record: &TokenRecord) -> String {
    let location = record.position.to_string();
    let kind = record.token.kind.to_string();
    let mut line = format!("{location:<8} {kind:<12} {:?}", record.token.literal);
    if record.raw != record.token.literal {
        line.push_str(&format!(" (raw {:?})", record.raw));
    }
    line
}

pub(crate) fn write_json(
    records: &[TokenRecord],
    pretty: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, records)?;
    } else {
        serde_json::to_writer(&mut *out, records)?;
    }
    writeln!(out)
}

/// Error message with the underlying cause, if any.
pub(crate) fn describe_error(path: &str, error: &LexError) -> String {
    let mut msg = format!("error: {path}: {error}");
    if let Some(source) = std::error::Error::source(error) {
        msg.push_str(&format!(": {source}"));
    }
    msg
}
