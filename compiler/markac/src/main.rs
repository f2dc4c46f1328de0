//! Marka CLI
//!
//! Thin driver around `marka_lexer`: scans a file and prints or dumps the
//! token stream.
//!
//! # Tracing
//!
//! - `RUST_LOG=marka_lexer=debug`: resets, end of input, token counts.
//! - `RUST_LOG=marka_lexer=trace`: every emitted token.
//! - `MARKA_LOG_TREE=1`: render spans as an indented tree.

mod commands;

use commands::{dump_file, lex_file};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: marka lex <file>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "dump" => {
            let mut pretty = false;
            let mut path = None;
            for arg in args.iter().skip(2) {
                if arg == "--pretty" || arg == "-p" {
                    pretty = true;
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                }
            }

            let Some(path) = path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: marka dump <file> [--pretty]");
                std::process::exit(1);
            };
            dump_file(path, pretty);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Marka markup scanner");
    println!();
    println!("Usage: marka <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>              Print one line per token");
    println!("  dump <file> [--pretty]  Write the token records as JSON");
    println!("  help                    Show this message");
}

/// Install a subscriber when `RUST_LOG` is set; otherwise stay silent.
///
/// Output goes to stderr so `dump` keeps stdout pure JSON.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let filter = EnvFilter::from_default_env();
    if std::env::var_os("MARKA_LOG_TREE").is_some() {
        tracing_subscriber::registry()
            .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init();
    }
}
