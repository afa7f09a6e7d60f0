//! Javelin CLI.
//!
//! `javelinc parse` runs the table-driven parser over one Java file and
//! prints the resulting tree and problems. `javelinc lex` dumps tokens.
//! Set `RUST_LOG` for parser tracing; `JAVELIN_LOG_TREE=1` renders it as
//! an indented tree.

mod commands;
mod logging;

use commands::{lex_file, parse_file, ParseOptions};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "parse" => {
            let mut options = ParseOptions::default();
            let mut path = None;
            for arg in args.iter().skip(2) {
                if arg.starts_with('-') {
                    if let Err(message) = options.apply(arg) {
                        eprintln!("error: {message}");
                        std::process::exit(2);
                    }
                } else if path.is_none() {
                    path = Some(arg.as_str());
                }
            }
            let Some(path) = path else {
                eprintln!("Usage: javelinc parse <file.java> [options]");
                eprintln!();
                print_parse_options();
                std::process::exit(2);
            };
            let clean = parse_file(path, &options);
            if !clean {
                std::process::exit(1);
            }
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: javelinc lex <file.java>");
                std::process::exit(2);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    println!("Javelin Java parser");
    println!();
    println!("Usage: javelinc <command> [options]");
    println!();
    println!("Commands:");
    println!("  parse <file>   Parse a Java file and print its tree");
    println!("  lex <file>     Print the token stream of a Java file");
    println!("  help           Show this message");
    println!();
    print_parse_options();
}

fn print_parse_options() {
    println!("Parse options:");
    println!("  --diet                    Skip method bodies, then parse them one by one");
    println!("  --source=<level>          Source level, 1.1 through 1.8 (default 1.5)");
    println!("  --no-statement-recovery   Skip bodies instead of recovering their statements");
    println!("  --max-restarts=<n>        Stop recovery after n restarts");
    println!("  --expr                    Parse the file as a single expression");
}
