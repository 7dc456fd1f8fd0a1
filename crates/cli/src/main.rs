//! Rolodex CLI — interactive front end for the address-book engine.
//!
//! Two modes:
//! - **REPL mode**: `rolodex [flags]` — interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "list" | rolodex` — line-by-line from stdin
//!
//! Every accepted line is parsed into a command, executed against the
//! session, and the whole address book is saved back to the snapshot file.

mod repl;

use std::io::IsTerminal;
use std::process;

use rolodex::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = build_cli().get_matches();
    let path = matches
        .get_one::<String>("db")
        .expect("--db has a default value");

    let storage = match StorageFile::new(path.as_str()) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let book = match storage.load() {
        Ok(book) => book,
        Err(e) => {
            eprintln!("Failed to load address book: {}", e);
            process::exit(1);
        }
    };

    let mut session = Session::with_address_book(book);

    let exit_code = if std::io::stdin().is_terminal() {
        println!(
            "Welcome to Rolodex! {} persons loaded from {}. Type 'help' for usage.",
            session.address_book().len(),
            storage.path().display()
        );
        repl::run_repl(&mut session, &storage)
    } else {
        repl::run_pipe(&mut session, &storage)
    };
    process::exit(exit_code);
}

fn build_cli() -> clap::Command {
    clap::Command::new("rolodex")
        .about("Interactive address book")
        .arg(
            clap::Arg::new("db")
                .long("db")
                .value_name("PATH")
                .help("Path to the address book snapshot (must end in .json)")
                .default_value(StorageFile::DEFAULT_STORAGE_PATH),
        )
}
