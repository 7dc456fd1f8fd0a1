//! Line loop: REPL (rustyline) and pipe modes.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use rolodex::prelude::*;

const PROMPT: &str = "rolodex> ";

/// Interactive loop with history. Returns the process exit code.
pub fn run_repl(session: &mut Session, storage: &StorageFile) -> i32 {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start line editor: {}", e);
            return 1;
        }
    };
    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                if dispatch_line(&line, session, storage) {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("Input error: {}", e);
                return 1;
            }
        }
    }
}

/// Non-interactive loop over stdin lines. Returns the process exit code.
pub fn run_pipe(session: &mut Session, storage: &StorageFile) -> i32 {
    use std::io::BufRead;

    for line in std::io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if dispatch_line(&line, session, storage) {
                    return 0;
                }
            }
            Err(e) => {
                eprintln!("Input error: {}", e);
                return 1;
            }
        }
    }
    0
}

/// Parse, execute, print and persist one line. Returns `true` when the
/// command asks the loop to stop.
fn dispatch_line(line: &str, session: &mut Session, storage: &StorageFile) -> bool {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(e) => {
            println!("{}", e);
            return false;
        }
    };
    let exiting = command.is_exit();
    let result = session.execute(&command);
    println!("{}", result.feedback);
    if let Some(displayed) = &result.displayed {
        print_displayed(displayed);
    }
    if let Err(e) = storage.save(session.address_book()) {
        eprintln!("Failed to save address book: {}", e);
    }
    exiting
}

/// Render the displayed list the way index-addressed commands expect it:
/// 1-based, private fields hidden.
fn print_displayed(displayed: &[Person]) {
    for (position, person) in displayed.iter().enumerate() {
        println!(
            "\t{}. {}",
            position + DISPLAYED_INDEX_OFFSET,
            person.as_text_hide_private()
        );
    }
}
