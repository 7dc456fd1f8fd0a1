//! Raw command text → validated command.
//!
//! Input is one line: a command word followed by positional arguments.
//! Contact fields are introduced by prefix markers (`p/PHONE`, `e/EMAIL`,
//! `a/ADDRESS`, `t/TAG`); prepending `p` to a marker (`pp/`, `pe/`, `pa/`)
//! marks that field private. Name and address may span several words; the
//! scanner appends unmarked tokens to whichever field is currently open.
//!
//! Parsing failures surface as
//! [`Error::InvalidCommand`](crate::Error::InvalidCommand) carrying the
//! relevant usage text; field validation failures surface as
//! [`Error::InvalidFormat`](crate::Error::InvalidFormat). An unknown
//! command word parses to `help`.

use crate::commands::{
    AddCommand, ClearCommand, Command, DeleteCommand, ExitCommand, FindCommand, HelpCommand,
    ListCommand, UpdateCommand, ViewCommand,
};
use crate::error::{Error, Result};

/// Parse one line of user input into a command.
pub fn parse_command(line: &str) -> Result<Command> {
    let trimmed = line.trim();
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };
    match word {
        AddCommand::COMMAND_WORD => parse_add(args),
        UpdateCommand::COMMAND_WORD => parse_update(args),
        DeleteCommand::COMMAND_WORD => parse_delete(args),
        ClearCommand::COMMAND_WORD => Ok(Command::Clear(ClearCommand)),
        FindCommand::COMMAND_WORD => parse_find(args),
        ListCommand::COMMAND_WORD => Ok(Command::List(ListCommand)),
        ViewCommand::COMMAND_WORD => parse_view(args, false),
        ViewCommand::COMMAND_WORD_ALL => parse_view(args, true),
        ExitCommand::COMMAND_WORD => Ok(Command::Exit(ExitCommand)),
        // "help", the empty line and unknown words all show usage.
        _ => Ok(Command::Help(HelpCommand)),
    }
}

/// Raw person arguments scanned out of command text, before validation.
#[derive(Debug, Default)]
struct RawPersonArgs {
    name: String,
    phone: String,
    phone_private: bool,
    phone_seen: bool,
    email: String,
    email_private: bool,
    email_seen: bool,
    address: String,
    address_private: bool,
    address_seen: bool,
    tags: Vec<String>,
}

#[derive(Clone, Copy)]
enum OpenField {
    Name,
    Phone,
    Email,
    Address,
    Tag,
}

fn parse_person_args(args: &str, usage: &str) -> Result<RawPersonArgs> {
    let mut out = RawPersonArgs::default();
    let mut open = OpenField::Name;
    for token in args.split_whitespace() {
        // Longer privacy-prefixed markers first.
        if let Some(rest) = token.strip_prefix("pp/") {
            out.phone = rest.to_string();
            out.phone_private = true;
            out.phone_seen = true;
            open = OpenField::Phone;
        } else if let Some(rest) = token.strip_prefix("pe/") {
            out.email = rest.to_string();
            out.email_private = true;
            out.email_seen = true;
            open = OpenField::Email;
        } else if let Some(rest) = token.strip_prefix("pa/") {
            out.address = rest.to_string();
            out.address_private = true;
            out.address_seen = true;
            open = OpenField::Address;
        } else if let Some(rest) = token.strip_prefix("p/") {
            out.phone = rest.to_string();
            out.phone_seen = true;
            open = OpenField::Phone;
        } else if let Some(rest) = token.strip_prefix("e/") {
            out.email = rest.to_string();
            out.email_seen = true;
            open = OpenField::Email;
        } else if let Some(rest) = token.strip_prefix("a/") {
            out.address = rest.to_string();
            out.address_seen = true;
            open = OpenField::Address;
        } else if let Some(rest) = token.strip_prefix("t/") {
            out.tags.push(rest.to_string());
            open = OpenField::Tag;
        } else {
            match open {
                OpenField::Name => push_word(&mut out.name, token),
                OpenField::Phone => push_word(&mut out.phone, token),
                OpenField::Email => push_word(&mut out.email, token),
                OpenField::Address => push_word(&mut out.address, token),
                // A bare word after a tag is not part of any field.
                OpenField::Tag => {
                    return Err(Error::InvalidCommand {
                        usage: usage.to_string(),
                    })
                }
            }
        }
    }
    if out.name.is_empty() || !out.phone_seen || !out.email_seen || !out.address_seen {
        return Err(Error::InvalidCommand {
            usage: usage.to_string(),
        });
    }
    Ok(out)
}

fn push_word(buffer: &mut String, word: &str) {
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(word);
}

fn parse_index(token: &str, usage: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| Error::InvalidCommand {
        usage: usage.to_string(),
    })
}

fn parse_sole_index(args: &str, usage: &str) -> Result<i64> {
    let mut tokens = args.split_whitespace();
    let token = tokens.next().ok_or_else(|| Error::InvalidCommand {
        usage: usage.to_string(),
    })?;
    if tokens.next().is_some() {
        return Err(Error::InvalidCommand {
            usage: usage.to_string(),
        });
    }
    parse_index(token, usage)
}

fn parse_add(args: &str) -> Result<Command> {
    let usage = AddCommand::usage();
    let raw = parse_person_args(args, &usage)?;
    let command = AddCommand::new(
        &raw.name,
        &raw.phone,
        raw.phone_private,
        &raw.email,
        raw.email_private,
        &raw.address,
        raw.address_private,
        &raw.tags,
    )?;
    Ok(Command::Add(command))
}

fn parse_update(args: &str) -> Result<Command> {
    let usage = UpdateCommand::usage();
    let (index_token, rest) = args
        .split_once(char::is_whitespace)
        .ok_or_else(|| Error::InvalidCommand {
            usage: usage.clone(),
        })?;
    let target_index = parse_index(index_token, &usage)?;
    let raw = parse_person_args(rest.trim(), &usage)?;
    let command = UpdateCommand::new(
        target_index,
        &raw.name,
        &raw.phone,
        raw.phone_private,
        &raw.email,
        raw.email_private,
        &raw.address,
        raw.address_private,
        &raw.tags,
    )?;
    Ok(Command::Update(command))
}

fn parse_delete(args: &str) -> Result<Command> {
    let target_index = parse_sole_index(args, &DeleteCommand::usage())?;
    Ok(Command::Delete(DeleteCommand::new(target_index)))
}

fn parse_view(args: &str, show_private: bool) -> Result<Command> {
    let target_index = parse_sole_index(args, &ViewCommand::usage())?;
    Ok(Command::View(ViewCommand::new(target_index, show_private)))
}

fn parse_find(args: &str) -> Result<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(String::from).collect();
    if keywords.is_empty() {
        return Err(Error::InvalidCommand {
            usage: FindCommand::usage(),
        });
    }
    Ok(Command::Find(FindCommand::new(keywords)))
}
