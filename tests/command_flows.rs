//! End-to-end flows through the parser, session and command set.

use rolodex::prelude::*;

fn execute(session: &mut Session, line: &str) -> CommandResult {
    let command = parse_command(line).expect("command text should parse");
    session.execute(&command)
}

#[test]
fn add_list_delete_flow() {
    let mut session = Session::new();

    let result = execute(
        &mut session,
        "add John Doe p/61234567 e/john@doe.com a/395C Ben Road",
    );
    assert!(result.feedback.starts_with("New person added: John Doe"));
    assert_eq!(session.address_book().len(), 1);

    let result = execute(&mut session, "list");
    assert_eq!(result.feedback, "1 persons listed!");
    assert_eq!(session.displayed().len(), 1);

    let result = execute(&mut session, "delete 1");
    assert!(result.feedback.starts_with("Deleted person: John Doe"));
    assert!(session.address_book().is_empty());
}

#[test]
fn adding_a_duplicate_reports_and_keeps_one_copy() {
    let mut session = Session::new();
    execute(
        &mut session,
        "add John Doe p/61234567 e/john@doe.com a/395C Ben Road",
    );
    let result = execute(
        &mut session,
        "add John Doe p/61234567 e/john@doe.com a/395C Ben Road",
    );
    assert_eq!(result.feedback, messages::MESSAGE_DUPLICATE_PERSON);
    assert_eq!(session.address_book().len(), 1);
}

#[test]
fn delete_against_a_stale_displayed_list_reports_not_found() {
    let mut session = Session::new();
    execute(
        &mut session,
        "add John Doe p/61234567 e/john@doe.com a/395C Ben Road",
    );
    execute(&mut session, "list");

    // The book moves on while the displayed list stays.
    session.address_book_mut().clear();
    let result = execute(&mut session, "delete 1");
    assert_eq!(result.feedback, messages::MESSAGE_PERSON_NOT_IN_ADDRESSBOOK);
}

#[test]
fn delete_with_out_of_bounds_index_reports_invalid_index() {
    let mut session = Session::new();
    execute(
        &mut session,
        "add John Doe p/61234567 e/john@doe.com a/395C Ben Road",
    );
    execute(&mut session, "list");

    for line in ["delete 0", "delete -1", "delete 2"] {
        let result = execute(&mut session, line);
        assert_eq!(
            result.feedback,
            messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
            "{line:?} should be out of bounds"
        );
        assert_eq!(session.address_book().len(), 1, "{line:?} must not mutate");
    }
}

#[test]
fn clear_empties_the_book() {
    let mut session = Session::new();
    execute(
        &mut session,
        "add John Doe p/61234567 e/john@doe.com a/395C Ben Road",
    );
    let result = execute(&mut session, "clear");
    assert_eq!(result.feedback, messages::MESSAGE_ADDRESSBOOK_CLEARED);
    assert!(session.address_book().is_empty());
}

#[test]
fn find_matches_whole_name_words_case_sensitively() {
    let mut session = Session::new();
    execute(
        &mut session,
        "add John Doe p/61234567 e/john@doe.com a/395C Ben Road",
    );
    execute(
        &mut session,
        "add Jane Doe p/91234567 e/jane@doe.com a/33G Ohm Road",
    );
    execute(
        &mut session,
        "add David Grant p/61121122 e/david@grant.com a/44H Define Road",
    );

    let result = execute(&mut session, "find Doe");
    assert_eq!(result.feedback, "2 persons listed!");
    assert_eq!(session.displayed().len(), 2);

    // Case-sensitive, whole-word only.
    assert_eq!(execute(&mut session, "find doe").feedback, "0 persons listed!");
    assert_eq!(execute(&mut session, "find Do").feedback, "0 persons listed!");

    let result = execute(&mut session, "find Grant Jane");
    assert_eq!(result.feedback, "2 persons listed!");
}

#[test]
fn find_results_are_addressable_by_index() {
    let mut session = Session::new();
    execute(
        &mut session,
        "add John Doe p/61234567 e/john@doe.com a/395C Ben Road",
    );
    execute(
        &mut session,
        "add David Grant p/61121122 e/david@grant.com a/44H Define Road",
    );

    execute(&mut session, "find Grant");
    let result = execute(&mut session, "delete 1");
    assert!(result.feedback.starts_with("Deleted person: David Grant"));
    assert_eq!(session.address_book().len(), 1);
}

#[test]
fn update_through_the_parser_replaces_the_addressed_entry() {
    let mut session = Session::new();
    execute(
        &mut session,
        "add John Doe p/61234567 e/john@doe.com a/395C Ben Road",
    );
    execute(&mut session, "list");

    let result = execute(
        &mut session,
        "update 1 Johnny Grant p/81234567 e/johnny@grant.com a/12F New Road",
    );
    assert!(result.feedback.starts_with("Updated person: John Doe"));

    let persons = session.address_book().all_persons();
    assert_eq!(persons.len(), 1);
    assert_eq!(persons[0].name().as_str(), "Johnny Grant");
}

#[test]
fn view_hides_private_fields_and_viewall_shows_them() {
    let mut session = Session::new();
    execute(
        &mut session,
        "add John Doe pp/61234567 e/john@doe.com a/395C Ben Road",
    );
    execute(&mut session, "list");

    let viewed = execute(&mut session, "view 1");
    assert!(!viewed.feedback.contains("61234567"), "view must hide private phone");

    let viewed_all = execute(&mut session, "viewall 1");
    assert!(viewed_all.feedback.contains("(private) 61234567"));
}

#[test]
fn view_of_a_stale_entry_reports_not_found() {
    let mut session = Session::new();
    execute(
        &mut session,
        "add John Doe p/61234567 e/john@doe.com a/395C Ben Road",
    );
    execute(&mut session, "list");
    session.address_book_mut().clear();

    let result = execute(&mut session, "view 1");
    assert_eq!(result.feedback, messages::MESSAGE_PERSON_NOT_IN_ADDRESSBOOK);
}

#[test]
fn help_lists_every_command_word() {
    let mut session = Session::new();
    let result = execute(&mut session, "help");
    for word in [
        "add", "update", "delete", "clear", "find", "list", "view", "viewall", "help", "exit",
    ] {
        assert!(result.feedback.contains(word), "help should mention {word:?}");
    }
}

#[test]
fn unknown_command_words_produce_help() {
    let mut session = Session::new();
    let help = execute(&mut session, "help").feedback;
    let unknown = execute(&mut session, "frobnicate").feedback;
    assert_eq!(unknown, help);
}

#[test]
fn exit_signals_the_front_end_and_says_goodbye() {
    let mut session = Session::new();
    let command = parse_command("exit").unwrap();
    assert!(command.is_exit());
    let result = session.execute(&command);
    assert_eq!(result.feedback, messages::MESSAGE_EXITING);
}

#[test]
fn malformed_lines_report_usage_not_panic() {
    for line in [
        "add",
        "add John Doe",
        "add John Doe p/61234567",
        "delete",
        "delete x",
        "update 1",
        "find",
    ] {
        let err = parse_command(line).expect_err(&format!("{line:?} should not parse"));
        match err {
            Error::InvalidCommand { usage } => {
                assert!(!usage.is_empty(), "usage text should accompany {line:?}")
            }
            other => panic!("expected InvalidCommand for {line:?}, got {other:?}"),
        }
    }
}
