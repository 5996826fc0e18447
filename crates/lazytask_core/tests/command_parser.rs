use chrono::{NaiveDate, NaiveDateTime};
use lazytask_core::{parse_command, Command, ErrorKind, TaskKind};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn parse_error(input: &str, task_count: usize) -> (ErrorKind, String) {
    let err = parse_command(input, task_count).unwrap_err();
    (err.kind(), err.message().to_string())
}

#[test]
fn simple_keywords_are_case_insensitive_except_list() {
    assert_eq!(parse_command("BYE", 0).unwrap(), Command::Bye);
    assert_eq!(parse_command("Help", 0).unwrap(), Command::Help);
    assert_eq!(parse_command("uNdo", 0).unwrap(), Command::Undo);
    assert_eq!(parse_command("list", 0).unwrap(), Command::List);
    assert_eq!(parse_command("  list  ", 0).unwrap(), Command::List);

    let (kind, message) = parse_error("LIST", 0);
    assert_eq!(kind, ErrorKind::Parse);
    assert!(message.contains("don't recognise that command"));
}

#[test]
fn todo_takes_trimmed_description() {
    let Command::Add(task) = parse_command("todo   read book  ", 0).unwrap() else {
        panic!("expected add command");
    };
    assert_eq!(task.description(), "read book");
    assert_eq!(task.render(), "[T][ ] read book");
}

#[test]
fn todo_without_description_fails() {
    for input in ["todo", "todo    "] {
        let (kind, message) = parse_error(input, 0);
        assert_eq!(kind, ErrorKind::Parse);
        assert!(message.contains("description of a todo cannot be empty"));
    }
}

#[test]
fn deadline_parses_description_and_date() {
    let Command::Add(task) = parse_command("deadline buy milk /by 2019-10-15 1800", 0).unwrap()
    else {
        panic!("expected add command");
    };
    assert_eq!(task.description(), "buy milk");
    assert_eq!(
        task.kind(),
        &TaskKind::Deadline {
            by: at(2019, 10, 15, 18, 0)
        }
    );
}

#[test]
fn deadline_errors_are_specific() {
    let (_, missing_by) = parse_error("deadline return book 2019-10-15 1800", 0);
    assert!(missing_by.contains("deadline <description> /by <yyyy-MM-dd HHmm>"));

    let (_, empty_desc) = parse_error("deadline /by 2019-10-15 1800", 0);
    assert!(empty_desc.contains("description of a deadline cannot be empty"));

    let (_, empty_by) = parse_error("deadline return book /by   ", 0);
    assert!(empty_by.contains("/by part of a deadline cannot be empty"));

    let (_, bad_date) = parse_error("deadline return book /by 2019/10/15 1800", 0);
    assert!(bad_date.contains("yyyy-MM-dd HHmm"));
}

#[test]
fn deadline_keyword_alone_is_a_format_error() {
    let (kind, message) = parse_error("deadline", 0);
    assert_eq!(kind, ErrorKind::Parse);
    assert!(message.contains("deadline format should be"));
}

#[test]
fn event_parses_both_dates() {
    let Command::Add(task) = parse_command(
        "event project meeting /from 2019-10-15 1400 /to 2019-10-15 1600",
        0,
    )
    .unwrap() else {
        panic!("expected add command");
    };
    assert_eq!(task.description(), "project meeting");
    assert_eq!(
        task.kind(),
        &TaskKind::Event {
            from: at(2019, 10, 15, 14, 0),
            to: at(2019, 10, 15, 16, 0),
        }
    );
}

#[test]
fn event_end_before_start_is_rejected() {
    let (kind, message) = parse_error("event trip /from 2019-10-15 1600 /to 2019-10-15 1400", 0);
    assert_eq!(kind, ErrorKind::Parse);
    assert!(message.contains("end time must be after start time"));
}

#[test]
fn event_separators_must_be_present_and_ordered() {
    for input in [
        "event trip /from 2019-10-15 1400",
        "event trip /to 2019-10-15 1400",
        "event trip /to 2019-10-15 1600 /from 2019-10-15 1400",
    ] {
        let (_, message) = parse_error(input, 0);
        assert!(message.contains("event format should be"), "input: {input}");
    }
}

#[test]
fn event_empty_parts_have_dedicated_errors() {
    let (_, message) = parse_error("event /from 2019-10-15 1400 /to 2019-10-15 1600", 0);
    assert!(message.contains("description of an event cannot be empty"));

    let (_, message) = parse_error("event trip /from   /to 2019-10-15 1600", 0);
    assert!(message.contains("/from part"));

    let (_, message) = parse_error("event trip /from 2019-10-15 1400 /to ", 0);
    assert!(message.contains("/to part"));
}

#[test]
fn index_commands_accept_numbers_in_range() {
    assert_eq!(parse_command("mark 2", 5).unwrap(), Command::Mark { index: 2 });
    assert_eq!(
        parse_command("UNMARK  5 ", 5).unwrap(),
        Command::Unmark { index: 5 }
    );
    assert_eq!(
        parse_command("delete 1", 1).unwrap(),
        Command::Delete { index: 1 }
    );
}

#[test]
fn index_out_of_range_points_to_list() {
    for input in ["mark 9", "mark 0", "mark -1"] {
        let (kind, message) = parse_error(input, 3);
        assert_eq!(kind, ErrorKind::Range);
        assert!(message.contains("out of range"), "input: {input}");
        assert!(message.contains("'list'"), "input: {input}");
    }
}

#[test]
fn index_missing_or_non_numeric_fails() {
    let (kind, message) = parse_error("delete", 3);
    assert_eq!(kind, ErrorKind::Range);
    assert!(message.contains("please provide a task number for delete"));

    let (kind, message) = parse_error("unmark two", 3);
    assert_eq!(kind, ErrorKind::Range);
    assert!(message.contains("must be an integer"));
}

#[test]
fn find_requires_keyword() {
    assert_eq!(
        parse_command("FIND  Meeting ", 0).unwrap(),
        Command::Find {
            keyword: "Meeting".to_string()
        }
    );
    let (kind, message) = parse_error("find   ", 0);
    assert_eq!(kind, ErrorKind::Parse);
    assert!(message.contains("keyword"));
}

#[test]
fn unknown_input_names_supported_commands() {
    let (kind, message) = parse_error("blah blah", 0);
    assert_eq!(kind, ErrorKind::Parse);
    assert!(message.contains("don't recognise that command"));
    assert!(message.contains("deadline"));
    assert!(message.contains("undo"));
}

#[test]
fn pipe_in_description_is_a_parse_error() {
    for input in [
        "todo a|b",
        "deadline pay A|B /by 2019-10-15 1800",
        "event x | y /from 2019-10-15 1400 /to 2019-10-15 1600",
    ] {
        let (kind, message) = parse_error(input, 0);
        assert_eq!(kind, ErrorKind::Parse, "input: {input}");
        assert!(message.contains("cannot contain '|'"), "input: {input}");
    }
}

#[test]
fn mutating_flag_matches_command_set() {
    assert!(parse_command("todo a", 0).unwrap().is_mutating());
    assert!(parse_command("mark 1", 1).unwrap().is_mutating());
    assert!(!parse_command("list", 0).unwrap().is_mutating());
    assert!(!parse_command("undo", 0).unwrap().is_mutating());
    assert!(!parse_command("find a", 0).unwrap().is_mutating());
}
