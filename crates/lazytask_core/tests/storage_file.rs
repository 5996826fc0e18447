use chrono::{NaiveDate, NaiveDateTime};
use lazytask_core::storage::codec::{decode_line, encode_task};
use lazytask_core::{ErrorKind, FileTaskStore, Task, TaskStore};
use std::fs;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn sample_tasks() -> Vec<Task> {
    let mut done_todo = Task::todo("read book").unwrap();
    done_todo.mark_done();
    vec![
        done_todo,
        Task::deadline("buy milk", at(2019, 10, 15, 18, 0)).unwrap(),
        Task::event(
            "project meeting",
            at(2019, 10, 15, 14, 0),
            at(2019, 10, 15, 16, 0),
        )
        .unwrap(),
    ]
}

#[test]
fn missing_file_loads_as_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileTaskStore::new(dir.path().join("absent.txt"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_writes_one_line_per_task_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    let mut store = FileTaskStore::new(&path);

    store.save(&sample_tasks()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "T | 1 | read book\n\
         D | 0 | buy milk | 2019-10-15T18:00\n\
         E | 0 | project meeting | 2019-10-15T14:00 | 2019-10-15T16:00\n"
    );
}

#[test]
fn save_then_load_reproduces_equal_tasks() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileTaskStore::new(dir.path().join("tasks.txt"));
    let tasks = sample_tasks();

    store.save(&tasks).unwrap();
    assert_eq!(store.load().unwrap(), tasks);
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("data").join("tasks.txt");
    let mut store = FileTaskStore::new(&path);

    store.save(&sample_tasks()).unwrap();
    assert!(path.exists());
    assert!(!path.with_file_name("tasks.txt.tmp").exists());
}

#[test]
fn load_skips_blank_lines_and_tolerates_spacing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    fs::write(&path, "\nT|0|read book\n   \nD |1|  buy milk|2019-10-15T18:00\n").unwrap();

    let tasks = FileTaskStore::new(&path).load().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].render(), "[T][ ] read book");
    assert_eq!(tasks[1].render(), "[D][X] buy milk (by: Oct 15 2019 18:00)");
}

#[test]
fn unknown_type_tag_fails_whole_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.txt");
    fs::write(&path, "T | 0 | fine\nX | 0 | foo\n").unwrap();

    let err = FileTaskStore::new(&path).load().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);
    assert!(err.message().contains("Unknown task type"));
}

#[test]
fn malformed_lines_are_reported() {
    let cases = [
        ("T | 0", "Invalid save line"),
        ("D | 0 | no date", "Invalid deadline line"),
        ("E | 0 | trip | 2019-10-15T14:00", "Invalid event line"),
        ("D | 0 | bad | 15/10/2019", "Invalid date/time"),
        (
            "E | 0 | reversed | 2019-10-15T16:00 | 2019-10-15T14:00",
            "Invalid save line",
        ),
    ];

    for (line, expected) in cases {
        let err = decode_line(line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage, "line: {line}");
        assert!(err.message().contains(expected), "line: {line}: {err}");
    }
}

#[test]
fn encode_matches_decode_for_done_event() {
    let mut task = Task::event("trip", at(2020, 1, 1, 9, 0), at(2020, 1, 3, 17, 30)).unwrap();
    task.mark_done();

    let line = encode_task(&task);
    assert_eq!(line, "E | 1 | trip | 2020-01-01T09:00 | 2020-01-03T17:30");
    assert_eq!(decode_line(&line).unwrap(), task);
}
