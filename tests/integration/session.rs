//! Session tests against real history files

use termcalc::history::{BackgroundHistory, FileHistory, HistorySink};
use termcalc::repl::{Outcome, Session};

fn output(text: &str) -> Outcome {
    Outcome::Output(text.to_string())
}

#[test]
fn test_session_writes_history_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc").join("history.txt");

    let mut session = Session::new(FileHistory::new(&path));
    assert_eq!(session.handle("2 + 3 * 4"), output("14"));
    assert_eq!(session.handle("ans / 2"), output("7"));
    assert!(matches!(session.handle("1 / 0"), Outcome::Error(_)));
    assert_eq!(session.handle("convert 1 km to m"), output("1 km = 1000 m"));

    let lines = FileHistory::new(&path).load(10);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(" | 2 + 3 * 4 = 14"));
    assert!(lines[1].ends_with(" | ans / 2 = 7"));
    assert!(lines[2].ends_with(" | convert 1 km to m = 1000"));
}

#[test]
fn test_history_command_through_background_writer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.txt");

    let sink: Box<dyn HistorySink> = Box::new(BackgroundHistory::spawn(FileHistory::new(&path)));
    let mut session = Session::new(sink).with_history_limit(2);
    session.handle("1 + 1");
    session.handle("2 + 2");
    session.handle("3 + 3");

    match session.handle("history") {
        Outcome::Output(text) => {
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 3);
            assert_eq!(lines[0], "Calculation History:");
            assert!(lines[1].ends_with("| 2 + 2 = 4"));
            assert!(lines[2].ends_with("| 3 + 3 = 6"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_history_survives_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.txt");

    {
        let mut first = Session::new(BackgroundHistory::spawn(FileHistory::new(&path)));
        first.handle("6 * 7");
    }

    let mut second = Session::new(FileHistory::new(&path));
    match second.handle("HISTORY") {
        Outcome::Output(text) => assert!(text.ends_with("| 6 * 7 = 42"), "{}", text),
        other => panic!("unexpected {:?}", other),
    }
    // `ans` is per session
    assert_eq!(second.handle("ans + 1"), output("1"));
}

#[test]
fn test_errors_do_not_end_session() {
    let mut session = Session::default();
    for line in ["(1 + 2", "sqrt(-1)", "1 & 2", "convert x c to f", "5 % 0"] {
        assert!(matches!(session.handle(line), Outcome::Error(_)), "{}", line);
    }
    assert_eq!(session.handle("1 + 1"), output("2"));
    assert_eq!(session.handle("exit"), Outcome::Exit);
}
