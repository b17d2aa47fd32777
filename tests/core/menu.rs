// tests/core/menu.rs
use std::io::Cursor;
use std::path::Path;

use simple_encrypt::key_file::read_key_from_file;
use simple_encrypt::menu::{prompt_line, run_menu, MenuChoice, MenuInputError};

fn run_menu_with(input: &[u8], default_path: &Path) -> String {
    let mut output = Vec::new();
    run_menu(&mut Cursor::new(input), &mut output, default_path).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_menu_choices_parse() {
    assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::GenerateAndDisplay));
    assert_eq!(" 2 ".parse::<MenuChoice>(), Ok(MenuChoice::GenerateAndSave));
    assert_eq!("3\n".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
}

#[test]
fn test_out_of_range_numbers_are_rejected() {
    for input in ["0", "4", "-1", "99"] {
        assert!(
            matches!(input.parse::<MenuChoice>(), Err(MenuInputError::OutOfRange(_))),
            "{input}"
        );
    }
}

#[test]
fn test_non_numeric_input_is_rejected() {
    for input in ["", "one", "1.5", "2a"] {
        assert_eq!(
            input.parse::<MenuChoice>(),
            Err(MenuInputError::NotANumber(input.to_string()))
        );
    }
}

#[test]
fn test_prompt_line_strips_only_the_line_terminator() {
    let mut input = Cursor::new("  keys/a.key \r\nsecond\n");
    let mut output = Vec::new();

    let line = prompt_line(&mut input, &mut output, "path: ").unwrap();
    assert_eq!(line.as_deref(), Some("  keys/a.key "));
    assert_eq!(output, b"path: ");

    let line = prompt_line(&mut input, &mut output, "again: ").unwrap();
    assert_eq!(line.as_deref(), Some("second"));
}

#[test]
fn test_prompt_line_reports_closed_input() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    assert_eq!(prompt_line(&mut input, &mut output, "> ").unwrap(), None);
}

#[test]
fn test_menu_survives_bad_lines_and_exits_on_3() {
    let output = run_menu_with(b"\xFF\nabc\n7\n3\n", Path::new("unused.key"));

    assert_eq!(
        output
            .matches("Invalid input. Please enter a number between 1 and 3.")
            .count(),
        2
    );
    assert_eq!(
        output
            .matches("Invalid choice. Please enter a number between 1 and 3.")
            .count(),
        1
    );
    // Menu shown once per line read
    assert_eq!(output.matches("Choose an option:").count(), 4);
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_menu_ends_when_input_closes() {
    let output = run_menu_with(b"1\n", Path::new("unused.key"));

    assert!(output.contains("Length: 32 bytes (256 bits)"));
    assert_eq!(output.matches("Choose an option:").count(), 2);
    assert!(!output.contains("Goodbye!"));
}

#[test]
fn test_menu_saves_key_to_entered_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.key");
    let input = format!("2\n{}\n3\n", path.display());

    let output = run_menu_with(input.as_bytes(), Path::new("unused.key"));

    assert!(output.contains("Key successfully saved to: "));
    assert_eq!(read_key_from_file(&path).unwrap().expose_secret().len(), 32);
}

#[test]
fn test_menu_uses_default_path_on_blank_answer() {
    let dir = tempfile::tempdir().unwrap();
    let default_path = dir.path().join("default.key");

    let output = run_menu_with(b"2\n   \n3\n", &default_path);

    assert!(output.contains(&format!("(default: {})", default_path.display())));
    assert!(read_key_from_file(&default_path).is_ok());
}

#[test]
fn test_menu_reports_save_failure_and_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    let bad_path = dir.path().join("missing/dir/key.key");
    let input = format!("2\n{}\n3\n", bad_path.display());

    let output = run_menu_with(input.as_bytes(), Path::new("unused.key"));

    assert!(output.contains("Error saving key: IO error"));
    assert!(output.trim_end().ends_with("Goodbye!"));
}
