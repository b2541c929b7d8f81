use hrdash::errors::AppError;
use hrdash::export::{ExportFormat, ExportLogic};
use hrdash::models::department::Department;
use std::fs;
use std::io::Cursor;

mod common;
use common::{employee, temp_out};

fn existing_file(name: &str, ext: &str) -> String {
    let out = temp_out(name, ext);
    fs::write(&out, "keep me").expect("seed existing file");
    out
}

#[test]
fn test_existing_file_kept_when_answer_is_no() {
    let out = existing_file("export_answer_no", "json");
    let ann = employee(7, "Ann", "Lee", Department::Sales, 3.9);

    let err = ExportLogic::export_bookmarks_with(
        &[&ann],
        ExportFormat::Json,
        &out,
        false,
        &mut Cursor::new("n\n"),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Export(_)));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_existing_file_kept_on_end_of_input() {
    let out = existing_file("export_answer_eof", "csv");
    let ann = employee(7, "Ann", "Lee", Department::Sales, 3.9);

    let result = ExportLogic::export_bookmarks_with(
        &[&ann],
        ExportFormat::Csv,
        &out,
        false,
        &mut Cursor::new(""),
    );

    assert!(matches!(result, Err(AppError::Export(_))));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_existing_file_replaced_when_answer_is_yes() {
    let out = existing_file("export_answer_yes", "json");
    let ann = employee(7, "Ann", "Lee", Department::Sales, 3.9);

    ExportLogic::export_bookmarks_with(
        &[&ann],
        ExportFormat::Json,
        &out,
        false,
        &mut Cursor::new(" YES \n"),
    )
    .unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("\"firstName\": \"Ann\""));
}

#[test]
fn test_force_skips_the_question() {
    let out = existing_file("export_force", "csv");
    let ann = employee(7, "Ann", "Lee", Department::Sales, 3.9);

    // nothing to read: force must not ask
    ExportLogic::export_bookmarks_with(&[&ann], ExportFormat::Csv, &out, true, &mut Cursor::new(""))
        .unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("id,first_name,last_name"));
    assert!(content.contains("7,Ann,Lee"));
}

#[test]
fn test_new_file_needs_no_answer() {
    let out = temp_out("export_new_file", "json");

    let path = ExportLogic::export_bookmarks_with(&[], ExportFormat::Json, &out, false, &mut Cursor::new(""))
        .unwrap();

    assert_eq!(fs::read_to_string(path).unwrap().trim(), "[]");
}
