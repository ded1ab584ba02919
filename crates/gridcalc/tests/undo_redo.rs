//! Tests for recorded edits with undo and redo

use gridcalc::prelude::*;
use pretty_assertions::assert_eq;

fn text(sheet: &Spreadsheet, name: &str) -> String {
    sheet.cell_by_name(name).unwrap().text().to_string()
}

fn value(sheet: &Spreadsheet, name: &str) -> Option<String> {
    sheet
        .cell_by_name(name)
        .unwrap()
        .value()
        .map(str::to_string)
}

/// Test that undo and redo round-trip text
#[test]
fn test_text_round_trip() {
    let mut sheet = Spreadsheet::new(5, 5);
    sheet.edit_cell_text(0, 0, "1").unwrap();
    sheet.edit_cell_text(0, 0, "2").unwrap();
    sheet.edit_cell_text(0, 0, "3").unwrap();
    assert_eq!(sheet.undo_count(), 3);

    assert_eq!(sheet.undo().unwrap(), 2);
    assert_eq!(text(&sheet, "A1"), "2");
    assert_eq!(sheet.undo().unwrap(), 1);
    assert_eq!(sheet.undo().unwrap(), 0);
    assert_eq!(text(&sheet, "A1"), "");
    assert_eq!(value(&sheet, "A1"), None);
    assert_eq!(sheet.redo_count(), 3);

    assert_eq!(sheet.redo().unwrap(), 2);
    assert_eq!(text(&sheet, "A1"), "1");
    assert_eq!(sheet.redo().unwrap(), 1);
    assert_eq!(sheet.redo().unwrap(), 0);
    assert_eq!(text(&sheet, "A1"), "3");
    assert_eq!(sheet.undo_count(), 3);
}

/// Test that undo recalculates dependents
#[test]
fn test_undo_recalculates() {
    let mut sheet = Spreadsheet::new(5, 5);
    sheet.edit_cell_text(0, 0, "10").unwrap();
    sheet.edit_cell_text(0, 1, "13").unwrap();
    sheet.edit_cell_text(0, 2, "=A1+B1").unwrap();
    sheet.edit_cell_text(0, 0, "4").unwrap();
    assert_eq!(value(&sheet, "C1"), Some("17".into()));

    sheet.undo().unwrap();
    assert_eq!(value(&sheet, "C1"), Some("23".into()));

    sheet.redo().unwrap();
    assert_eq!(value(&sheet, "C1"), Some("17".into()));
}

/// Test that undo and redo round-trip a color batch
#[test]
fn test_color_round_trip() {
    let mut sheet = Spreadsheet::new(5, 5);
    let cells = [CellAddress::new(0, 0), CellAddress::new(1, 1)];

    sheet.edit_cell_color(&cells, Color::RED).unwrap();
    sheet.edit_cell_color(&cells, Color::BLUE).unwrap();

    assert_eq!(sheet.undo().unwrap(), 1);
    assert_eq!(sheet.cell(1, 1).unwrap().bg_color(), Color::RED);
    assert_eq!(sheet.undo().unwrap(), 0);
    assert_eq!(sheet.cell(0, 0).unwrap().bg_color(), Color::WHITE);
    assert_eq!(sheet.cell(1, 1).unwrap().bg_color(), Color::WHITE);

    assert_eq!(sheet.redo().unwrap(), 1);
    assert_eq!(sheet.cell(1, 1).unwrap().bg_color(), Color::RED);
    assert_eq!(sheet.redo().unwrap(), 0);
    assert_eq!(sheet.cell(0, 0).unwrap().bg_color(), Color::BLUE);
}

/// Test undoing a batch that started with mixed colors
#[test]
fn test_mixed_color_batch_reverts_to_first() {
    let mut sheet = Spreadsheet::new(5, 5);
    sheet.set_cell_color(0, 1, Color::GREEN).unwrap();

    let cells = [CellAddress::new(0, 0), CellAddress::new(0, 1)];
    sheet.edit_cell_color(&cells, Color::BLACK).unwrap();
    sheet.undo().unwrap();

    assert_eq!(sheet.cell(0, 0).unwrap().bg_color(), Color::WHITE);
    assert_eq!(sheet.cell(0, 1).unwrap().bg_color(), Color::WHITE);
}

/// Test that a new edit discards the redo branch
#[test]
fn test_new_edit_clears_redo() {
    let mut sheet = Spreadsheet::new(5, 5);
    sheet.edit_cell_text(0, 0, "a").unwrap();
    sheet.edit_cell_text(0, 0, "b").unwrap();
    sheet.undo().unwrap();
    assert_eq!(sheet.redo_count(), 1);

    sheet.edit_cell_text(1, 0, "c").unwrap();
    assert_eq!(sheet.redo_count(), 0);
    assert_eq!(sheet.redo().unwrap(), 0);
    assert_eq!(text(&sheet, "A1"), "a");
}

/// Test the history limit
#[test]
fn test_history_limit() {
    let mut sheet = Spreadsheet::with_options(SheetOptions::with_size(5, 5).history_limit(2));
    for text in ["1", "2", "3", "4"] {
        sheet.edit_cell_text(0, 0, text).unwrap();
    }
    assert_eq!(sheet.undo_count(), 2);

    sheet.undo().unwrap();
    sheet.undo().unwrap();
    assert_eq!(sheet.undo().unwrap(), 0);
    assert_eq!(text(&sheet, "A1"), "2");
}

/// Test undoing back to a formula that fails
#[test]
fn test_undo_to_failing_formula() {
    let mut sheet = Spreadsheet::new(2, 2);
    assert!(sheet.edit_cell_text(0, 0, "=Z1+1").is_err());
    assert_eq!(sheet.undo_count(), 1);

    sheet.edit_cell_text(0, 0, "ok").unwrap();
    let err = sheet.undo().unwrap_err();
    assert!(err.is_committed());
    assert_eq!(text(&sheet, "A1"), "=Z1+1");
    assert_eq!(value(&sheet, "A1"), Some(REF_ERROR.into()));
    assert_eq!(sheet.undo_count(), 1);
    assert_eq!(sheet.redo_count(), 1);
}
