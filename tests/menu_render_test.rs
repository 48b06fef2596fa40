mod common;

use chartwiz::{Command, PageKind};
use common::{press, wizard};

// The caller renders controls from `current_page`: title, ordered rows of
// button descriptors, and the chart flag. These tests pin that surface down.

#[test]
fn test_root_buttons_in_layout_order() {
    let wizard = wizard();
    let root = wizard.current_page().unwrap();
    assert_eq!(root.title, "Chart type");
    assert_eq!(root.kind, PageKind::Category);
    assert!(!root.shows_chart);

    let rows = root.buttons();
    assert_eq!(rows.len(), 3);
    let ids: Vec<&str> = rows[0].iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["bar", "scatter"]);
    let ids: Vec<&str> = rows[1].iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["histogram", "pie"]);
    assert_eq!(rows[2][0].label, "Change data source");
    assert_eq!(rows[2][0].command, Some(Command::ChangeSource));
}

#[test]
fn test_axis_page_lays_columns_two_per_row() {
    let mut wizard = wizard();
    press(&mut wizard, "bar");
    press(&mut wizard, "x");
    let page = wizard.current_page().unwrap();
    let rows = page.buttons();
    // A/B, C, count pseudo-column, back.
    assert_eq!(rows.len(), 4);
    let ids: Vec<&str> = rows[0].iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["A", "B"]);
    assert_eq!(rows[1][0].id, "C");
    assert_eq!(rows[2][0].label, "Count of Y values");
    assert_eq!(rows[3][0].command, Some(Command::Back));
}

#[test]
fn test_kind_page_buttons_show_continue_label() {
    let mut wizard = wizard();
    press(&mut wizard, "bar");
    let bar = wizard.current_page().unwrap();
    let rows = bar.buttons();
    let last_row = rows.last().unwrap();
    assert_eq!(last_row[0].label, "Back");
    assert_eq!(last_row[0].command, Some(Command::Reset));
    assert_eq!(last_row[1].id, "options");
    assert_eq!(last_row[1].label, "Continue");
    assert_eq!(last_row[1].command, None);
}

#[test]
fn test_finish_button_carries_the_validate_command() {
    let mut wizard = wizard();
    press(&mut wizard, "histogram");
    press(&mut wizard, "options");
    let options = wizard.current_page().unwrap();
    assert!(options.shows_chart);
    let rows = options.buttons();
    let finish = rows
        .iter()
        .flatten()
        .find(|button| button.id == "finish")
        .expect("finish button");
    assert_eq!(finish.label, "Finish");
    assert_eq!(finish.command, Some(Command::Validate));
}
