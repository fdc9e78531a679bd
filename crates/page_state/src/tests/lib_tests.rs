use chrono::NaiveDate;

use crate::busy::BusyLedger;
use crate::csv::CsvPreview;
use crate::domain::{ControlId, FileRef};
use crate::format::{format_currency, format_date, parse_currency, parse_date};
use crate::search::{disposition, SearchDisposition};
use crate::shortcuts::{shortcut_for, KeyChord, ShortcutAction};
use crate::sort::{next_directive, SortDirective, SortOrder};

#[test]
fn clicking_ascending_column_flips_to_descending() {
    let current = SortDirective::new("name", SortOrder::Asc);
    assert_eq!(
        next_directive(Some(&current), "name"),
        SortDirective::new("name", SortOrder::Desc)
    );
}

#[test]
fn clicking_descending_column_resets_to_ascending() {
    let current = SortDirective::new("name", SortOrder::Desc);
    assert_eq!(
        next_directive(Some(&current), "name"),
        SortDirective::new("name", SortOrder::Asc)
    );
}

#[test]
fn clicking_different_column_starts_ascending() {
    let current = SortDirective::new("name", SortOrder::Asc);
    assert_eq!(
        next_directive(Some(&current), "age"),
        SortDirective::new("age", SortOrder::Asc)
    );
}

#[test]
fn clicking_with_no_current_directive_starts_ascending() {
    assert_eq!(
        next_directive(None, "age"),
        SortDirective::new("age", SortOrder::Asc)
    );
}

#[test]
fn sort_order_rejects_unknown_spelling() {
    assert!("ascending".parse::<SortOrder>().is_err());
    assert_eq!("desc".parse::<SortOrder>().expect("desc"), SortOrder::Desc);
}

#[test]
fn sort_directive_serializes_with_snake_case_order() {
    let directive = SortDirective::new("spread_amount", SortOrder::Desc);
    let json = serde_json::to_string(&directive).expect("serialize");
    assert_eq!(json, r#"{"column":"spread_amount","order":"desc"}"#);
}

#[test]
fn empty_and_long_search_values_qualify() {
    assert_eq!(disposition(""), SearchDisposition::Resubmit);
    assert_eq!(disposition("bob"), SearchDisposition::Resubmit);
    assert_eq!(disposition("developer"), SearchDisposition::Resubmit);
}

#[test]
fn short_search_values_cancel_pending_work() {
    assert_eq!(disposition("b"), SearchDisposition::CancelPending);
    assert_eq!(disposition("bo"), SearchDisposition::CancelPending);
}

#[test]
fn search_length_counts_characters_not_bytes() {
    // Two characters, six bytes.
    assert_eq!(disposition("éé"), SearchDisposition::CancelPending);
}

#[test]
fn busy_token_settles_once() {
    let mut ledger = BusyLedger::new();
    let control = ControlId::new("save-button");
    let token = ledger.begin(&control, "Save");
    assert!(ledger.is_busy(&control));

    assert_eq!(ledger.settle(&token).as_deref(), Some("Save"));
    assert!(!ledger.is_busy(&control));
    assert_eq!(ledger.settle(&token), None);
}

#[test]
fn rebegin_invalidates_old_token_and_keeps_first_label() {
    let mut ledger = BusyLedger::new();
    let control = ControlId::new("save-button");
    let first = ledger.begin(&control, "Save");
    // The control now shows a busy label; a second begin must not capture it.
    let second = ledger.begin(&control, "Processing...");

    assert_eq!(ledger.settle(&first), None);
    assert_eq!(ledger.settle(&second).as_deref(), Some("Save"));
}

#[test]
fn busy_controls_are_tracked_independently() {
    let mut ledger = BusyLedger::new();
    let save = ledger.begin(&ControlId::new("save"), "Save");
    let upload = ledger.begin(&ControlId::new("upload"), "Upload");

    assert_eq!(ledger.settle(&upload).as_deref(), Some("Upload"));
    assert_eq!(ledger.settle(&save).as_deref(), Some("Save"));
}

#[test]
fn csv_preview_trims_cells_and_caps_rows() {
    let text = "Talent Name, Job Title ,Pay Rate\n\
                Alice, Developer ,85\n\
                \n\
                Bob,Designer,70\n\
                Carol,QA,60\n\
                Dan,PM,90\n\
                Eve,Dev,80\n\
                Frank,Dev,75\n";
    let preview = CsvPreview::parse(text, 5).expect("preview");
    assert_eq!(preview.headers, vec!["Talent Name", "Job Title", "Pay Rate"]);
    assert_eq!(preview.rows.len(), 5);
    assert_eq!(preview.rows[0], vec!["Alice", "Developer", "85"]);
    assert_eq!(preview.rows[4], vec!["Eve", "Dev", "80"]);
}

#[test]
fn csv_preview_requires_a_data_row() {
    assert_eq!(CsvPreview::parse("", 5), None);
    assert_eq!(CsvPreview::parse("Talent Name,Job Title", 5), None);
    assert_eq!(CsvPreview::parse("Talent Name,Job Title\n   \n", 5), None);
}

#[test]
fn file_ref_recognizes_csv_content_type() {
    assert!(FileRef::new("roster.csv", "text/csv").is_csv());
    assert!(!FileRef::new("roster.csv", "application/pdf").is_csv());
}

#[test]
fn currency_formats_with_grouping_and_sign() {
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(1234.5), "$1,234.50");
    assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    assert_eq!(format_currency(-42.07), "-$42.07");
}

#[test]
fn date_formats_without_zero_padding() {
    let date = NaiveDate::from_ymd_opt(2026, 8, 3).expect("date");
    assert_eq!(format_date(date), "8/3/2026");
}

#[test]
fn parse_date_accepts_spreadsheet_spellings() {
    let expected = NaiveDate::from_ymd_opt(2026, 8, 30).expect("date");
    assert_eq!(parse_date("08/30/2026"), Some(expected));
    assert_eq!(parse_date("2026-08-30"), Some(expected));
    assert_eq!(parse_date("30-08-2026"), Some(expected));
    assert_eq!(parse_date("  08-30-2026  "), Some(expected));
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("yesterday"), None);
}

#[test]
fn parse_currency_strips_symbols() {
    assert_eq!(parse_currency("$1,234.56"), Some(1234.56));
    assert_eq!(parse_currency(" 85 "), Some(85.0));
    assert_eq!(parse_currency(""), None);
    assert_eq!(parse_currency("n/a"), None);
}

#[test]
fn ctrl_or_meta_k_focuses_search() {
    assert_eq!(
        shortcut_for(&KeyChord::ctrl("k")),
        Some(ShortcutAction::FocusSearch)
    );
    assert_eq!(
        shortcut_for(&KeyChord::meta("K")),
        Some(ShortcutAction::FocusSearch)
    );
    assert_eq!(shortcut_for(&KeyChord::plain("k")), None);
}

#[test]
fn escape_dismisses_overlay() {
    assert_eq!(
        shortcut_for(&KeyChord::plain("Escape")),
        Some(ShortcutAction::DismissOverlay)
    );
    assert_eq!(shortcut_for(&KeyChord::plain("Enter")), None);
}
