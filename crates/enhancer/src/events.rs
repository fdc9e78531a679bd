//! Page inputs the runtime reacts to, and what each reaction produced.

use page_state::{shortcuts::KeyChord, BusyToken, ControlId, FileRef};

/// Page activity forwarded by the surface adapter. Each variant corresponds
/// to one wired behavior; unknown activity simply never becomes an event.
#[derive(Debug, Clone)]
pub enum PageEvent {
    /// A keystroke changed the search field's value.
    SearchInput { value: String },
    /// A sortable column header was clicked.
    SortHeaderClicked { column: String },
    /// A form with a loading-marker control was submitted.
    LoadingSubmit {
        control: ControlId,
        busy_label: String,
    },
    /// The action behind a busy control signaled completion.
    ActionCompleted { token: BusyToken },
    /// A control carrying a confirmation marker was clicked.
    ConfirmableClicked { message: Option<String> },
    /// A key chord arrived at the document level.
    KeyPressed { chord: KeyChord },
    /// A file was picked in a CSV-accepting input.
    CsvFileSelected { file: FileRef },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    /// The user declined a confirmation; the surface must suppress the
    /// default action.
    Blocked,
    BusyStarted(BusyToken),
}
