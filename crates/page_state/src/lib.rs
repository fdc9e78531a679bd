pub mod busy;
pub mod csv;
pub mod domain;
pub mod format;
pub mod search;
pub mod shortcuts;
pub mod sort;

pub use busy::{BusyLedger, BusyToken};
pub use domain::{AlertId, ControlId, FileRef, ToastId, ToastTone};
pub use sort::{next_directive, SortDirective, SortOrder};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
