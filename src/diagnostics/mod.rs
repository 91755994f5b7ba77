//! Best-effort runtime diagnostics.
//!
//! Each fact in a [`DiagnosticsReport`] is computed independently and has
//! its own enumerated result, so a failing sub-check changes only its own
//! field. Building a report never fails.

mod report;
mod service;

pub use report::{
    BackendStatus, ConnectionStatus, DatabaseStatus, DiagnosticsReport, SettingPresence,
};
pub use service::DiagnosticsService;

#[cfg(test)]
mod tests;
