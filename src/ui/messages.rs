use crate::db::log::audit;
use crate::models::notification::{Notification, NotificationKind, Notifier};
use rusqlite::Connection;
use std::fmt;
use tracing::warn;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section header, e.g. `── Projects ──────`
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{}{}── {} {}{}", FG_BLUE, BOLD, msg, "─".repeat(30), RESET);
}

/// Prints notifications on the terminal and, when audited, records them in
/// the internal log under `operation`.
pub struct ConsoleNotifier<'c> {
    audit_to: Option<(&'c Connection, &'static str)>,
}

impl<'c> ConsoleNotifier<'c> {
    pub fn new() -> Self {
        Self { audit_to: None }
    }

    pub fn audited(conn: &'c Connection, operation: &'static str) -> Self {
        Self {
            audit_to: Some((conn, operation)),
        }
    }
}

impl Default for ConsoleNotifier<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier<'_> {
    fn notify(&mut self, n: Notification) {
        let line = format!("{}{}{} {}", BOLD, n.title, RESET, n.description);
        match n.kind {
            NotificationKind::Success => success(line),
            NotificationKind::Info => info(line),
            NotificationKind::Destructive => error(line),
        }

        if let Some((conn, operation)) = self.audit_to
            && let Err(e) = audit(conn, operation, &n.title, &n.description)
        {
            warn!(error = %e, operation, "failed to write audit log");
        }
    }
}
