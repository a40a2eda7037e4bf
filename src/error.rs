//! Application-level error tracking.
//!
//! The history panel never reports commit failures itself. The host records
//! them here and shows the most recent unacknowledged one in the footer.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::SystemTime;

use parking_lot::RwLock;

/// Severity level for application errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational - no action needed
    Info,
    /// Warning - something did not happen but the screen is usable
    Warning,
    /// Error - a user action failed
    Error,
}

/// Category of error for filtering/display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Comment edit/delete did not go through
    Commit,
    /// Hotspot file could not be read or written
    Store,
}

/// An application error with user-friendly messaging.
#[derive(Debug, Clone)]
pub struct AppError {
    /// Unique identifier for this error instance
    pub id: u64,
    /// When the error occurred
    pub timestamp: SystemTime,
    pub severity: ErrorSeverity,
    pub category: ErrorCategory,
    /// User-friendly message (shown in the footer)
    pub message: String,
    /// Technical details (written to the log)
    pub details: Option<String>,
    /// Whether this error has been acknowledged
    pub acknowledged: bool,
}

/// Thread-safe error registry for the application.
#[derive(Clone)]
pub struct ErrorRegistry {
    inner: Arc<RwLock<ErrorRegistryInner>>,
}

struct ErrorRegistryInner {
    next_id: u64,
    /// Recent errors (ring buffer)
    errors: VecDeque<AppError>,
    capacity: usize,
}

impl ErrorRegistry {
    /// Create a new error registry with the given capacity.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(RwLock::new(ErrorRegistryInner {
                next_id: 1,
                errors: VecDeque::with_capacity(capacity),
                capacity,
            })),
        }
    }

    /// Record a new error.
    pub fn record(
        &self,
        severity: ErrorSeverity,
        category: ErrorCategory,
        message: impl Into<String>,
    ) -> u64 {
        self.record_with_details(severity, category, message, None::<String>)
    }

    /// Record error with details.
    pub fn record_with_details(
        &self,
        severity: ErrorSeverity,
        category: ErrorCategory,
        message: impl Into<String>,
        details: Option<impl Into<String>>,
    ) -> u64 {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let error = AppError {
            id,
            timestamp: SystemTime::now(),
            severity,
            category,
            message: message.into(),
            details: details.map(Into::into),
            acknowledged: false,
        };
        tracing::warn!(
            id,
            ?severity,
            ?category,
            message = %error.message,
            details = error.details.as_deref().unwrap_or(""),
            "Recorded application error"
        );

        if inner.errors.len() == inner.capacity {
            inner.errors.pop_front();
        }
        inner.errors.push_back(error);

        id
    }

    /// Most recent unacknowledged warning or error (for footer display).
    pub fn current_error(&self) -> Option<AppError> {
        let inner = self.inner.read();
        inner
            .errors
            .iter()
            .rev()
            .find(|e| !e.acknowledged && e.severity >= ErrorSeverity::Warning)
            .cloned()
    }

    /// Up to `limit` most recent errors, newest first.
    pub fn recent(&self, limit: usize) -> Vec<AppError> {
        let inner = self.inner.read();
        inner.errors.iter().rev().take(limit).cloned().collect()
    }

    /// Acknowledge an error (removes it from the footer).
    pub fn acknowledge(&self, error_id: u64) {
        let mut inner = self.inner.write();
        if let Some(error) = inner.errors.iter_mut().find(|e| e.id == error_id) {
            error.acknowledged = true;
        }
    }
}

impl Default for ErrorRegistry {
    fn default() -> Self {
        Self::new(100)
    }
}
