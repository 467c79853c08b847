use serde::Serialize;

/// Lifecycle state of a lunch record.
///
/// Allowed transitions:
/// draft → requested → confirmed, draft → confirmed,
/// and any non-cancelled state → cancelled.
/// Cancelled records are never reopened except by an admin reset.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RecordState {
    Draft,
    Requested,
    Confirmed,
    Cancelled,
}

impl RecordState {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            RecordState::Draft => "draft",
            RecordState::Requested => "requested",
            RecordState::Confirmed => "confirmed",
            RecordState::Cancelled => "cancelled",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(RecordState::Draft),
            "requested" => Some(RecordState::Requested),
            "confirmed" => Some(RecordState::Confirmed),
            "cancelled" => Some(RecordState::Cancelled),
            _ => None,
        }
    }

    /// Display label for tables and messages.
    pub fn label(&self) -> &'static str {
        match self {
            RecordState::Draft => "Draft",
            RecordState::Requested => "Requested",
            RecordState::Confirmed => "Confirmed",
            RecordState::Cancelled => "Cancelled",
        }
    }

    /// A record counts against the one-per-day rule unless cancelled.
    pub fn is_active(&self) -> bool {
        !matches!(self, RecordState::Cancelled)
    }
}
