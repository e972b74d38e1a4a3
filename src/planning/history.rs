use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four kinds of import/export events tracked in the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryEntryKind {
    ImportPdf,
    ImportExcel,
    ExportPdf,
    ExportExcel,
}

impl HistoryEntryKind {
    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            HistoryEntryKind::ImportPdf => "Import PDF",
            HistoryEntryKind::ImportExcel => "Import Excel",
            HistoryEntryKind::ExportPdf => "Export PDF",
            HistoryEntryKind::ExportExcel => "Export Excel",
        }
    }

    /// Whether the entry records an import
    pub fn is_import(self) -> bool {
        matches!(
            self,
            HistoryEntryKind::ImportPdf | HistoryEntryKind::ImportExcel
        )
    }
}

/// One import or export event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: HistoryEntryKind,
    pub filename: String,
    /// Local time of the event, "%Y-%m-%d %H:%M:%S"
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current local time
    pub fn new(kind: HistoryEntryKind, filename: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            filename: filename.into(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            week_number: None,
            year: None,
        }
    }

    /// Attach the planning week the file relates to
    pub fn for_week(mut self, week_number: u32, year: i32) -> Self {
        self.week_number = Some(week_number);
        self.year = Some(year);
        self
    }
}
