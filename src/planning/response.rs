use serde::{Deserialize, Serialize};

use super::history::HistoryEntry;
use super::models::WeekPlanning;

/// Envelope for planning operations crossing the API boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub data: Option<WeekPlanning>,
}

impl PlanningResponse {
    /// Successful response carrying a planning
    pub fn ok(message: impl Into<String>, data: WeekPlanning) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Response without a planning (nothing loaded, or cleared)
    pub fn none(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
            data: None,
        }
    }
}

/// Envelope for the import/export history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub entries: Vec<HistoryEntry>,
}
