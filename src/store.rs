use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::PlanningResult;
use crate::planning::history::HistoryEntry;
use crate::planning::models::WeekPlanning;

/// Storage seam between the planning core and the surrounding backend.
///
/// The planning is replaced and cleared wholesale; there is no partial
/// mutation contract at this layer. Durable persistence belongs to the
/// surrounding application.
#[async_trait]
pub trait PlanningStore: Send + Sync + 'static {
    /// Get the current week planning, if one is loaded
    async fn current(&self) -> PlanningResult<Option<WeekPlanning>>;

    /// Replace the current week planning
    async fn replace(&self, planning: WeekPlanning) -> PlanningResult<()>;

    /// Drop the current planning. History entries are kept.
    async fn clear(&self) -> PlanningResult<()>;

    /// Import/export history, most recent first
    async fn history(&self) -> PlanningResult<Vec<HistoryEntry>>;

    /// Record an import/export event
    async fn record(&self, entry: HistoryEntry) -> PlanningResult<()>;
}

/// In-memory implementation for a single session (and for testing)
#[derive(Debug, Default)]
pub struct InMemoryStore {
    current: RwLock<Option<WeekPlanning>>,
    history: RwLock<Vec<HistoryEntry>>,
}

#[async_trait]
impl PlanningStore for InMemoryStore {
    async fn current(&self) -> PlanningResult<Option<WeekPlanning>> {
        let current = self.current.read().await;
        Ok(current.clone())
    }

    async fn replace(&self, planning: WeekPlanning) -> PlanningResult<()> {
        debug!(
            "Replacing current planning with week {}/{} ({} employees)",
            planning.week_number,
            planning.year,
            planning.employees.len()
        );
        let mut current = self.current.write().await;
        *current = Some(planning);
        Ok(())
    }

    async fn clear(&self) -> PlanningResult<()> {
        debug!("Clearing current planning");
        let mut current = self.current.write().await;
        *current = None;
        Ok(())
    }

    async fn history(&self) -> PlanningResult<Vec<HistoryEntry>> {
        let history = self.history.read().await;
        Ok(history.clone())
    }

    async fn record(&self, entry: HistoryEntry) -> PlanningResult<()> {
        let mut history = self.history.write().await;
        // Most recent first
        history.insert(0, entry);
        Ok(())
    }
}
