use semainier::planning::history::{HistoryEntry, HistoryEntryKind};
use semainier::planning::sample::sample_week_planning;
use semainier::store::{InMemoryStore, PlanningStore};

/// A fresh store has no planning and no history
#[tokio::test]
async fn test_empty_store() {
    let store = InMemoryStore::default();

    assert!(store.current().await.unwrap().is_none());
    assert!(store.history().await.unwrap().is_empty());
}

/// The planning is replaced wholesale on update
#[tokio::test]
async fn test_replace_planning() {
    let store = InMemoryStore::default();
    let planning = sample_week_planning();

    store.replace(planning.clone()).await.unwrap();
    assert_eq!(store.current().await.unwrap(), Some(planning));

    // A second replace overwrites the first entirely
    let mut next = sample_week_planning();
    next.week_number = 4;
    next.employees.truncate(2);
    store.replace(next.clone()).await.unwrap();

    let current = store.current().await.unwrap().unwrap();
    assert_eq!(current.week_number, 4);
    assert_eq!(current.employees.len(), 2);
}

/// Clearing drops the planning but keeps the history
#[tokio::test]
async fn test_clear_keeps_history() {
    let store = InMemoryStore::default();

    store.replace(sample_week_planning()).await.unwrap();
    store
        .record(HistoryEntry::new(HistoryEntryKind::ImportExcel, "wok10.xlsx").for_week(3, 2025))
        .await
        .unwrap();

    store.clear().await.unwrap();

    assert!(store.current().await.unwrap().is_none());
    let history = store.history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].filename, "wok10.xlsx");
}

/// History entries are returned most recent first
#[tokio::test]
async fn test_history_most_recent_first() {
    let store = InMemoryStore::default();

    store
        .record(HistoryEntry::new(HistoryEntryKind::ImportExcel, "first.xlsx"))
        .await
        .unwrap();
    store
        .record(HistoryEntry::new(HistoryEntryKind::ExportPdf, "second.pdf"))
        .await
        .unwrap();

    let history = store.history().await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].filename, "second.pdf");
    assert_eq!(history[0].kind, HistoryEntryKind::ExportPdf);
    assert_eq!(history[1].filename, "first.xlsx");
}

/// Entries keep their unique ids through the store
#[tokio::test]
async fn test_history_entry_ids_are_unique() {
    let store = InMemoryStore::default();

    store
        .record(HistoryEntry::new(HistoryEntryKind::ImportPdf, "a.pdf"))
        .await
        .unwrap();
    store
        .record(HistoryEntry::new(HistoryEntryKind::ImportPdf, "b.pdf"))
        .await
        .unwrap();

    let history = store.history().await.unwrap();
    assert_ne!(history[0].id, history[1].id);
}
