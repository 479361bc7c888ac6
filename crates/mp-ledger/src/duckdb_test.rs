use super::*;

#[tokio::test]
async fn empty_ledger_lists_nothing() {
    let ledger = DuckDbLedger::open_memory().unwrap();
    assert!(ledger.list_executed().await.unwrap().is_empty());
}

#[tokio::test]
async fn records_and_finds_an_outcome() {
    let ledger = DuckDbLedger::open_memory().unwrap();
    let version = Version::new("001_initial_content");

    let stored = ledger
        .record_outcome(
            &version,
            "initial content",
            "banners, faqs, pages",
            MigrationStatus::Completed,
            12,
        )
        .await
        .unwrap();
    assert_eq!(stored.status, MigrationStatus::Completed);

    let found = ledger.find_by_version(&version).await.unwrap().unwrap();
    assert_eq!(found.version, version);
    assert_eq!(found.name, "initial content");
    assert_eq!(found.execution_time_ms, 12);
    assert_eq!(found.status, MigrationStatus::Completed);
}

#[tokio::test]
async fn find_missing_version_returns_none() {
    let ledger = DuckDbLedger::open_memory().unwrap();
    let missing = ledger
        .find_by_version(&Version::new("999_missing"))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn upsert_overwrites_by_version() {
    let ledger = DuckDbLedger::open_memory().unwrap();
    let version = Version::new("002_default_pages");

    ledger
        .record_outcome(&version, "default pages", "seed", MigrationStatus::Failed, 3)
        .await
        .unwrap();
    ledger
        .record_outcome(&version, "default pages", "seed", MigrationStatus::Completed, 8)
        .await
        .unwrap();

    let entries = ledger.list_executed().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status, MigrationStatus::Completed);
    assert_eq!(entries[0].execution_time_ms, 8);
}

#[tokio::test]
async fn lists_in_version_order() {
    let ledger = DuckDbLedger::open_memory().unwrap();
    for version in ["010_later", "002_second", "001_first"] {
        ledger
            .record_outcome(
                &Version::new(version),
                version,
                "",
                MigrationStatus::Completed,
                1,
            )
            .await
            .unwrap();
    }

    let versions: Vec<String> = ledger
        .list_executed()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.version.into_inner())
        .collect();
    assert_eq!(versions, vec!["001_first", "002_second", "010_later"]);
}

#[tokio::test]
async fn persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.duckdb");

    {
        let ledger = DuckDbLedger::open(&path).unwrap();
        ledger
            .record_outcome(
                &Version::new("001_first"),
                "first",
                "",
                MigrationStatus::Completed,
                5,
            )
            .await
            .unwrap();
    }

    let ledger = DuckDbLedger::open(&path).unwrap();
    let entries = ledger.list_executed().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].version, "001_first");
}

#[tokio::test]
async fn executed_at_round_trips() {
    let ledger = DuckDbLedger::open_memory().unwrap();
    let version = Version::new("003_catalog");

    let stored = ledger
        .record_outcome(&version, "catalog", "", MigrationStatus::RolledBack, 2)
        .await
        .unwrap();
    let found = ledger.find_by_version(&version).await.unwrap().unwrap();
    assert_eq!(found.executed_at, stored.executed_at);
    assert_eq!(found.status, MigrationStatus::RolledBack);
}
