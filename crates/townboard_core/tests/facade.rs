use townboard_core::clock::parse_rfc3339;
use townboard_core::db::open_db;
use townboard_core::{
    AnnouncementPatch, BoardService, CatalogError, LatencyProfile, MemoryDocumentStore,
    NewAnnouncement, SqliteDocumentStore,
};
use uuid::Uuid;

#[tokio::test]
async fn create_adds_a_third_record_with_fresh_id_and_recent_stamp() {
    let service = memory_service();

    let created = service
        .create_announcement(NewAnnouncement {
            title: "Test".to_string(),
            content: "Body".to_string(),
            categories: vec!["cat-city".to_string()],
            publication_date: "2025-09-10T00:00:00.000Z".to_string(),
        })
        .await
        .unwrap();

    let all = service.list_announcements().await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(Uuid::parse_str(&created.id).is_ok(), "id: {}", created.id);

    let stamp = parse_rfc3339(&created.updated_at).unwrap();
    let age = time::OffsetDateTime::now_utc() - stamp;
    assert!(age.whole_seconds() < 5, "stamp: {}", created.updated_at);
}

#[tokio::test]
async fn updating_a_seeded_record_patches_title_only() {
    let service = memory_service();
    let original = service.get_announcement("1").await.unwrap().unwrap();

    let patch = AnnouncementPatch {
        title: Some("Road maintenance extended".to_string()),
        ..AnnouncementPatch::default()
    };
    let updated = service.update_announcement("1", &patch).await.unwrap();

    assert_eq!(updated.title, "Road maintenance extended");
    assert_eq!(updated.categories, vec!["cat-city".to_string()]);
    assert_eq!(updated.publication_date, original.publication_date);

    let before = parse_rfc3339(&original.updated_at).unwrap();
    let after = parse_rfc3339(&updated.updated_at).unwrap();
    assert!(after > before);
}

#[tokio::test]
async fn updating_a_missing_id_fails_and_leaves_the_catalog_unchanged() {
    let service = memory_service();
    let before = service.list_announcements().await.unwrap();

    let patch = AnnouncementPatch {
        title: Some("x".to_string()),
        ..AnnouncementPatch::default()
    };
    let err = service
        .update_announcement("does-not-exist", &patch)
        .await
        .unwrap_err();

    assert!(matches!(&err, CatalogError::NotFound(id) if id == "does-not-exist"));
    assert_eq!(err.to_string(), "announcement not found: does-not-exist");

    let after = service.list_announcements().await.unwrap();
    assert_eq!(after, before);
    assert_eq!(after.len(), 2);
}

#[tokio::test]
async fn listing_returns_seeded_data_on_first_use() {
    let service = memory_service();

    let announcements = service.list_announcements().await.unwrap();
    assert_eq!(announcements.len(), 2);
    assert_eq!(announcements[0].id, "1");
    assert_eq!(announcements[1].id, "2");

    let categories = service.list_categories().await.unwrap();
    let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["cat-city", "cat-events", "cat-health"]);
}

#[tokio::test]
async fn repeated_calls_never_reseed() {
    let service = memory_service();

    let first = service.list_announcements().await.unwrap();
    let raw_before = service.store().raw("mod:announcements").unwrap();

    let second = service.list_announcements().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(service.store().raw("mod:announcements").unwrap(), raw_before);
}

#[tokio::test]
async fn get_distinguishes_known_and_unknown_ids() {
    let service = memory_service();

    assert!(service.get_announcement("2").await.unwrap().is_some());
    assert!(service.get_announcement("ghost").await.unwrap().is_none());
}

#[tokio::test]
async fn category_titles_supports_label_lookup() {
    let service = memory_service();

    let titles = service.category_titles().await.unwrap();
    assert_eq!(titles.get("cat-events").map(String::as_str), Some("Community events"));
    assert_eq!(titles.get("cat-ghost"), None);
}

#[tokio::test]
async fn simulated_latency_still_resolves() {
    // Only "eventually resolves" is guaranteed about the delay.
    let service = BoardService::new(MemoryDocumentStore::new(), LatencyProfile::simulated());
    let announcements = service.list_announcements().await.unwrap();
    assert_eq!(announcements.len(), 2);
}

#[tokio::test]
async fn created_records_survive_reopening_the_sqlite_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("townboard.db");

    let created_id = {
        let conn = open_db(&path).unwrap();
        let service = BoardService::new(SqliteDocumentStore::new(&conn), LatencyProfile::zero());
        service
            .create_announcement(NewAnnouncement {
                title: "Durable".to_string(),
                content: "Survives restart".to_string(),
                categories: vec!["cat-city".to_string()],
                publication_date: "2025-09-10T00:00:00Z".to_string(),
            })
            .await
            .unwrap()
            .id
    };

    let conn = open_db(&path).unwrap();
    let service = BoardService::new(SqliteDocumentStore::new(&conn), LatencyProfile::zero());
    let reloaded = service.get_announcement(&created_id).await.unwrap().unwrap();
    assert_eq!(reloaded.title, "Durable");
    assert_eq!(service.list_announcements().await.unwrap().len(), 3);
}

fn memory_service() -> BoardService<MemoryDocumentStore> {
    BoardService::new(MemoryDocumentStore::new(), LatencyProfile::zero())
}
