use townboard_core::{
    ensure_seeded, Category, CategoryRepository, MemoryDocumentStore, StoreCategoryRepository,
};

#[test]
fn list_is_empty_before_seeding_and_ordered_after() {
    let store = MemoryDocumentStore::new();
    let repo = StoreCategoryRepository::new(&store);

    assert!(repo.list().unwrap().is_empty());

    ensure_seeded(&store).unwrap();
    let categories = repo.list().unwrap();
    let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["cat-city", "cat-events", "cat-health"]);
}

#[test]
fn upsert_appends_unknown_ids_at_the_end() {
    let store = MemoryDocumentStore::new();
    ensure_seeded(&store).unwrap();
    let repo = StoreCategoryRepository::new(&store);

    repo.upsert(Category::new("cat-roads", "Roads")).unwrap();

    let categories = repo.list().unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[3], Category::new("cat-roads", "Roads"));
}

#[test]
fn upsert_replaces_in_place_preserving_position() {
    let store = MemoryDocumentStore::new();
    ensure_seeded(&store).unwrap();
    let repo = StoreCategoryRepository::new(&store);

    repo.upsert(Category::new("cat-events", "Events & festivals"))
        .unwrap();

    let categories = repo.list().unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[1], Category::new("cat-events", "Events & festivals"));
    // Neighbors are untouched.
    assert_eq!(categories[0].id, "cat-city");
    assert_eq!(categories[2].id, "cat-health");
}

#[test]
fn title_index_maps_ids_to_titles() {
    let store = MemoryDocumentStore::new();
    ensure_seeded(&store).unwrap();
    let repo = StoreCategoryRepository::new(&store);

    let index = repo.title_index().unwrap();
    assert_eq!(index.len(), 3);
    assert_eq!(index.get("cat-city").map(String::as_str), Some("City"));
    assert_eq!(index.get("cat-ghost"), None);
}
