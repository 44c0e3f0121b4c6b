use townboard_core::{Announcement, AnnouncementPatch, NewAnnouncement};

#[test]
fn announcement_serialization_uses_camel_case_wire_fields() {
    let announcement = Announcement {
        id: "1".to_string(),
        title: "Road maintenance".to_string(),
        content: "Main St. closed.".to_string(),
        categories: vec!["cat-city".to_string()],
        publication_date: "2025-09-01T09:00:00Z".to_string(),
        updated_at: "2025-09-01T09:00:00Z".to_string(),
    };

    let json = serde_json::to_value(&announcement).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["publicationDate"], "2025-09-01T09:00:00Z");
    assert_eq!(json["updatedAt"], "2025-09-01T09:00:00Z");
    assert_eq!(json["categories"], serde_json::json!(["cat-city"]));

    let decoded: Announcement = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, announcement);
}

#[test]
fn into_record_carries_input_and_assigned_fields() {
    let input = NewAnnouncement {
        title: "Test".to_string(),
        content: "Body".to_string(),
        categories: vec!["cat-city".to_string()],
        publication_date: "2025-09-10T00:00:00.000Z".to_string(),
    };

    let record = input.into_record("abc".to_string(), "2025-09-11T00:00:00Z".to_string());
    assert_eq!(record.id, "abc");
    assert_eq!(record.title, "Test");
    assert_eq!(record.content, "Body");
    assert_eq!(record.publication_date, "2025-09-10T00:00:00.000Z");
    assert_eq!(record.updated_at, "2025-09-11T00:00:00Z");
}

#[test]
fn patch_overwrites_only_present_fields() {
    let existing = sample();
    let patch = AnnouncementPatch {
        content: Some("New body".to_string()),
        categories: Some(vec!["cat-health".to_string(), "cat-events".to_string()]),
        ..AnnouncementPatch::default()
    };

    let merged = patch.apply_to(&existing);
    assert_eq!(merged.id, existing.id);
    assert_eq!(merged.title, existing.title);
    assert_eq!(merged.content, "New body");
    assert_eq!(
        merged.categories,
        vec!["cat-health".to_string(), "cat-events".to_string()]
    );
    assert_eq!(merged.publication_date, existing.publication_date);
    assert_eq!(merged.updated_at, existing.updated_at);
}

#[test]
fn empty_patch_is_identity_over_the_record() {
    let existing = sample();
    let patch = AnnouncementPatch::default();
    assert!(patch.is_empty());
    assert_eq!(patch.apply_to(&existing), existing);
}

fn sample() -> Announcement {
    Announcement {
        id: "42".to_string(),
        title: "Title".to_string(),
        content: "Body".to_string(),
        categories: vec!["cat-city".to_string()],
        publication_date: "2025-09-01T09:00:00Z".to_string(),
        updated_at: "2025-09-02T10:00:00Z".to_string(),
    }
}
