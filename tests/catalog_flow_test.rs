use promptz::api::PromptzApi;
use promptz::config::PromptzConfig;
use promptz::init::initialize_with;
use promptz::store::fs::FileStore;
use tempfile::TempDir;

fn setup() -> (TempDir, PromptzApi<FileStore>) {
    let dir = TempDir::new().unwrap();
    let config = PromptzConfig::with_data_file(dir.path().join("prompts.yaml"));
    (dir, initialize_with(config))
}

#[test]
fn create_update_delete_lifecycle() {
    let (_dir, mut api) = setup();

    let created = api
        .create_entry("Style", "Anime", "anime style, vivid colors")
        .unwrap();
    assert!(!created.failed());
    assert_eq!(api.list_categories().unwrap().categories, vec!["Style"]);
    assert_eq!(
        api.get_content("Style", "Anime").unwrap().content.as_deref(),
        Some("anime style, vivid colors")
    );

    let updated = api
        .update_entry(
            "Style",
            "Anime",
            "Style",
            "Anime V2",
            "anime style, vivid colors, v2",
        )
        .unwrap();
    assert!(!updated.failed());
    assert_eq!(
        api.get_content("Style", "Anime").unwrap().content.as_deref(),
        Some("")
    );
    assert_eq!(
        api.get_content("Style", "Anime V2")
            .unwrap()
            .content
            .as_deref(),
        Some("anime style, vivid colors, v2")
    );

    let deleted = api.delete_entry("Style", "Anime V2").unwrap();
    assert!(!deleted.failed());
    assert!(api.list_categories().unwrap().categories.is_empty());
}

#[test]
fn changes_are_visible_to_a_fresh_api_on_the_same_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prompts.yaml");

    let mut writer = initialize_with(PromptzConfig::with_data_file(path.clone()));
    writer.create_entry("Style", "Anime", "anime style").unwrap();

    let reader = initialize_with(PromptzConfig::with_data_file(path));
    assert_eq!(reader.list_categories().unwrap().categories, vec!["Style"]);
    assert_eq!(
        reader
            .get_content("Style", "Anime")
            .unwrap()
            .content
            .as_deref(),
        Some("anime style")
    );
}

#[test]
fn rejected_operation_leaves_the_file_untouched() {
    let (dir, mut api) = setup();
    api.create_entry("Style", "Anime", "anime style").unwrap();
    let before = std::fs::read(dir.path().join("prompts.yaml")).unwrap();

    let rejected = api.create_entry("Style", "Anime", "other content").unwrap();
    assert!(rejected.failed());

    let after = std::fs::read(dir.path().join("prompts.yaml")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn validation_messages_name_the_problem() {
    let (_dir, mut api) = setup();

    let blank = api.create_entry("", "Anime", "x").unwrap();
    assert!(blank.messages[0].content.contains("Category"));

    api.create_entry("Style", "Anime", "x").unwrap();
    let dup = api.create_entry("Style", "Anime", "y").unwrap();
    assert!(dup.messages[0].content.contains("already exists"));

    let missing = api.delete_entry("Style", "Ghost").unwrap();
    assert!(missing.messages[0].content.contains("Ghost"));
}
