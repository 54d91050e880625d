use sensei_core::index::SearchIndex;
use sensei_core::model::{EntryKind, SearchEntry};

#[test]
fn searchable_text_flattens_all_fields_lowercased() {
    let entry = SearchEntry::new(
        EntryKind::Application,
        "Visual Studio Code",
        "Powerful Code Editor",
        "Development",
    )
    .with_keywords(&["vscode", "Editor"]);

    let index = SearchIndex::build(vec![entry]);
    let indexed = &index.entries()[0];

    assert!(indexed.searchable_text.contains("visual studio code"));
    assert!(indexed.searchable_text.contains("powerful code editor"));
    assert!(indexed.searchable_text.contains("development"));
    assert!(indexed.searchable_text.contains("vscode"));
    assert!(indexed.searchable_text.contains("editor"));
    assert_eq!(indexed.title_lower, "visual studio code");
    assert_eq!(indexed.category_lower, "development");
}

#[test]
fn index_preserves_catalog_order() {
    let entries = sensei_core::catalog::builtin();
    let titles: Vec<String> = entries.iter().map(|entry| entry.title.clone()).collect();

    let index = SearchIndex::build(entries);
    let indexed_titles: Vec<&str> = index
        .entries()
        .iter()
        .map(|indexed| indexed.entry.title.as_str())
        .collect();

    assert_eq!(indexed_titles, titles);
    assert_eq!(index.len(), titles.len());
    assert!(!index.is_empty());
}
