use sensei_core::contract::{
    category_icon, kind_icon, results_view, suggestions_view, CoreRequest, ResultDto,
    SearchRequest, SearchView,
};
use sensei_core::model::{EntryKind, ScoredEntry, SearchEntry};
use sensei_core::search::GroupedResults;

#[test]
fn suggestions_view_lists_recent_popular_and_quick_actions() {
    let view = suggestions_view(vec!["chrome".to_string()]);

    match view {
        SearchView::Suggestions {
            recent,
            popular,
            quick_actions,
        } => {
            assert_eq!(recent, vec!["chrome"]);
            assert_eq!(popular.len(), 8);
            assert_eq!(popular[0], "VS Code");
            assert_eq!(quick_actions.len(), 3);
            assert_eq!(quick_actions[0].title, "Take a Quiz");
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn empty_results_become_a_no_results_view() {
    let view = results_view("zzz_no_such_app", GroupedResults::default());

    match view {
        SearchView::NoResults { query, try_instead } => {
            assert_eq!(query, "zzz_no_such_app");
            assert_eq!(try_instead.len(), 5);
            assert!(try_instead.contains(&"Chrome".to_string()));
        }
        other => panic!("unexpected view: {other:?}"),
    }
}

#[test]
fn result_dto_carries_kind_icon_and_metadata() {
    let entry = SearchEntry::new(EntryKind::Shortcut, "Copy", "Copy selected", "General")
        .with_binding("Ctrl+C / Cmd+C");
    let dto = ResultDto::from(ScoredEntry { entry, score: 35 });

    assert_eq!(dto.kind, "shortcut");
    assert_eq!(dto.icon, "command");
    assert_eq!(dto.binding.as_deref(), Some("Ctrl+C / Cmd+C"));
    assert_eq!(dto.score, 35);
    assert!(dto.url.is_none());
}

#[test]
fn icon_maps_cover_known_values_and_fall_back() {
    assert_eq!(kind_icon(EntryKind::Application), "app-window");
    assert_eq!(kind_icon(EntryKind::Page), "file-text");
    assert_eq!(category_icon("Development"), "code");
    assert_eq!(category_icon("Learning"), "book-open");
    assert_eq!(category_icon("Anything Else"), "file");
}

#[test]
fn views_serialize_with_a_view_tag() {
    let encoded = serde_json::to_string(&results_view("q", GroupedResults::default())).unwrap();
    assert!(encoded.contains("\"view\":\"no_results\""));

    let encoded = serde_json::to_string(&suggestions_view(Vec::new())).unwrap();
    assert!(encoded.contains("\"view\":\"suggestions\""));
}

#[test]
fn request_envelope_roundtrips() {
    let request = CoreRequest::Search(SearchRequest {
        query: "chrome".to_string(),
    });

    let encoded = serde_json::to_string(&request).unwrap();
    let decoded: CoreRequest = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, request);
}
