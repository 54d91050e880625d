use serde::{Deserialize, Serialize};

use crate::model::{EntryKind, ScoredEntry};
use crate::search::{GroupedResults, ResultGroup};
use crate::suggest;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultDto {
    pub kind: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut_count: Option<u32>,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupDto {
    pub category: String,
    pub icon: String,
    pub results: Vec<ResultDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickActionDto {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SearchView {
    Suggestions {
        recent: Vec<String>,
        popular: Vec<String>,
        quick_actions: Vec<QuickActionDto>,
    },
    Results {
        query: String,
        total: usize,
        groups: Vec<GroupDto>,
    },
    NoResults {
        query: String,
        try_instead: Vec<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClearHistoryResponse {
    pub cleared: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload")]
pub enum CoreRequest {
    Search(SearchRequest),
    ClearHistory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "payload")]
pub enum CoreResponse {
    Search(SearchView),
    ClearHistory(ClearHistoryResponse),
}

pub fn kind_icon(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Application => "app-window",
        EntryKind::Shortcut => "command",
        EntryKind::Page => "file-text",
    }
}

pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Development" => "code",
        "Design" => "palette",
        "Browser" => "globe",
        "Productivity" => "briefcase",
        "Communication" => "message-circle",
        "Media" => "music",
        "System" => "monitor",
        "General" => "command",
        "Navigation" => "compass",
        "Learning" => "book-open",
        "Social" => "users",
        "Information" => "info",
        _ => "file",
    }
}

impl From<ScoredEntry> for ResultDto {
    fn from(value: ScoredEntry) -> Self {
        Self {
            kind: value.entry.kind.as_str().to_string(),
            icon: kind_icon(value.entry.kind).to_string(),
            title: value.entry.title,
            description: value.entry.description,
            category: value.entry.category,
            url: value.entry.url,
            binding: value.entry.binding,
            shortcut_count: value.entry.shortcut_count,
            score: value.score,
        }
    }
}

impl From<ResultGroup> for GroupDto {
    fn from(value: ResultGroup) -> Self {
        Self {
            icon: category_icon(&value.category).to_string(),
            category: value.category,
            results: value.entries.into_iter().map(ResultDto::from).collect(),
        }
    }
}

pub fn suggestions_view(recent: Vec<String>) -> SearchView {
    SearchView::Suggestions {
        recent,
        popular: suggest::POPULAR_SEARCHES
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        quick_actions: suggest::quick_actions()
            .iter()
            .map(|action| QuickActionDto {
                id: action.id.to_string(),
                title: action.title.to_string(),
                url: action.url.to_string(),
            })
            .collect(),
    }
}

pub fn results_view(query: &str, grouped: GroupedResults) -> SearchView {
    if grouped.total == 0 {
        return SearchView::NoResults {
            query: query.to_string(),
            try_instead: suggest::RETRY_SEARCHES
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        };
    }

    SearchView::Results {
        query: query.to_string(),
        total: grouped.total,
        groups: grouped.groups.into_iter().map(GroupDto::from).collect(),
    }
}
