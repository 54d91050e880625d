#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Application,
    Shortcut,
    Page,
}

impl EntryKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "application" | "app" => Some(Self::Application),
            "shortcut" => Some(Self::Shortcut),
            "page" => Some(Self::Page),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Shortcut => "shortcut",
            Self::Page => "page",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub kind: EntryKind,
    pub title: String,
    pub description: String,
    pub category: String,
    pub keywords: Vec<String>,
    pub url: Option<String>,
    pub binding: Option<String>,
    pub shortcut_count: Option<u32>,
}

impl SearchEntry {
    pub fn new(kind: EntryKind, title: &str, description: &str, category: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            keywords: Vec::new(),
            url: None,
            binding: None,
            shortcut_count: None,
        }
    }

    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|keyword| (*keyword).to_string()).collect();
        self
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn with_binding(mut self, binding: &str) -> Self {
        self.binding = Some(binding.to_string());
        self
    }

    pub fn with_shortcut_count(mut self, count: u32) -> Self {
        self.shortcut_count = Some(count);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredEntry {
    pub entry: SearchEntry,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerms {
    pub full: String,
    pub words: Vec<String>,
}

impl QueryTerms {
    // Returns None for a blank query; callers route that to the suggestions path.
    pub fn parse(query: &str) -> Option<Self> {
        let full = query.trim().to_lowercase();
        if full.is_empty() {
            return None;
        }

        let mut words: Vec<String> = Vec::new();
        for word in full.split_whitespace() {
            if !words.iter().any(|seen| seen == word) {
                words.push(word.to_string());
            }
        }

        Some(Self { full, words })
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryKind, QueryTerms};

    #[test]
    fn query_words_are_deduplicated() {
        let terms = QueryTerms::parse("  Chrome chrome BROWSER ").expect("non-empty query");
        assert_eq!(terms.full, "chrome chrome browser");
        assert_eq!(terms.words, vec!["chrome", "browser"]);
    }

    #[test]
    fn blank_query_parses_to_none() {
        assert!(QueryTerms::parse("").is_none());
        assert!(QueryTerms::parse("   ").is_none());
    }

    #[test]
    fn kind_parse_accepts_aliases() {
        assert_eq!(EntryKind::parse("app"), Some(EntryKind::Application));
        assert_eq!(EntryKind::parse("Shortcut"), Some(EntryKind::Shortcut));
        assert_eq!(EntryKind::parse("widget"), None);
    }
}
