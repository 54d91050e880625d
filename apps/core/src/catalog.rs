use std::fmt::{Display, Formatter};

use serde::Deserialize;

use crate::config::Config;
use crate::logging;
use crate::model::{EntryKind, SearchEntry};

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "catalog io error: {error}"),
            Self::Parse(error) => write!(f, "catalog parse error: {error}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogRecord {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub binding: Option<String>,
    #[serde(default)]
    pub shortcut_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entry: Vec<CatalogRecord>,
}

pub fn load(cfg: &Config) -> Result<Vec<SearchEntry>, CatalogError> {
    match &cfg.catalog_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            from_toml_str(&raw)
        }
        None => Ok(builtin()),
    }
}

pub fn from_toml_str(raw: &str) -> Result<Vec<SearchEntry>, CatalogError> {
    let file: CatalogFile =
        toml::from_str(raw).map_err(|error| CatalogError::Parse(error.to_string()))?;
    Ok(from_records(file.entry))
}

// Malformed records are dropped here so they can never reach the scorer
// as empty-string matches.
pub fn from_records(records: Vec<CatalogRecord>) -> Vec<SearchEntry> {
    records.into_iter().filter_map(validate_record).collect()
}

fn validate_record(record: CatalogRecord) -> Option<SearchEntry> {
    let title = record.title.trim();
    if title.is_empty() {
        logging::warn("catalog record skipped: blank title");
        return None;
    }

    let Some(kind) = EntryKind::parse(&record.kind) else {
        logging::warn(&format!(
            "catalog record '{title}' skipped: unknown kind '{}'",
            record.kind
        ));
        return None;
    };

    Some(SearchEntry {
        kind,
        title: title.to_string(),
        description: record.description,
        category: record.category,
        keywords: record.keywords,
        url: record.url,
        binding: record.binding,
        shortcut_count: record.shortcut_count,
    })
}

pub fn builtin() -> Vec<SearchEntry> {
    use EntryKind::{Application, Page, Shortcut};

    vec![
        SearchEntry::new(
            Application,
            "Visual Studio Code",
            "Powerful code editor with extensive shortcut support",
            "Development",
        )
        .with_url("Visual Studio.html")
        .with_keywords(&["vscode", "editor", "programming", "development"])
        .with_shortcut_count(150),
        SearchEntry::new(
            Application,
            "Adobe Photoshop",
            "Professional image editing and design software",
            "Design",
        )
        .with_url("Adobe PhotoShop.html")
        .with_keywords(&["adobe", "photo", "design", "graphics"])
        .with_shortcut_count(200),
        SearchEntry::new(Application, "Google Chrome", "Fast and secure web browser", "Browser")
            .with_url("Google Chrome.html")
            .with_keywords(&["browser", "web", "google", "internet"])
            .with_shortcut_count(80),
        SearchEntry::new(
            Application,
            "Microsoft Excel",
            "Powerful spreadsheet application",
            "Productivity",
        )
        .with_url("Microsoft Excell.htm")
        .with_keywords(&["excel", "spreadsheet", "data", "office"])
        .with_shortcut_count(120),
        SearchEntry::new(
            Application,
            "Microsoft Word",
            "Document creation and editing",
            "Productivity",
        )
        .with_url("Microsoft Word.htm")
        .with_keywords(&["word", "document", "writing", "office"])
        .with_shortcut_count(100),
        SearchEntry::new(
            Application,
            "Discord",
            "Voice, video and text communication",
            "Communication",
        )
        .with_url("Discord.html")
        .with_keywords(&["discord", "chat", "gaming", "communication"])
        .with_shortcut_count(50),
        SearchEntry::new(Application, "Slack", "Team collaboration and messaging", "Communication")
            .with_url("Slack.htm")
            .with_keywords(&["slack", "team", "work", "messaging"])
            .with_shortcut_count(45),
        SearchEntry::new(
            Application,
            "Spotify",
            "Music streaming and playlist management",
            "Media",
        )
        .with_url("Spotify.html")
        .with_keywords(&["spotify", "music", "audio", "streaming"])
        .with_shortcut_count(30),
        SearchEntry::new(
            Application,
            "Windows 11",
            "Operating system shortcuts and navigation",
            "System",
        )
        .with_url("Windows_11.html")
        .with_keywords(&["windows", "system", "os", "navigation"])
        .with_shortcut_count(100),
        SearchEntry::new(Application, "File Explorer", "File and folder management", "System")
            .with_url("File Explorer.htm")
            .with_keywords(&["files", "folders", "explorer", "navigation"])
            .with_shortcut_count(60),
        SearchEntry::new(Shortcut, "Copy", "Copy selected text or items", "General")
            .with_binding("Ctrl+C / Cmd+C")
            .with_keywords(&["copy", "duplicate", "clipboard"]),
        SearchEntry::new(Shortcut, "Paste", "Paste from clipboard", "General")
            .with_binding("Ctrl+V / Cmd+V")
            .with_keywords(&["paste", "insert", "clipboard"]),
        SearchEntry::new(Shortcut, "Cut", "Cut selected text or items", "General")
            .with_binding("Ctrl+X / Cmd+X")
            .with_keywords(&["cut", "move", "clipboard"]),
        SearchEntry::new(Shortcut, "Undo", "Undo the last action", "General")
            .with_binding("Ctrl+Z / Cmd+Z")
            .with_keywords(&["undo", "revert", "back"]),
        SearchEntry::new(Shortcut, "Redo", "Redo the last undone action", "General")
            .with_binding("Ctrl+Y / Cmd+Shift+Z")
            .with_keywords(&["redo", "forward", "repeat"]),
        SearchEntry::new(Shortcut, "Select All", "Select all content", "General")
            .with_binding("Ctrl+A / Cmd+A")
            .with_keywords(&["select", "all", "everything"]),
        SearchEntry::new(Shortcut, "Find", "Open find dialog", "General")
            .with_binding("Ctrl+F / Cmd+F")
            .with_keywords(&["find", "search", "locate"]),
        SearchEntry::new(Shortcut, "Save", "Save current document", "General")
            .with_binding("Ctrl+S / Cmd+S")
            .with_keywords(&["save", "store", "preserve"]),
        SearchEntry::new(
            Page,
            "All Applications",
            "Browse all available applications and their shortcuts",
            "Navigation",
        )
        .with_url("all-applications.html")
        .with_keywords(&["apps", "applications", "browse", "directory"]),
        SearchEntry::new(
            Page,
            "Interactive Quiz",
            "Test your knowledge with interactive quizzes",
            "Learning",
        )
        .with_url("quiz-integrated.html")
        .with_keywords(&["quiz", "test", "challenge", "practice"]),
        SearchEntry::new(
            Page,
            "Community",
            "Join the community and compete with others",
            "Social",
        )
        .with_url("community-ultimate.html")
        .with_keywords(&["community", "social", "compete", "leaderboard"]),
        SearchEntry::new(Page, "About", "Learn more about Shortcut Sensei", "Information")
            .with_url("about.html")
            .with_keywords(&["about", "information", "company", "story"]),
    ]
}
