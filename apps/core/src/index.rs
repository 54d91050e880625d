use crate::model::SearchEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedEntry {
    pub entry: SearchEntry,
    pub title_lower: String,
    pub category_lower: String,
    pub description_lower: String,
    pub searchable_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<IndexedEntry>,
}

impl SearchIndex {
    // Catalog order is preserved; the scorer relies on it for tie-breaking.
    pub fn build(entries: Vec<SearchEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(index_entry).collect(),
        }
    }

    pub fn entries(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn index_entry(entry: SearchEntry) -> IndexedEntry {
    let mut searchable = String::with_capacity(
        entry.title.len() + entry.description.len() + entry.category.len() + 32,
    );
    searchable.push_str(&entry.title);
    searchable.push(' ');
    searchable.push_str(&entry.description);
    searchable.push(' ');
    searchable.push_str(&entry.category);
    for keyword in &entry.keywords {
        searchable.push(' ');
        searchable.push_str(keyword);
    }

    IndexedEntry {
        title_lower: entry.title.to_lowercase(),
        category_lower: entry.category.to_lowercase(),
        description_lower: entry.description.to_lowercase(),
        searchable_text: searchable.to_lowercase(),
        entry,
    }
}
