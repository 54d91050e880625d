use serde::{Deserialize, Serialize};

use crate::index::{IndexedEntry, SearchIndex};
use crate::model::{QueryTerms, ScoredEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub title: i64,
    pub category: i64,
    pub description: i64,
    pub word: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title: 100,
            category: 50,
            description: 25,
            word: 10,
        }
    }
}

impl ScoreWeights {
    // Weights are tuning policy, not invariants, but they must stay
    // monotonic in match specificity.
    pub fn validate(&self) -> Result<(), String> {
        if self.word < 1 {
            return Err("word weight must be at least 1".into());
        }
        if self.title < self.category
            || self.category < self.description
            || self.description < self.word
        {
            return Err(
                "score weights must satisfy title >= category >= description >= word".into(),
            );
        }
        Ok(())
    }
}

pub fn search(
    index: &SearchIndex,
    query: &str,
    weights: &ScoreWeights,
    limit: usize,
) -> Vec<ScoredEntry> {
    if limit == 0 || index.is_empty() {
        return Vec::new();
    }

    let Some(terms) = QueryTerms::parse(query) else {
        return Vec::new();
    };

    let mut scored: Vec<(i64, usize, &IndexedEntry)> = index
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(position, indexed)| {
            let score = score_entry(indexed, &terms, weights);
            (score > 0).then_some((score, position, indexed))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));

    scored
        .into_iter()
        .take(limit)
        .map(|(score, _, indexed)| ScoredEntry {
            entry: indexed.entry.clone(),
            score,
        })
        .collect()
}

pub fn score_entry(indexed: &IndexedEntry, terms: &QueryTerms, weights: &ScoreWeights) -> i64 {
    let mut score = 0;

    if indexed.title_lower.contains(&terms.full) {
        score += weights.title;
    }
    if indexed.category_lower.contains(&terms.full) {
        score += weights.category;
    }
    if indexed.description_lower.contains(&terms.full) {
        score += weights.description;
    }

    // Multi-word queries accumulate per matched word even when other words
    // miss; surfacing partial matches is deliberate.
    for word in &terms.words {
        if indexed.searchable_text.contains(word.as_str()) {
            score += weights.word;
        }
    }

    score
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultGroup {
    pub category: String,
    pub entries: Vec<ScoredEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedResults {
    pub total: usize,
    pub groups: Vec<ResultGroup>,
}

// Groups appear in the order their first member ranks; rank order is kept
// inside each group.
pub fn group_by_category(ranked: Vec<ScoredEntry>) -> GroupedResults {
    let total = ranked.len();
    let mut groups: Vec<ResultGroup> = Vec::new();

    for scored in ranked {
        let category = if scored.entry.category.is_empty() {
            "Other".to_string()
        } else {
            scored.entry.category.clone()
        };

        match groups.iter_mut().find(|group| group.category == category) {
            Some(group) => group.entries.push(scored),
            None => groups.push(ResultGroup {
                category,
                entries: vec![scored],
            }),
        }
    }

    GroupedResults { total, groups }
}
