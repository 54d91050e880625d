use std::fmt::{Display, Formatter};

use crate::catalog::{self, CatalogError};
use crate::config::{self, Config};
use crate::index::SearchIndex;
use crate::model::SearchEntry;
use crate::search::{self, GroupedResults};

#[derive(Debug)]
pub enum ServiceError {
    Config(String),
    Catalog(CatalogError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Catalog(error) => write!(f, "catalog error: {error}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<CatalogError> for ServiceError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Suggestions,
    Ranked(GroupedResults),
}

// One instance per process, built at startup and passed by reference to
// whatever shell consumes it.
pub struct SearchService {
    config: Config,
    index: SearchIndex,
}

impl SearchService {
    pub fn new(config: Config) -> Result<Self, ServiceError> {
        config::validate(&config).map_err(ServiceError::Config)?;
        let entries = catalog::load(&config)?;
        Ok(Self {
            index: SearchIndex::build(entries),
            config,
        })
    }

    pub fn with_entries(config: Config, entries: Vec<SearchEntry>) -> Result<Self, ServiceError> {
        config::validate(&config).map_err(ServiceError::Config)?;
        Ok(Self {
            index: SearchIndex::build(entries),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn indexed_entries(&self) -> usize {
        self.index.len()
    }

    // Pure and synchronous; cheap enough to call per keystroke. A blank
    // query short-circuits to the suggestions path without scoring.
    pub fn search(&self, query: &str) -> SearchOutcome {
        if query.trim().is_empty() {
            return SearchOutcome::Suggestions;
        }

        let ranked = search::search(
            &self.index,
            query,
            &self.config.weights,
            self.config.max_results as usize,
        );
        SearchOutcome::Ranked(search::group_by_category(ranked))
    }

    // The index is rebuilt wholesale and swapped, never patched in place.
    pub fn reload_catalog(&mut self) -> Result<usize, ServiceError> {
        let entries = catalog::load(&self.config)?;
        self.index = SearchIndex::build(entries);
        Ok(self.index.len())
    }
}
