use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(CreatureId);

/// A fully resolved creature, as rendered by the card grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: CreatureId,
    pub name: String,
    pub image_url: Option<String>,
    pub types: Vec<String>,
}

/// One entry of the default listing page; `url` points at the detail resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureSummary {
    pub name: String,
    pub url: String,
}

/// A normalized search term. An empty query selects the default listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        Self(term.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingState {
    pub records: Vec<CreatureRecord>,
    pub is_loading: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            is_loading: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_trims_and_lowercases() {
        assert_eq!(SearchQuery::new("  PIKACHU "), SearchQuery::new("pikachu"));
        assert_eq!(SearchQuery::new("  PIKACHU ").as_str(), "pikachu");
    }

    #[test]
    fn whitespace_only_query_is_empty() {
        assert!(SearchQuery::new(" \t\n").is_empty());
        assert!(!SearchQuery::new("mew").is_empty());
    }

    #[test]
    fn listing_state_starts_loading_with_no_records() {
        let state = ListingState::default();
        assert!(state.is_loading);
        assert!(state.records.is_empty());
    }
}
