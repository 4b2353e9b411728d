use super::filter::FilterCriteria;

use serde_json::{Value, json};

pub const AUTHOR_FIELD: &str = "author";
pub const PUBLISHER_FIELD: &str = "publisher.keyword";
pub const CATEGORIES_FIELD: &str = "categories.keyword";
pub const RELEASE_DATE_FIELD: &str = "release_date";

/// One condition of a structured query.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Analyzed (tokenized) match against a text field.
    Match { field: String, query: String },
    /// Byte-exact match against a keyword field.
    Term { field: String, value: String },
    /// Matches when any of `values` is present in the keyword field.
    Terms { field: String, values: Vec<String> },
    /// `field >= gte`; there is no upper bound.
    Range { field: String, gte: String },
}

impl Clause {
    pub fn to_json(&self) -> Value {
        match self {
            Clause::Match { field, query } => json!({ "match": { field: { "query": query } } }),
            Clause::Term { field, value } => json!({ "term": { field: { "value": value } } }),
            Clause::Terms { field, values } => json!({ "terms": { field: values } }),
            Clause::Range { field, gte } => json!({ "range": { field: { "gte": gte } } }),
        }
    }
}

/// Conjunction of clauses. An empty `must` list matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructuredQuery {
    pub must: Vec<Clause>,
}

impl StructuredQuery {
    pub fn is_match_all(&self) -> bool {
        self.must.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let must: Vec<Value> = self.must.iter().map(Clause::to_json).collect();
        json!({ "bool": { "must": must } })
    }
}

/// Everything the index can be asked to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    Bool(StructuredQuery),
    /// Passed to the engine's query-string parser untouched.
    QueryString(String),
    /// Point lookup by document identifier; yields at most one hit.
    Id(String),
}

impl SearchQuery {
    /// Request body for the engine's `_search` endpoint.
    pub fn to_request_body(&self) -> Value {
        match self {
            SearchQuery::Bool(query) => json!({ "query": query.to_json() }),
            SearchQuery::QueryString(query) => {
                json!({ "query": { "query_string": { "query": query } } })
            }
            SearchQuery::Id(id) => json!({
                "query": { "term": { "_id": { "value": id } } },
                "size": 1
            }),
        }
    }
}

/// Translates filter criteria into a conjunctive query.
///
/// Clauses are emitted in the fixed order author, publisher, categories,
/// release_after, one per present key.
pub fn build_filter_query(criteria: &FilterCriteria) -> StructuredQuery {
    let mut must = Vec::new();

    if let Some(author) = &criteria.author {
        must.push(Clause::Match {
            field: AUTHOR_FIELD.to_string(),
            query: author.clone(),
        });
    }

    if let Some(publisher) = &criteria.publisher {
        must.push(Clause::Term {
            field: PUBLISHER_FIELD.to_string(),
            value: publisher.clone(),
        });
    }

    if let Some(categories) = &criteria.categories {
        must.push(Clause::Terms {
            field: CATEGORIES_FIELD.to_string(),
            values: categories.clone(),
        });
    }

    if let Some(release_after) = &criteria.release_after {
        must.push(Clause::Range {
            field: RELEASE_DATE_FIELD.to_string(),
            gte: release_after.clone(),
        });
    }

    StructuredQuery { must }
}

pub fn build_full_text_query(query_str: &str) -> SearchQuery {
    SearchQuery::QueryString(query_str.to_string())
}
