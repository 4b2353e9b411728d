use super::analyzer::{analyze, analyze_query};
use super::store::{BookIndex, DEFAULT_PAGE_SIZE, SearchHit};
use crate::books::types::Book;
use crate::error::{GatewayError, Result};
use crate::query::builder::{Clause, SearchQuery, StructuredQuery};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

/// Suffix addressing the non-analyzed variant of a field.
const KEYWORD_SUFFIX: &str = ".keyword";

/// Deterministic in-process stand-in for the search engine.
///
/// Documents live in a `DashMap` keyed by id. Results are ordered by id and
/// cut to the engine's default page size, so tests see stable output.
#[derive(Clone, Default)]
pub struct MemoryIndex {
    documents: Arc<DashMap<String, Value>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an arbitrary body under `id`, bypassing the `Book` shape.
    pub fn insert_raw(&self, id: impl Into<String>, source: Value) {
        self.documents.insert(id.into(), source);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn collect_matching<F>(&self, limit: usize, predicate: F) -> Vec<SearchHit>
    where
        F: Fn(&str, &Value) -> bool,
    {
        let mut hits: Vec<SearchHit> = self
            .documents
            .iter()
            .filter(|entry| predicate(entry.key(), entry.value()))
            .map(|entry| SearchHit::new(entry.key().clone(), entry.value().clone()))
            .collect();

        hits.sort_by(|a, b| a.id.cmp(&b.id));
        hits.truncate(limit);
        hits
    }
}

#[async_trait]
impl BookIndex for MemoryIndex {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        let hits = match query {
            SearchQuery::Bool(structured) => self.collect_matching(DEFAULT_PAGE_SIZE, |_, source| {
                matches_structured(structured, source)
            }),
            SearchQuery::QueryString(query_str) => self
                .collect_matching(DEFAULT_PAGE_SIZE, |_, source| {
                    matches_query_string(query_str, source)
                }),
            SearchQuery::Id(id) => self.collect_matching(1, |key, _| key == id.as_str()),
        };
        Ok(hits)
    }

    async fn get_by_id(&self, id: &str) -> Result<Vec<SearchHit>> {
        self.search(&SearchQuery::Id(id.to_string())).await
    }

    async fn upsert(&self, book: &Book) -> Result<()> {
        let source =
            serde_json::to_value(book).map_err(|e| GatewayError::Backend(e.to_string()))?;
        self.documents.insert(book.id.clone(), source);
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.documents.remove(id);
        Ok(())
    }
}

fn matches_structured(query: &StructuredQuery, source: &Value) -> bool {
    query.must.iter().all(|clause| matches_clause(clause, source))
}

fn matches_clause(clause: &Clause, source: &Value) -> bool {
    match clause {
        Clause::Match { field, query } => {
            let tokens = field_tokens(source, field);
            analyze_query(query).iter().any(|t| tokens.contains(t))
        }
        Clause::Term { field, value } => field_strings(source, field).contains(&value.as_str()),
        Clause::Terms { field, values } => {
            let present = field_strings(source, field);
            values.iter().any(|v| present.contains(&v.as_str()))
        }
        Clause::Range { field, gte } => field_strings(source, field)
            .iter()
            .any(|value| *value >= gte.as_str()),
    }
}

/// Whitespace-separated terms, each `field:value` or bare; any term may match.
/// The `AND` / `OR` keywords are skipped and `*` matches everything.
fn matches_query_string(query: &str, source: &Value) -> bool {
    query
        .split_whitespace()
        .filter(|term| *term != "AND" && *term != "OR")
        .any(|term| {
            if term == "*" {
                return true;
            }
            match term.split_once(':') {
                Some((field, value)) if !field.is_empty() => {
                    let tokens = field_tokens(source, field);
                    analyze_query(value).iter().any(|t| tokens.contains(t))
                }
                _ => {
                    let tokens = all_tokens(source);
                    analyze_query(term).iter().any(|t| tokens.contains(t))
                }
            }
        })
}

/// String values of a top-level field. A `.keyword` suffix addresses the same field.
fn field_strings<'a>(source: &'a Value, field: &str) -> Vec<&'a str> {
    let name = field.strip_suffix(KEYWORD_SUFFIX).unwrap_or(field);
    match source.get(name) {
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

fn field_tokens(source: &Value, field: &str) -> HashSet<String> {
    analyze(&field_strings(source, field).join(" "))
}

fn all_tokens(source: &Value) -> HashSet<String> {
    match source {
        Value::Object(map) => map
            .keys()
            .flat_map(|field| field_tokens(source, field))
            .collect(),
        _ => Default::default(),
    }
}
