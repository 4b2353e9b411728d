//! Query Module Tests
//!
//! Validates filter decoding and the translation to engine queries.
//!
//! ## Test Scopes
//! - **Filter**: Recognized keys, ignored keys, wrong value shapes, body decoding errors.
//! - **Builder**: Clause kinds, clause order, and the JSON sent to the engine.

#[cfg(test)]
mod tests {
    use crate::error::GatewayError;
    use crate::query::builder::*;
    use crate::query::filter::{FilterCriteria, is_date_valid};
    use serde_json::{Value, json};

    fn criteria(value: Value) -> FilterCriteria {
        FilterCriteria::from_map(value.as_object().unwrap())
    }

    // ============================================================
    // FILTER TESTS
    // ============================================================

    #[test]
    fn test_filter_reads_all_recognized_keys() {
        let filter = criteria(json!({
            "author": "Ray Bradbury",
            "publisher": "Penguin Books",
            "categories": ["Fiction", "Science"],
            "release_after": "2000-01-01"
        }));

        assert_eq!(filter.author.as_deref(), Some("Ray Bradbury"));
        assert_eq!(filter.publisher.as_deref(), Some("Penguin Books"));
        assert_eq!(
            filter.categories,
            Some(vec!["Fiction".to_string(), "Science".to_string()])
        );
        assert_eq!(filter.release_after.as_deref(), Some("2000-01-01"));
    }

    #[test]
    fn test_filter_ignores_unknown_keys() {
        let filter = criteria(json!({ "term": { "author": "X" }, "colour": "blue" }));
        assert_eq!(filter, FilterCriteria::default());
    }

    #[test]
    fn test_filter_treats_mistyped_values_as_absent() {
        let filter = criteria(json!({
            "author": 42,
            "publisher": ["Penguin Books"],
            "categories": "Fiction",
            "release_after": 20000101
        }));

        assert_eq!(filter, FilterCriteria::default());
    }

    #[test]
    fn test_filter_categories_with_non_string_element_is_absent() {
        let filter = criteria(json!({ "categories": ["Fiction", 7] }));
        assert_eq!(filter.categories, None);
    }

    #[test]
    fn test_filter_empty_categories_is_absent() {
        let filter = criteria(json!({ "categories": [] }));
        assert_eq!(filter.categories, None);
    }

    #[test]
    fn test_filter_invalid_date_is_absent() {
        let filter = criteria(json!({ "release_after": "2000-02-30", "author": "Orwell" }));

        assert_eq!(filter.release_after, None);
        assert_eq!(filter.author.as_deref(), Some("Orwell"));
    }

    #[test]
    fn test_is_date_valid() {
        assert!(is_date_valid("2000-01-01"));
        assert!(is_date_valid("2024-02-29"));
        assert!(!is_date_valid("2023-02-29"));
        assert!(!is_date_valid("2000-1-1"));
        assert!(!is_date_valid("01/01/2000"));
        assert!(!is_date_valid(""));
    }

    #[test]
    fn test_from_body_accepts_object() {
        let filter = FilterCriteria::from_body(br#"{"publisher":"Penguin Books"}"#).unwrap();
        assert_eq!(filter.publisher.as_deref(), Some("Penguin Books"));
    }

    #[test]
    fn test_from_body_rejects_invalid_json() {
        let err = FilterCriteria::from_body(b"{not json").unwrap_err();
        match err {
            GatewayError::InvalidRequest(msg) => assert!(msg.starts_with("invalid filter format")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_body_rejects_non_object() {
        let err = FilterCriteria::from_body(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, GatewayError::InvalidRequest(_)));
    }

    // ============================================================
    // BUILDER TESTS
    // ============================================================

    #[test]
    fn test_build_empty_filter_matches_all() {
        let query = build_filter_query(&FilterCriteria::default());

        assert!(query.is_match_all());
        assert_eq!(query, StructuredQuery::default());
        assert_eq!(query.to_json(), json!({ "bool": { "must": [] } }));
    }

    #[test]
    fn test_build_clause_kinds_and_order() {
        let query = build_filter_query(&criteria(json!({
            "release_after": "2000-01-01",
            "categories": ["Fiction"],
            "publisher": "Penguin Books",
            "author": "Ray Bradbury"
        })));

        assert_eq!(
            query.must,
            vec![
                Clause::Match {
                    field: AUTHOR_FIELD.to_string(),
                    query: "Ray Bradbury".to_string()
                },
                Clause::Term {
                    field: PUBLISHER_FIELD.to_string(),
                    value: "Penguin Books".to_string()
                },
                Clause::Terms {
                    field: CATEGORIES_FIELD.to_string(),
                    values: vec!["Fiction".to_string()]
                },
                Clause::Range {
                    field: RELEASE_DATE_FIELD.to_string(),
                    gte: "2000-01-01".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let filter = criteria(json!({ "author": "Atwood", "categories": ["Fiction"] }));
        assert_eq!(build_filter_query(&filter), build_filter_query(&filter));
    }

    #[test]
    fn test_build_skips_mistyped_keys_only() {
        let query = build_filter_query(&criteria(json!({
            "author": "Atwood",
            "categories": "Fiction"
        })));

        assert_eq!(query.must.len(), 1);
        assert!(matches!(query.must[0], Clause::Match { .. }));
    }

    #[test]
    fn test_filter_request_body() {
        let query = build_filter_query(&criteria(json!({
            "author": "Ray Bradbury",
            "publisher": "Penguin Books",
            "categories": ["Fiction", "Science"],
            "release_after": "2000-01-01"
        })));

        let body = SearchQuery::Bool(query).to_request_body();

        assert_eq!(
            body,
            json!({
                "query": {
                    "bool": {
                        "must": [
                            { "match": { "author": { "query": "Ray Bradbury" } } },
                            { "term": { "publisher.keyword": { "value": "Penguin Books" } } },
                            { "terms": { "categories.keyword": ["Fiction", "Science"] } },
                            { "range": { "release_date": { "gte": "2000-01-01" } } }
                        ]
                    }
                }
            })
        );
        assert!(body.get("size").is_none());
    }

    #[test]
    fn test_full_text_is_passed_through() {
        let raw = r#"name:"Snow Crash" OR author:(Orwell AND -Huxley)"#;
        let query = build_full_text_query(raw);

        assert_eq!(query, SearchQuery::QueryString(raw.to_string()));
        assert_eq!(
            query.to_request_body(),
            json!({ "query": { "query_string": { "query": raw } } })
        );
    }

    #[test]
    fn test_id_lookup_is_bounded_to_one() {
        let body = SearchQuery::Id("9780451524935".to_string()).to_request_body();

        assert_eq!(body["size"], 1);
        assert_eq!(body["query"]["term"]["_id"]["value"], "9780451524935");
    }
}
