//! OpenSearch query builders and response parsers.

use serde_json::{json, Map, Value};

use crate::errors::SearchIndexError;
use model_index_shared::{SearchHit, SearchQuery, SearchResponse, DOC_ID_FIELD};

/// Build an OpenSearch request body from a SearchQuery.
///
/// The query text is interpreted with `query_string` syntax so that field
/// clauses such as `model:Widget` work. Terms are combined with AND, which
/// makes a model scoping clause restrict the whole query instead of
/// widening it.
pub fn build_search_query(query: &SearchQuery) -> Value {
    let mut source = vec![DOC_ID_FIELD.to_string()];
    source.extend(query.options.fetch.iter().cloned());

    json!({
        "query": {
            "query_string": {
                "query": query.query,
                "default_operator": "AND"
            }
        },
        "from": query.options.start,
        "size": query.options.len,
        "_source": source
    })
}

/// Parse a search response body into a SearchResponse.
pub fn parse_search_response(body: &Value) -> Result<SearchResponse, SearchIndexError> {
    let hits = body
        .get("hits")
        .ok_or_else(|| SearchIndexError::parse("Response has no hits object"))?;

    // `total` is an object on OpenSearch 1.x+ and a bare number on older clusters
    let total = match hits.get("total") {
        Some(Value::Object(total)) => total.get("value").and_then(Value::as_u64).unwrap_or(0),
        Some(total) => total.as_u64().unwrap_or(0),
        None => 0,
    };

    let hits = hits
        .get("hits")
        .and_then(Value::as_array)
        .map(|hits| hits.iter().filter_map(parse_hit).collect())
        .unwrap_or_default();

    Ok(SearchResponse { total, hits })
}

/// Parse a single hit, skipping hits without an identifier.
fn parse_hit(hit: &Value) -> Option<SearchHit> {
    let doc_id = hit.get("_id").and_then(Value::as_str)?.to_string();
    let score = hit.get("_score").and_then(Value::as_f64).unwrap_or(0.0);

    let mut fields = match hit.get("_source") {
        Some(Value::Object(source)) => source.clone(),
        _ => Map::new(),
    };
    fields.remove(DOC_ID_FIELD);

    Some(SearchHit {
        doc_id,
        score,
        fields,
    })
}

/// Collect the per-item error reasons of a bulk response.
pub(crate) fn bulk_failures(body: &Value) -> Vec<String> {
    if !body.get("errors").and_then(Value::as_bool).unwrap_or(false) {
        return Vec::new();
    }

    body.get("items")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let action = item.get("index")?;
                    let error = action.get("error")?;
                    let id = action.get("_id").and_then(Value::as_str).unwrap_or("?");
                    let reason = error
                        .get("reason")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown reason");
                    Some(format!("{}: {}", id, reason))
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_index_shared::SearchOptions;

    #[test]
    fn test_build_search_query() {
        let options = SearchOptions::default()
            .with_start(10)
            .with_len(5)
            .with_fetch("name");
        let query = SearchQuery::new("foo model:Widget", options);

        let body = build_search_query(&query);

        assert_eq!(body["query"]["query_string"]["query"], "foo model:Widget");
        assert_eq!(body["query"]["query_string"]["default_operator"], "AND");
        assert_eq!(body["from"], 10);
        assert_eq!(body["size"], 5);
        assert_eq!(body["_source"], json!(["docid", "name"]));
    }

    #[test]
    fn test_parse_search_response() {
        let body = json!({
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "hits": [
                    {
                        "_id": "Widget:7",
                        "_score": 1.5,
                        "_source": { "docid": "Widget:7", "name": "Sprocket" }
                    },
                    {
                        "_id": "Widget:9",
                        "_score": 0.5
                    }
                ]
            }
        });

        let response = parse_search_response(&body).unwrap();

        assert_eq!(response.total, 2);
        assert_eq!(response.hits.len(), 2);
        assert_eq!(response.hits[0].doc_id, "Widget:7");
        assert_eq!(response.hits[0].score, 1.5);
        assert_eq!(response.hits[0].fields.get("name"), Some(&json!("Sprocket")));
        assert!(response.hits[0].fields.get("docid").is_none());
        assert!(response.hits[1].fields.is_empty());
    }

    #[test]
    fn test_parse_search_response_numeric_total() {
        let body = json!({ "hits": { "total": 4, "hits": [] } });

        let response = parse_search_response(&body).unwrap();

        assert_eq!(response.total, 4);
        assert!(response.hits.is_empty());
    }

    #[test]
    fn test_parse_search_response_invalid() {
        let body = json!({ "took": 3 });
        assert!(matches!(
            parse_search_response(&body),
            Err(SearchIndexError::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_hit_without_id() {
        let hit = json!({ "_score": 1.0, "_source": { "name": "orphan" } });
        assert!(parse_hit(&hit).is_none());
    }

    #[test]
    fn test_bulk_failures() {
        let body = json!({
            "errors": true,
            "items": [
                { "index": { "_id": "Widget:1", "status": 201 } },
                {
                    "index": {
                        "_id": "Widget:2",
                        "status": 400,
                        "error": { "type": "mapper_parsing_exception", "reason": "failed to parse" }
                    }
                }
            ]
        });

        assert_eq!(bulk_failures(&body), vec!["Widget:2: failed to parse".to_string()]);
    }

    #[test]
    fn test_bulk_failures_none() {
        let body = json!({ "errors": false, "items": [] });
        assert!(bulk_failures(&body).is_empty());
    }
}
