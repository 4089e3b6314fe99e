//! OpenSearch index settings and mappings.

use serde_json::{json, Map, Value};

use model_index_shared::{DOC_ID_FIELD, MODEL_FIELD};

/// Build the index settings and mappings.
///
/// `properties` holds the per-field mappings of the indexed models. The
/// `docid` and `model` envelope fields are always mapped as keywords so that
/// `model:{TypeName}` clauses match exactly.
pub fn get_index_settings(properties: &Map<String, Value>) -> Value {
    let mut mapped = properties.clone();
    mapped.insert(DOC_ID_FIELD.to_string(), json!({ "type": "keyword" }));
    mapped.insert(MODEL_FIELD.to_string(), json!({ "type": "keyword" }));

    json!({
        "settings": {
            "number_of_shards": 1,
            "number_of_replicas": 1
        },
        "mappings": {
            "properties": mapped
        }
    })
}
