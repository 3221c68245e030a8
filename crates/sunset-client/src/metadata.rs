//! `metadata/search`: catalog listing and dependent lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use sunset_core::entities::ModelAsset;

use crate::{ClientError, ThoughtSpotClient};

const MODEL_TYPE: &str = "LOGICAL_TABLE";
const CATALOG_RECORD_SIZE: u32 = 100_000;

#[derive(Debug, Deserialize)]
struct MetadataSearchItem {
    #[serde(default)]
    metadata_header: Option<MetadataHeader>,
    #[serde(default)]
    dependent_objects: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct MetadataHeader {
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "authorDisplayName", default)]
    author_display_name: Option<String>,
    #[serde(default)]
    created: Option<Value>,
}

/// Header of one dependent object as the platform returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentHeader {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Dependents of one platform type, in the order the platform grouped them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependentGroup {
    pub platform_type: String,
    pub headers: Vec<DependentHeader>,
}

impl ThoughtSpotClient {
    /// List every model in the catalog, in response order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response cannot be parsed.
    pub async fn search_models(&self) -> Result<Vec<ModelAsset>, ClientError> {
        let body = json!({
            "metadata": [{ "type": MODEL_TYPE }],
            "include_details": true,
            "record_offset": 0,
            "record_size": CATALOG_RECORD_SIZE,
        });
        let items: Vec<MetadataSearchItem> = self.post_json("/metadata/search", &body).await?;
        Ok(models_from_items(items))
    }

    /// Fetch the dependents of `model_id`, grouped by platform type.
    ///
    /// An empty result means the model has no dependents.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when the model itself is gone, or
    /// [`ClientError::Parse`] when a dependent header is malformed.
    pub async fn fetch_dependents(
        &self,
        model_id: &str,
        max_count: u32,
    ) -> Result<Vec<DependentGroup>, ClientError> {
        let body = json!({
            "dependent_object_version": "V1",
            "include_auto_created_objects": false,
            "include_dependent_objects": true,
            "dependent_objects_record_size": max_count,
            "include_headers": true,
            "include_details": false,
            "record_offset": 0,
            "record_size": 1,
            "metadata": [{ "type": MODEL_TYPE, "identifier": model_id }],
        });
        let items: Vec<MetadataSearchItem> = self.post_json("/metadata/search", &body).await?;
        dependent_groups_from_items(model_id, items)
    }
}

fn models_from_items(items: Vec<MetadataSearchItem>) -> Vec<ModelAsset> {
    items
        .into_iter()
        .filter_map(|item| {
            let Some(header) = item.metadata_header else {
                tracing::warn!("catalog entry without header skipped");
                return None;
            };
            let Some(id) = header.id.filter(|id| !id.is_empty()) else {
                tracing::warn!(name = ?header.name, "catalog entry without id skipped");
                return None;
            };
            Some(ModelAsset {
                name: header.name.unwrap_or_default(),
                author_name: header.author_display_name,
                created_at: header.created.as_ref().and_then(parse_created),
                id,
            })
        })
        .collect()
}

/// Creation times arrive as epoch milliseconds, sometimes as floats or strings.
#[allow(clippy::cast_possible_truncation)]
fn parse_created(value: &Value) -> Option<DateTime<Utc>> {
    let millis = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    DateTime::from_timestamp_millis(millis)
}

fn dependent_groups_from_items(
    model_id: &str,
    items: Vec<MetadataSearchItem>,
) -> Result<Vec<DependentGroup>, ClientError> {
    let Some(item) = items.into_iter().next() else {
        return Err(ClientError::NotFound(format!("model {model_id}")));
    };
    let groups = match item
        .dependent_objects
        .and_then(|mut by_model| by_model.remove(model_id))
    {
        Some(Value::Object(groups)) => groups,
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(other) => {
            return Err(ClientError::Parse(format!(
                "dependents of {model_id}: expected an object of groups, got {other}"
            )));
        }
    };

    groups
        .into_iter()
        .map(|(platform_type, headers)| {
            let headers: Vec<DependentHeader> = serde_json::from_value(headers).map_err(|e| {
                ClientError::Parse(format!("dependents of {model_id} ({platform_type}): {e}"))
            })?;
            Ok(DependentGroup {
                platform_type,
                headers,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CATALOG_FIXTURE: &str = r#"[
        {
            "metadata_id": "m-1",
            "metadata_type": "LOGICAL_TABLE",
            "metadata_header": {
                "id": "m-1",
                "name": "Retail Sales",
                "authorDisplayName": "Ana Silva",
                "created": 1700000000000
            }
        },
        {
            "metadata_header": {
                "id": "m-2",
                "name": "Inventory",
                "created": 1.7e12
            }
        },
        {
            "metadata_header": {
                "id": "m-3",
                "name": "Undated",
                "created": "yesterday"
            }
        },
        {
            "metadata_header": { "name": "No id" }
        },
        {
            "metadata_id": "orphan"
        }
    ]"#;

    const DEPENDENTS_FIXTURE: &str = r#"[
        {
            "metadata_id": "m-1",
            "dependent_objects": {
                "m-1": {
                    "QUESTION_ANSWER_BOOK": [
                        { "id": "a-2", "name": "Top SKUs" },
                        { "id": "a-1", "name": "Returns" }
                    ],
                    "PINBOARD_ANSWER_BOOK": [
                        { "id": "l-1", "name": "Weekly Sales" }
                    ]
                }
            }
        }
    ]"#;

    #[test]
    fn parse_catalog_response() {
        let items: Vec<MetadataSearchItem> = serde_json::from_str(CATALOG_FIXTURE).unwrap();
        let models = models_from_items(items);

        let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m-1", "m-2", "m-3"]);
        assert_eq!(models[0].author_name.as_deref(), Some("Ana Silva"));
        assert_eq!(
            models[0].created_at.map(|t| t.timestamp_millis()),
            Some(1_700_000_000_000)
        );
        assert_eq!(
            models[1].created_at.map(|t| t.timestamp_millis()),
            Some(1_700_000_000_000)
        );
        assert!(models[2].created_at.is_none());
    }

    #[test]
    fn dependent_groups_keep_platform_order() {
        let items: Vec<MetadataSearchItem> = serde_json::from_str(DEPENDENTS_FIXTURE).unwrap();
        let groups = dependent_groups_from_items("m-1", items).unwrap();

        let types: Vec<&str> = groups.iter().map(|g| g.platform_type.as_str()).collect();
        assert_eq!(types, vec!["QUESTION_ANSWER_BOOK", "PINBOARD_ANSWER_BOOK"]);
        let first_ids: Vec<&str> = groups[0].headers.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(first_ids, vec!["a-2", "a-1"]);
    }

    #[test]
    fn missing_dependent_map_means_no_dependents() {
        let items: Vec<MetadataSearchItem> =
            serde_json::from_str(r#"[{ "metadata_id": "m-9" }]"#).unwrap();
        let groups = dependent_groups_from_items("m-9", items).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn null_dependent_entry_means_no_dependents() {
        let items: Vec<MetadataSearchItem> =
            serde_json::from_str(r#"[{ "dependent_objects": { "m-1": null } }]"#).unwrap();
        let groups = dependent_groups_from_items("m-1", items).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn flat_dependent_list_is_a_parse_error() {
        let items: Vec<MetadataSearchItem> = serde_json::from_str(
            r#"[{ "dependent_objects": { "m-1": [ { "id": "a-1" } ] } }]"#,
        )
        .unwrap();
        let err = dependent_groups_from_items("m-1", items).unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn scalar_dependent_entry_is_a_parse_error() {
        let items: Vec<MetadataSearchItem> =
            serde_json::from_str(r#"[{ "dependent_objects": { "m-1": "garbage" } }]"#).unwrap();
        let err = dependent_groups_from_items("m-1", items).unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }

    #[test]
    fn empty_response_means_model_not_found() {
        let err = dependent_groups_from_items("m-404", Vec::new()).unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[test]
    fn dependent_without_id_is_a_parse_error() {
        let items: Vec<MetadataSearchItem> = serde_json::from_str(
            r#"[{ "dependent_objects": { "m-1": { "QUESTION_ANSWER_BOOK": [ { "name": "?" } ] } } }]"#,
        )
        .unwrap();
        let err = dependent_groups_from_items("m-1", items).unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
    }
}
