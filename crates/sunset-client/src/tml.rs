//! `metadata/tml/export`: object definitions and their associated artifacts.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{ClientError, ThoughtSpotClient};

#[derive(Debug, Deserialize)]
struct ExportItem {
    #[serde(default)]
    info: ExportInfo,
    #[serde(default)]
    edoc: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ExportInfo {
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// One exported artifact: a definition file and its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TmlArtifact {
    /// File name, e.g. `Weekly Sales.liveboard.tml` or `alerts.tml`.
    pub artifact_name: String,
    pub content: String,
}

impl ThoughtSpotClient {
    /// Export the definition of `id`.
    ///
    /// With `export_associated` the platform also returns associated
    /// artifacts such as the `alerts.tml` attached to a liveboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response is not a
    /// list of artifacts.
    pub async fn export_definition(
        &self,
        id: &str,
        export_associated: bool,
    ) -> Result<Vec<TmlArtifact>, ClientError> {
        let body = json!({
            "metadata": [{ "identifier": id }],
            "export_associated": export_associated,
            "export_fqn": false,
            "edoc_format": "JSON",
            "export_schema_version": "DEFAULT",
            "export_dependent": false,
            "export_connection_as_dependent": false,
            "all_orgs_override": false,
        });
        let items: Vec<ExportItem> = self.post_json("/metadata/tml/export", &body).await?;
        Ok(artifacts_from_items(items))
    }
}

fn artifacts_from_items(items: Vec<ExportItem>) -> Vec<TmlArtifact> {
    items
        .into_iter()
        .map(|item| TmlArtifact {
            artifact_name: item.info.filename.or(item.info.name).unwrap_or_default(),
            content: item.edoc.unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"[
        {
            "info": {
                "name": "Weekly Sales",
                "filename": "Weekly Sales.liveboard.tml",
                "status": { "status_code": "OK" },
                "type": "liveboard"
            },
            "edoc": "{\"liveboard\": {}}"
        },
        {
            "info": {
                "filename": "ALERTS.tml",
                "status": { "status_code": "OK" }
            },
            "edoc": "{\"alerts\": []}"
        },
        {
            "info": { "name": "orphan" }
        }
    ]"#;

    #[test]
    fn parse_export_response() {
        let items: Vec<ExportItem> = serde_json::from_str(FIXTURE).unwrap();
        let artifacts = artifacts_from_items(items);
        let names: Vec<&str> = artifacts.iter().map(|a| a.artifact_name.as_str()).collect();
        assert_eq!(names, vec!["Weekly Sales.liveboard.tml", "ALERTS.tml", "orphan"]);
        assert_eq!(artifacts[1].content, "{\"alerts\": []}");
        assert!(artifacts[2].content.is_empty());
    }

    #[test]
    fn non_list_response_fails_to_parse() {
        let parsed = serde_json::from_str::<Vec<ExportItem>>(r#"{ "error": "nope" }"#);
        assert!(parsed.is_err());
    }
}
