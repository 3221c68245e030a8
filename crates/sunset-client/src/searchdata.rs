//! `searchdata`: impression counts from the usage-statistics worksheet.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::{ClientError, ThoughtSpotClient};

/// Column the usage worksheet reports impression counts under.
pub(crate) const IMPRESSIONS_COLUMN: &str = "Number of Impressions";

#[derive(Debug, Deserialize)]
struct SearchDataResponse {
    #[serde(default)]
    contents: Vec<SearchDataContent>,
}

#[derive(Debug, Deserialize)]
struct SearchDataContent {
    #[serde(default)]
    column_names: Vec<String>,
    #[serde(default)]
    data_rows: Vec<Vec<Value>>,
}

impl ThoughtSpotClient {
    /// Count impressions of `dependent_id` over the last `window_days` days.
    ///
    /// A result with no rows means no recorded views and yields 0.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingField`] when no usage worksheet is set or
    /// rows come back without the impressions column, [`ClientError::Parse`]
    /// for a non-numeric count, or any transport error.
    pub async fn query_usage(
        &self,
        dependent_id: &str,
        window_days: u32,
    ) -> Result<u64, ClientError> {
        let worksheet = self
            .usage_worksheet_id
            .as_deref()
            .ok_or_else(|| ClientError::MissingField("platform.logical_table_id".into()))?;
        let body = json!({
            "query_string": impressions_query(dependent_id, window_days),
            "logical_table_identifier": worksheet,
            "data_format": "COMPACT",
            "record_offset": 0,
            "record_size": 1,
        });
        let resp: SearchDataResponse = self.post_json("/searchdata", &body).await?;
        impressions_from_response(resp)
    }
}

fn impressions_query(dependent_id: &str, window_days: u32) -> String {
    format!(
        "[Answer Book GUID] = '{dependent_id}' count [Impressions] [Timestamp].'last {window_days} days' max [Timestamp]"
    )
}

fn impressions_from_response(resp: SearchDataResponse) -> Result<u64, ClientError> {
    let Some(content) = resp.contents.into_iter().next() else {
        return Ok(0);
    };
    let Some(row) = content.data_rows.into_iter().next() else {
        return Ok(0);
    };
    let idx = content
        .column_names
        .iter()
        .position(|name| name == IMPRESSIONS_COLUMN)
        .ok_or_else(|| ClientError::MissingField(IMPRESSIONS_COLUMN.into()))?;
    let cell = row
        .get(idx)
        .ok_or_else(|| ClientError::MissingField(format!("{IMPRESSIONS_COLUMN} cell")))?;
    count_from_cell(cell)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count_from_cell(cell: &Value) -> Result<u64, ClientError> {
    let parsed = match cell {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ClientError::Parse(format!("impression count {cell}")))
}
