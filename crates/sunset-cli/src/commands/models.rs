use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use sunset_core::entities::ModelAsset;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output;

#[derive(Debug, Serialize)]
struct ModelRow<'a> {
    id: &'a str,
    name: &'a str,
    author: Option<&'a str>,
    created: Option<String>,
    age_days: Option<i64>,
}

/// Handle `sunset models`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let models = ctx
        .client
        .search_models()
        .await
        .context("failed to list models")?;

    let now = Utc::now();
    let rows = models.iter().map(|model| row(model, now)).collect::<Vec<_>>();
    output::output_with_rows(&models, &rows, flags.format)
}

fn row(model: &ModelAsset, now: chrono::DateTime<Utc>) -> ModelRow<'_> {
    ModelRow {
        id: &model.id,
        name: &model.name,
        author: model.author_name.as_deref(),
        created: model
            .created_at
            .map(|created| created.format("%Y-%m-%d").to_string()),
        age_days: model.age_days_at(now),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};
    use sunset_core::entities::ModelAsset;

    use super::row;

    #[test]
    fn row_shows_date_and_age() {
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
        let model = ModelAsset {
            id: "m-1".into(),
            name: "Orders".into(),
            author_name: Some("Dana".into()),
            created_at: Some(now - TimeDelta::days(100)),
        };
        let row = row(&model, now);
        assert_eq!(row.created.as_deref(), Some("2025-03-23"));
        assert_eq!(row.age_days, Some(100));
    }

    #[test]
    fn undated_model_has_no_age() {
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
        let model = ModelAsset {
            id: "m-2".into(),
            name: "Old".into(),
            author_name: None,
            created_at: None,
        };
        let row = row(&model, now);
        assert!(row.created.is_none());
        assert!(row.age_days.is_none());
    }
}
