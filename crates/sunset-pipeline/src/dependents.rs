//! Dependency resolver.

use sunset_client::{ClientError, DependentGroup, Platform};
use sunset_core::entities::DependentAsset;
use sunset_core::enums::DependentKind;

/// Fetch the dependents of `model_id`, flattened in group order then
/// within-group order.
///
/// `max_count` is forwarded to the platform, which does the truncation.
///
/// # Errors
///
/// Returns the platform error unchanged; the caller drops the model.
pub async fn resolve_dependents<P: Platform>(
    platform: &P,
    model_id: &str,
    max_count: u32,
) -> Result<Vec<DependentAsset>, ClientError> {
    let groups = platform.fetch_dependents(model_id, max_count).await?;
    Ok(flatten_groups(model_id, groups))
}

/// Flatten platform groups into dependents owned by `model_id`.
#[must_use]
pub fn flatten_groups(model_id: &str, groups: Vec<DependentGroup>) -> Vec<DependentAsset> {
    groups
        .into_iter()
        .flat_map(|group| {
            let kind = DependentKind::from_platform_type(&group.platform_type);
            let platform_type = group.platform_type;
            group.headers.into_iter().map(move |header| DependentAsset {
                name: header.name.unwrap_or_else(|| String::from("Unknown")),
                id: header.id,
                kind,
                platform_type: platform_type.clone(),
                owner_model_id: model_id.to_string(),
            })
        })
        .collect()
}
