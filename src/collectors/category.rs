//! Category Resolver

use super::{retain_named, CollectionContext};
use crate::error::Result;
use tracing::info;

/// A category whose name is in the configured allow-list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u64,
    pub name: String,
}

/// Fetches all categories and keeps the ones named in `metrics.asset_categories`
pub async fn resolve_categories(ctx: &CollectionContext<'_>) -> Result<Vec<Category>> {
    let rows = ctx.client.categories().await?;
    let total = rows.len();

    let categories: Vec<Category> =
        retain_named(rows, &ctx.config.asset_categories, |row| row.name.as_str())
            .into_iter()
            .map(|row| Category {
                id: row.id,
                name: row.name,
            })
            .collect();

    info!("Resolved {} of {} categories", categories.len(), total);
    Ok(categories)
}
