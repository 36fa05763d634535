//! Model/Hardware Correlator
//!
//! Counts hardware per (model, status) for every model of every resolved category.
//!
//! # Request Volume
//!
//! Snipe-IT has no bulk count-by-(model, status) query, so this stage issues one
//! `hardware?limit=1` request per pair and reads only `total`:
//!
//! ```text
//! requests = categories + Σ models(category) × statuses
//! ```
//!
//! This fan-out dominates scrape time. `metrics.hardware_concurrency` bounds how many
//! count requests are in flight; the default of 1 keeps them strictly sequential.
//! Results always come back in category → model → status order, and the stage only
//! returns once every pair has a count.

use super::{Category, CollectionContext, StatusLabel};
use crate::error::{ExporterError, Result};
use futures_util::{stream, StreamExt, TryStreamExt};
use tracing::{debug, info};

/// Number of assets of one model in one status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareCount {
    pub model_name: String,
    /// Opaque; empty when the API has no model number for the model
    pub model_number: String,
    pub status_name: String,
    pub count: u64,
}

/// Correlates models with statuses and counts the hardware in each combination
///
/// One [`HardwareCount`] is produced per (model, status) pair, including pairs
/// whose count is zero. A missing `total` in the count response reads as zero.
///
/// # Arguments
///
/// * `ctx` - Collection context
/// * `categories` - Output of the category resolver
/// * `statuses` - Output of the status resolver
pub async fn correlate_hardware(
    ctx: &CollectionContext<'_>,
    categories: &[Category],
    statuses: &[StatusLabel],
) -> Result<Vec<HardwareCount>> {
    let concurrency = ctx.config.hardware_concurrency.max(1);
    let mut hardware = Vec::new();

    for category in categories {
        let models = ctx.client.models(category.id).await?;
        debug!(
            "Category {} ({}) has {} models",
            category.name,
            category.id,
            models.len()
        );

        // Owned pairs keep the request futures free of borrows into `models`
        let pairs: Vec<(u64, u64, HardwareCount)> = models
            .into_iter()
            .flat_map(|model| {
                statuses.iter().map(move |status| {
                    (
                        model.id,
                        status.id,
                        HardwareCount {
                            model_name: model.name.clone(),
                            model_number: model.model_number.clone(),
                            status_name: status.name.clone(),
                            count: 0,
                        },
                    )
                })
            })
            .collect();

        let client = ctx.client;
        let counts: Vec<HardwareCount> = stream::iter(pairs)
            .map(move |(model_id, status_id, hardware)| async move {
                let count = client.hardware_count(model_id, status_id).await?;
                Ok::<_, ExporterError>(HardwareCount { count, ..hardware })
            })
            .buffered(concurrency)
            .try_collect()
            .await?;

        hardware.extend(counts);
    }

    info!(
        "Correlated {} hardware counts across {} categories",
        hardware.len(),
        categories.len()
    );
    Ok(hardware)
}
