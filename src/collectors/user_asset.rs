//! User-Asset Correlator
//!
//! Counts, per user, the checked-out assets of each model seen by the hardware
//! correlator in the same scrape. Enabled by `metrics.report_user_assets`.
//!
//! # Metrics Produced
//! - `snipeit_asset_count_user` - Assets checked out to a user, per model
//!   - Labels: user, model_name, model_number
//!
//! # Correlation Rules
//!
//! - Only model numbers present in this scrape's hardware counts are tallied. Any
//!   other asset is ignored.
//! - An empty model number is never tallied: it cannot identify a model.
//! - When two hardware entries share a model number but differ in model name, the
//!   first name seen is used and the collision is logged once.
//! - Only positive tallies are emitted.

use super::{CollectionContext, HardwareCount};
use crate::error::Result;
use crate::snipeit::types::AssetRow;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

/// Number of assets of one model checked out to one user (always > 0)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAssetCount {
    pub user: String,
    pub model_name: String,
    pub model_number: String,
    pub count: u64,
}

/// Model numbers eligible for user correlation, with their display names
#[derive(Debug, Clone, Default)]
pub struct KnownModels {
    names: BTreeMap<String, String>,
}

impl KnownModels {
    /// Build the set from the hardware correlator's output
    pub fn from_hardware(hardware: &[HardwareCount]) -> Self {
        let mut names: BTreeMap<String, String> = BTreeMap::new();
        let mut reported = HashSet::new();

        for entry in hardware {
            if entry.model_number.is_empty() {
                continue;
            }
            if let Some(first) = names.get(&entry.model_number) {
                if *first != entry.model_name
                    && reported.insert((entry.model_number.as_str(), entry.model_name.as_str()))
                {
                    warn!(
                        "Model number {} is shared by {:?} and {:?}; reporting it as {:?}",
                        entry.model_number, first, entry.model_name, first
                    );
                }
                continue;
            }
            names.insert(entry.model_number.clone(), entry.model_name.clone());
        }

        Self { names }
    }

    pub fn name(&self, model_number: &str) -> Option<&str> {
        self.names.get(model_number).map(String::as_str)
    }

    pub fn contains(&self, model_number: &str) -> bool {
        self.names.contains_key(model_number)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Tally one user's assets against the known models
///
/// Returns one entry per known model number the user holds at least one of,
/// ordered by model number.
pub fn tally_user_assets(
    user: &str,
    assets: &[AssetRow],
    known: &KnownModels,
) -> Vec<UserAssetCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for asset in assets {
        if known.contains(&asset.model_number) {
            *counts.entry(asset.model_number.as_str()).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(model_number, count)| UserAssetCount {
            user: user.to_string(),
            model_name: known.name(model_number).unwrap_or_default().to_string(),
            model_number: model_number.to_string(),
            count,
        })
        .collect()
}

/// Fetches every user's assets and counts them per known model
///
/// Users are processed one at a time, one request each.
pub async fn correlate_user_assets(
    ctx: &CollectionContext<'_>,
    hardware: &[HardwareCount],
) -> Result<Vec<UserAssetCount>> {
    let known = KnownModels::from_hardware(hardware);
    let users = ctx.client.users().await?;
    let mut user_assets = Vec::new();

    for user in &users {
        let assets = ctx.client.user_assets(user.id).await?;
        let tallies = tally_user_assets(&user.username, &assets, &known);
        debug!(
            "User {} holds {} assets across {} known models",
            user.username,
            assets.len(),
            tallies.len()
        );
        user_assets.extend(tallies);
    }

    info!(
        "Correlated {} user asset counts for {} users against {} known models",
        user_assets.len(),
        users.len(),
        known.len()
    );
    Ok(user_assets)
}
