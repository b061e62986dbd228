//! Reference data stores and snapshot loading.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{CountryCode, Destination, RegionPreference, RegionPriceTier, VisaRule};
use crate::planner::RouteQuery;

use super::{ReferenceData, ReferenceError, seed};

/// Source of reference data.
///
/// The three reads are independent, so callers may run them concurrently.
pub trait ReferenceStore {
    /// Active destinations in the preferred region.
    fn active_destinations(
        &self,
        region: RegionPreference,
    ) -> impl Future<Output = Result<Vec<Destination>, ReferenceError>> + Send;

    /// Visa rules whose passport is one of `passports`.
    fn visa_rules_for(
        &self,
        passports: &[CountryCode],
    ) -> impl Future<Output = Result<Vec<VisaRule>, ReferenceError>> + Send;

    /// Every price tier.
    fn price_tiers(&self) -> impl Future<Output = Result<Vec<RegionPriceTier>, ReferenceError>> + Send;
}

/// Read the snapshot a query needs, with all three reads in flight at once.
pub async fn load_snapshot<S: ReferenceStore>(
    store: &S,
    query: &RouteQuery,
) -> Result<ReferenceData, ReferenceError> {
    let (destinations, visa_rules, price_tiers) = tokio::join!(
        store.active_destinations(query.region()),
        store.visa_rules_for(query.passports()),
        store.price_tiers(),
    );

    let snapshot = ReferenceData {
        destinations: destinations?,
        visa_rules: visa_rules?,
        price_tiers: price_tiers?,
    };
    debug!(
        destinations = snapshot.destinations.len(),
        visa_rules = snapshot.visa_rules.len(),
        price_tiers = snapshot.price_tiers.len(),
        "reference snapshot loaded"
    );
    Ok(snapshot)
}

/// Store backed by a catalog held in memory for the life of the process.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    data: Arc<ReferenceData>,
}

impl InMemoryStore {
    /// Wrap a catalog, logging any data-quality gaps.
    pub fn new(data: ReferenceData) -> Self {
        data.report_findings();
        Self {
            data: Arc::new(data),
        }
    }

    /// Store holding the bundled seed catalog.
    pub fn seeded() -> Self {
        Self::new(seed::default_catalog())
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ReferenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data: ReferenceData = serde_json::from_str(&json)?;
        info!(
            path = %path.display(),
            destinations = data.destinations.len(),
            visa_rules = data.visa_rules.len(),
            price_tiers = data.price_tiers.len(),
            "loaded reference catalog"
        );
        Ok(Self::new(data))
    }

    /// The full catalog.
    pub fn catalog(&self) -> &ReferenceData {
        &self.data
    }
}

impl ReferenceStore for InMemoryStore {
    async fn active_destinations(
        &self,
        region: RegionPreference,
    ) -> Result<Vec<Destination>, ReferenceError> {
        Ok(self
            .data
            .destinations
            .iter()
            .filter(|d| d.is_active && region.matches(&d.region))
            .cloned()
            .collect())
    }

    async fn visa_rules_for(&self, passports: &[CountryCode]) -> Result<Vec<VisaRule>, ReferenceError> {
        Ok(self
            .data
            .visa_rules
            .iter()
            .filter(|rule| passports.contains(&rule.passport))
            .cloned()
            .collect())
    }

    async fn price_tiers(&self) -> Result<Vec<RegionPriceTier>, ReferenceError> {
        Ok(self.data.price_tiers.clone())
    }
}
