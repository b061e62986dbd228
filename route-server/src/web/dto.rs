//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    CountryCode, DailyCostLevel, Destination, DestinationId, RegionPreference,
};
use crate::planner::{EliminationRecord, HeldVisas, QueryError, RouteOption, RouteQuery, RouteResponse};

/// Request to plan routes.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlanRoutesRequest {
    /// Passport country codes, e.g. `["TR", "DE"]`
    #[serde(default)]
    pub passports: Vec<String>,

    /// Total trip budget in USD
    pub budget_usd: i64,

    /// Trip length in days
    pub duration_days: i64,

    /// Region preference; "any" when absent
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub has_schengen_visa: bool,

    #[serde(default)]
    pub has_us_visa: bool,

    #[serde(default)]
    pub has_uk_visa: bool,
}

impl PlanRoutesRequest {
    /// The held-visa declarations in this request.
    pub fn held_visas(&self) -> HeldVisas {
        HeldVisas {
            schengen: self.has_schengen_visa,
            us: self.has_us_visa,
            uk: self.has_uk_visa,
        }
    }

    /// Build a validated query, with the region already parsed.
    pub fn to_query(&self, region: RegionPreference) -> Result<RouteQuery, QueryError> {
        RouteQuery::new(
            &self.passports,
            self.budget_usd,
            self.duration_days,
            region,
            self.held_visas(),
        )
    }
}

/// Route plan response.
#[derive(Debug, Serialize)]
pub struct PlanRoutesResponse {
    pub generated_at: DateTime<Utc>,

    /// The normalized query the plan was made for
    pub query: RouteQuery,

    pub options: Vec<RouteOption>,

    pub eliminations: Vec<EliminationRecord>,
}

impl PlanRoutesResponse {
    pub fn new(query: RouteQuery, response: &RouteResponse, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            query,
            options: response.options.clone(),
            eliminations: response.eliminations.clone(),
        }
    }
}

/// Query parameters for listing destinations.
#[derive(Debug, Default, Deserialize)]
pub struct DestinationsRequest {
    pub region: Option<String>,
}

/// A destination in a catalog listing.
#[derive(Debug, Serialize)]
pub struct DestinationResult {
    pub id: DestinationId,
    pub city: String,
    pub country: String,
    pub country_code: CountryCode,
    pub region: String,
    pub daily_cost_level: DailyCostLevel,
    pub min_recommended_days: u32,
    pub max_recommended_days: u32,
}

impl From<&Destination> for DestinationResult {
    fn from(destination: &Destination) -> Self {
        Self {
            id: destination.id,
            city: destination.city.clone(),
            country: destination.country.clone(),
            country_code: destination.country_code,
            region: destination.region.clone(),
            daily_cost_level: destination.daily_cost_level,
            min_recommended_days: destination.min_recommended_days,
            max_recommended_days: destination.max_days(),
        }
    }
}

/// Destination listing response.
#[derive(Debug, Serialize)]
pub struct DestinationsResponse {
    pub region: RegionPreference,
    pub destinations: Vec<DestinationResult>,
}

/// A selectable region preference.
#[derive(Debug, Serialize)]
pub struct RegionResult {
    /// Wire identifier, e.g. "western-europe"
    pub id: &'static str,

    /// Display label, e.g. "Western Europe"
    pub label: String,
}

impl From<RegionPreference> for RegionResult {
    fn from(region: RegionPreference) -> Self {
        Self {
            id: region.as_str(),
            label: region.to_string(),
        }
    }
}

/// Region listing response.
#[derive(Debug, Serialize)]
pub struct RegionsResponse {
    pub regions: Vec<RegionResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DestinationSummary;
    use crate::planner::{RouteKind, RouteStop};
    use crate::domain::BudgetRange;

    #[test]
    fn request_defaults() {
        let req: PlanRoutesRequest =
            serde_json::from_str(r#"{"passports": ["tr"], "budget_usd": 2000, "duration_days": 10}"#)
                .unwrap();

        assert!(req.region.is_none());
        assert_eq!(req.held_visas(), HeldVisas::default());

        let query = req.to_query(RegionPreference::Any).unwrap();
        assert_eq!(query.passports(), &[CountryCode::parse("TR").unwrap()]);
    }

    #[test]
    fn request_reports_invalid_values() {
        let req: PlanRoutesRequest = serde_json::from_str(
            r#"{"passports": ["TR"], "budget_usd": 0, "duration_days": 10, "has_uk_visa": true}"#,
        )
        .unwrap();

        assert!(req.held_visas().uk);
        assert_eq!(
            req.to_query(RegionPreference::Any).unwrap_err(),
            QueryError::NonPositiveBudget(0)
        );
    }

    #[test]
    fn region_result_labels() {
        let any = RegionResult::from(RegionPreference::Any);
        assert_eq!(any.id, "any");
        assert_eq!(any.label, "Any region");

        let west = RegionResult::from(RegionPreference::WesternEurope);
        assert_eq!(west.id, "western-europe");
        assert_eq!(west.label, "Western Europe");
    }

    #[test]
    fn plan_response_serializes_query_and_options() {
        let query = RouteQuery::new(
            ["TR"],
            2000,
            3,
            RegionPreference::Balkans,
            HeldVisas::default(),
        )
        .unwrap();
        let response = RouteResponse {
            options: vec![RouteOption {
                kind: RouteKind::Focus,
                name: "Belgrade Focus".to_string(),
                stops: vec![RouteStop {
                    destination: DestinationSummary {
                        id: DestinationId(1),
                        city: "Belgrade".to_string(),
                        country: "Serbia".to_string(),
                        country_code: CountryCode::parse("RS").unwrap(),
                        region: "Balkans".to_string(),
                    },
                    days: 3,
                    visa_status: "Visa-free".to_string(),
                    best_passport: CountryCode::parse("TR").unwrap(),
                    cost_band: "Low ($35–$70/day)".to_string(),
                    estimated_cost: Some(BudgetRange {
                        min_usd: 105,
                        max_usd: 210,
                    }),
                }],
                selection_reason: "Visa-free with your TR passport.".to_string(),
                estimated_budget: BudgetRange {
                    min_usd: 105,
                    max_usd: 210,
                },
            }],
            eliminations: vec![],
        };

        let body = PlanRoutesResponse::new(query, &response, Utc::now());
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["query"]["passports"][0], "TR");
        assert_eq!(json["query"]["region"], "balkans");
        assert_eq!(json["options"][0]["kind"], "focus");
        assert_eq!(json["options"][0]["stops"][0]["destination"]["city"], "Belgrade");
        assert_eq!(json["options"][0]["stops"][0]["best_passport"], "TR");
        assert_eq!(json["options"][0]["estimated_budget"]["max_usd"], 210);
        assert!(json["generated_at"].is_string());
        assert!(json["eliminations"].as_array().unwrap().is_empty());
    }
}
