//! Business directory service.
//!
//! Thin fetch layer over the `/api/businesses` endpoints: a filtered listing
//! and a by-id lookup. Responses arrive in a `{success, data, total}`
//! envelope; an unsuccessful envelope is reported like any other server
//! error.

use reqwest::Client;

use crate::app::api::ApiError;
use crate::app::config::Config;
use crate::app::types::{Business, BusinessListResponse, BusinessResponse};

/// Filter sentinel meaning "no filter".
pub const ALL: &str = "all";

/// Directory listing filters.
#[derive(Debug, Clone, Default)]
pub struct BusinessFilters {
    pub search: String,
    pub industry: String,
    pub location: String,
}

impl BusinessFilters {
    /// Query parameters for the listing request. Empty values and the `all`
    /// sentinel are skipped.
    fn query(&self) -> Vec<(&'static str, &str)> {
        let mut query = Vec::new();
        if !self.search.is_empty() {
            query.push(("search", self.search.as_str()));
        }
        if !self.industry.is_empty() && self.industry != ALL {
            query.push(("industry", self.industry.as_str()));
        }
        if !self.location.is_empty() && self.location != ALL {
            query.push(("location", self.location.as_str()));
        }
        query
    }
}

/// One page of directory results.
#[derive(Debug, Clone, Default)]
pub struct BusinessPage {
    pub businesses: Vec<Business>,
    pub total: u64,
}

/// List businesses matching the filters.
pub async fn list_businesses(
    client: &Client,
    config: &Config,
    filters: &BusinessFilters,
) -> Result<BusinessPage, ApiError> {
    let response = client
        .get(config.api_url("/api/businesses"))
        .query(&filters.query())
        .send()
        .await
        .map_err(|e| ApiError::Network { source: e })?;

    let body: BusinessListResponse = response
        .json()
        .await
        .map_err(|_| ApiError::server("Unexpected response from server"))?;
    if !body.success {
        return Err(ApiError::server(
            body.error.unwrap_or_else(|| "Failed to load businesses".to_string()),
        ));
    }
    Ok(BusinessPage { businesses: body.data, total: body.total })
}

/// Fetch a single business by id.
pub async fn fetch_business(
    client: &Client,
    config: &Config,
    id: i64,
) -> Result<Business, ApiError> {
    let response = client
        .get(config.api_url(&format!("/api/businesses/{id}")))
        .send()
        .await
        .map_err(|e| ApiError::Network { source: e })?;

    let body: BusinessResponse = response
        .json()
        .await
        .map_err(|_| ApiError::server("Unexpected response from server"))?;
    match (body.success, body.data) {
        (true, Some(business)) => Ok(business),
        _ => Err(ApiError::server(
            body.error.unwrap_or_else(|| "Business not found".to_string()),
        )),
    }
}
