//! Shared query parameter types for API handlers.

use ludo_core::error::CoreError;
use ludo_core::rental::RentalFilter;
use ludo_core::types::DbId;
use serde::Deserialize;

/// Query parameters for `GET /rentals` (`?gameId=&customerId=`).
///
/// Values are kept as raw text and only parsed when they decide the filter:
/// `customerId` is never looked at once `gameId` is present. An empty value
/// (`?gameId=`) is treated the same as an absent one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalFilterParams {
    pub game_id: Option<String>,
    pub customer_id: Option<String>,
}

impl RentalFilterParams {
    /// Resolve the listing filter, giving `gameId` precedence.
    pub fn to_filter(&self) -> Result<RentalFilter, CoreError> {
        if let Some(game_id) = parse_id("gameId", self.game_id.as_deref())? {
            return Ok(RentalFilter::Game(game_id));
        }
        let customer_id = parse_id("customerId", self.customer_id.as_deref())?;
        Ok(RentalFilter::from_query(None, customer_id))
    }
}

fn parse_id(name: &str, raw: Option<&str>) -> Result<Option<DbId>, CoreError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<DbId>()
            .map(Some)
            .map_err(|_| CoreError::InvalidInput(format!("{name} must be an integer, got '{s}'"))),
    }
}
