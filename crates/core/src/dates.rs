//! Day/month/year date formatting shared by storage and the wire format.
//!
//! Dates are kept as [`NaiveDate`] internally and rendered as `DD/MM/YYYY`
//! wherever they cross the HTTP boundary.

use chrono::NaiveDate;

use crate::error::CoreError;

/// `strftime` pattern for rental dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Render a date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `DD/MM/YYYY` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
        CoreError::InvalidInput(format!("date '{raw}' is not in DD/MM/YYYY format: {e}"))
    })
}

/// Serde adapter for `NaiveDate` fields rendered as `DD/MM/YYYY`.
///
/// ```ignore
/// #[serde(with = "ludo_core::dates::day_month_year")]
/// pub rent_date: NaiveDate,
/// ```
pub mod day_month_year {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }

    /// Same as the parent module, for nullable dates.
    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            date: &Option<NaiveDate>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => serializer.serialize_some(&crate::dates::format_date(*date)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveDate>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => crate::dates::parse_date(&raw)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                None => Ok(None),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
