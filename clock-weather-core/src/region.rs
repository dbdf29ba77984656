//! Static lookup from city codes and Japanese region names to the English
//! city names the upstream provider expects.

use crate::error::WeatherError;

/// City used when the input matches neither a code nor a region.
pub const DEFAULT_CITY: &str = "Tokyo";

/// One row of the lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub region: &'static str,
    pub city: &'static str,
}

const REGIONS: &[Region] = &[
    Region { code: "016010", region: "北海道", city: "Sapporo" },
    Region { code: "040010", region: "東北", city: "Sendai" },
    Region { code: "130010", region: "関東", city: "Tokyo" },
    Region { code: "230010", region: "中部", city: "Nagoya" },
    Region { code: "270000", region: "近畿", city: "Osaka" },
    Region { code: "340010", region: "中国・四国", city: "Hiroshima" },
    Region { code: "400010", region: "九州", city: "Fukuoka" },
];

pub fn regions() -> &'static [Region] {
    REGIONS
}

/// Resolve a city code or region name to a city name. Unknown input falls
/// back to [`DEFAULT_CITY`].
pub fn resolve_city(input: &str) -> &'static str {
    if let Some(row) = REGIONS.iter().find(|r| r.code == input) {
        return row.city;
    }

    if let Some(row) = REGIONS.iter().find(|r| r.region == input) {
        return row.city;
    }

    tracing::warn!(city_code = input, "Unknown city code, falling back to {DEFAULT_CITY}");
    DEFAULT_CITY
}

/// Validate the raw `cityCode` query values: exactly one, non-empty.
pub fn parse_city_code<S: AsRef<str>>(values: &[S]) -> Result<&str, WeatherError> {
    match values {
        [single] if !single.as_ref().is_empty() => Ok(single.as_ref()),
        _ => Err(WeatherError::InvalidInput),
    }
}
