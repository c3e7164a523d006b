//! AfterShip tracking API version definitions.
//!
//! AfterShip serves the legacy `v4` API under `/v4` and dated releases
//! under `/tracking/<YYYY-MM>`. [`ApiVersion`] selects between them and
//! knows the path prefix for each.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// AfterShip tracking API version.
///
/// # Example
///
/// ```rust
/// use aftership::ApiVersion;
///
/// assert_eq!(ApiVersion::default(), ApiVersion::V4);
/// assert_eq!(ApiVersion::V4.base_path(), "/v4");
///
/// let version: ApiVersion = "2024-04".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2024_04);
/// assert_eq!(version.base_path(), "/tracking/2024-04");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// The legacy `v4` API. Supports slug/tracking-number identifiers on
    /// every tracking endpoint.
    #[default]
    V4,
    /// Dated release 2023-10.
    V2023_10,
    /// Dated release 2024-04.
    V2024_04,
    /// Dated release 2024-07.
    V2024_07,
    /// Dated release 2024-10.
    V2024_10,
    /// Dated release 2025-01.
    V2025_01,
    /// Any other dated release in `YYYY-MM` form.
    Custom(String),
}

impl ApiVersion {
    /// Returns `true` for the legacy `v4` API.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::V4)
    }

    /// Returns the path prefix appended to the endpoint for this version.
    #[must_use]
    pub fn base_path(&self) -> String {
        if self.is_legacy() {
            "/v4".to_string()
        } else {
            format!("/tracking/{self}")
        }
    }

    fn is_dated_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        year.len() == 4
            && month.len() == 2
            && year.chars().all(|c| c.is_ascii_digit())
            && month
                .parse::<u8>()
                .is_ok_and(|month| (1..=12).contains(&month))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V4 => "v4",
            Self::V2023_10 => "2023-10",
            Self::V2024_04 => "2024-04",
            Self::V2024_07 => "2024-07",
            Self::V2024_10 => "2024-10",
            Self::V2025_01 => "2025-01",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "v4" | "4" => Ok(Self::V4),
            "2023-10" => Ok(Self::V2023_10),
            "2024-04" => Ok(Self::V2024_04),
            "2024-07" => Ok(Self::V2024_07),
            "2024-10" => Ok(Self::V2024_10),
            "2025-01" => Ok(Self::V2025_01),
            _ if Self::is_dated_format(&s) => Ok(Self::Custom(s)),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_known_versions() {
        assert_eq!("v4".parse::<ApiVersion>().unwrap(), ApiVersion::V4);
        assert_eq!("V4".parse::<ApiVersion>().unwrap(), ApiVersion::V4);
        assert_eq!(
            "2023-10".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2023_10
        );
        assert_eq!(
            "2025-01".parse::<ApiVersion>().unwrap(),
            ApiVersion::V2025_01
        );
    }

    #[test]
    fn test_api_version_accepts_future_dated_versions() {
        let version: ApiVersion = "2026-07".parse().unwrap();
        assert_eq!(version, ApiVersion::Custom("2026-07".to_string()));
        assert_eq!(version.base_path(), "/tracking/2026-07");
    }

    #[test]
    fn test_api_version_rejects_invalid() {
        assert!("v5".parse::<ApiVersion>().is_err());
        assert!("2024-13".parse::<ApiVersion>().is_err());
        assert!("2024".parse::<ApiVersion>().is_err());
        assert!("latest".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_base_paths() {
        assert_eq!(ApiVersion::V4.base_path(), "/v4");
        assert_eq!(ApiVersion::V2024_10.base_path(), "/tracking/2024-10");
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for version in [
            ApiVersion::V4,
            ApiVersion::V2023_10,
            ApiVersion::V2024_04,
            ApiVersion::V2024_07,
            ApiVersion::V2024_10,
            ApiVersion::V2025_01,
        ] {
            assert_eq!(version.to_string().parse::<ApiVersion>().unwrap(), version);
        }
    }
}
