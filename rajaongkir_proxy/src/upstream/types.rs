use serde::{Deserialize, Serialize};

/// Parameters of a shipping-cost lookup.
///
/// `origin` and `destination` are RajaOngkir city ids. They are kept as
/// strings because the API accepts them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingCostQuery {
    pub origin: String,
    pub destination: String,
    pub weight: i64,
    pub courier: String,
}

/// One request against the RajaOngkir API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamQuery {
    Provinces,
    AllCities,
    CitiesInProvince { province_id: i64 },
    Subdistricts { city_id: i64 },
    ShippingCost(ShippingCostQuery),
}

impl UpstreamQuery {
    /// Operation name, used as the leading segment of the cache key
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Provinces => "provinces",
            Self::AllCities => "cities",
            Self::CitiesInProvince { .. } => "cities_in_province",
            Self::Subdistricts { .. } => "subdistricts",
            Self::ShippingCost(_) => "shipping_cost",
        }
    }

    /// Deterministic cache key for this query.
    ///
    /// Free-form string parameters are escaped so that `_` only ever appears
    /// as a separator.
    pub fn cache_key(&self) -> String {
        let operation = self.operation();
        match self {
            Self::Provinces | Self::AllCities => operation.to_string(),
            Self::CitiesInProvince { province_id } => format!("{operation}_{province_id}"),
            Self::Subdistricts { city_id } => format!("{operation}_{city_id}"),
            Self::ShippingCost(q) => format!(
                "{operation}_{}_{}_{}_{}",
                escape_key_part(&q.origin),
                escape_key_part(&q.destination),
                q.weight,
                escape_key_part(&q.courier)
            ),
        }
    }

    /// Path below the API base URL
    pub(crate) fn path(&self) -> &'static str {
        match self {
            Self::Provinces => "/province",
            Self::AllCities | Self::CitiesInProvince { .. } => "/city",
            Self::Subdistricts { .. } => "/subdistrict",
            Self::ShippingCost(_) => "/cost",
        }
    }
}

fn escape_key_part(part: &str) -> String {
    urlencoding::encode(part).replace('_', "%5F")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost(origin: &str, destination: &str, weight: i64, courier: &str) -> UpstreamQuery {
        UpstreamQuery::ShippingCost(ShippingCostQuery {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight,
            courier: courier.to_string(),
        })
    }

    #[test]
    fn test_cache_keys() {
        assert_eq!(UpstreamQuery::Provinces.cache_key(), "provinces");
        assert_eq!(UpstreamQuery::AllCities.cache_key(), "cities");
        assert_eq!(
            UpstreamQuery::CitiesInProvince { province_id: 9 }.cache_key(),
            "cities_in_province_9"
        );
        assert_eq!(
            UpstreamQuery::Subdistricts { city_id: 39 }.cache_key(),
            "subdistricts_39"
        );
        assert_eq!(
            cost("1", "2", 1000, "jne").cache_key(),
            "shipping_cost_1_2_1000_jne"
        );
    }

    #[test]
    fn test_identical_parameters_share_a_key() {
        assert_eq!(
            cost("501", "114", 1700, "pos").cache_key(),
            cost("501", "114", 1700, "pos").cache_key()
        );
    }

    #[test]
    fn test_distinct_parameters_never_collide() {
        // Given tuples that would collide under naive "_" joining
        let a = cost("1_2", "3", 1000, "jne");
        let b = cost("1", "2_3", 1000, "jne");

        // Then their keys differ
        assert_ne!(a.cache_key(), b.cache_key());

        assert_ne!(
            UpstreamQuery::CitiesInProvince { province_id: 1 }.cache_key(),
            UpstreamQuery::CitiesInProvince { province_id: 2 }.cache_key()
        );
        assert_ne!(
            UpstreamQuery::CitiesInProvince { province_id: 7 }.cache_key(),
            UpstreamQuery::Subdistricts { city_id: 7 }.cache_key()
        );
    }

    #[test]
    fn test_upstream_paths() {
        assert_eq!(UpstreamQuery::Provinces.path(), "/province");
        assert_eq!(UpstreamQuery::AllCities.path(), "/city");
        assert_eq!(
            UpstreamQuery::CitiesInProvince { province_id: 3 }.path(),
            "/city"
        );
        assert_eq!(UpstreamQuery::Subdistricts { city_id: 3 }.path(), "/subdistrict");
        assert_eq!(cost("1", "2", 1, "tiki").path(), "/cost");
    }
}
