use tracing::debug;

use super::adjust::{force_diagonal, round_matrix};
use super::overrides::FareOverrides;
use crate::config::constant::{FLIGHT_TARIFF, ROUNDING_STEP, SAME_PROVINCE_FARE, TRAIN_TARIFF};
use crate::domain::provinces::{service_mask, AIRPORTS, FLIGHT_FARES, TRAIN_FARES, TRAIN_STATIONS};
use crate::domain::types::{DistanceMatrix, PriceMatrix, Province, Tariff};

/// How a mode with partial coverage prices the pairs it serves.
#[derive(Debug, Clone)]
pub struct ServiceRules<'a> {
    pub subset: &'a [&'a str],
    pub overrides: FareOverrides<'a>,
    pub tariff: Tariff,
    pub exclude_same_province: bool,
}

/// Fares for pairs where both ends are served; every other cell is 0.
///
/// A known fare for the pair wins over the distance estimate.
pub fn derive_sparse(
    provinces: &[Province],
    dm: &DistanceMatrix,
    rules: &ServiceRules<'_>,
) -> PriceMatrix {
    let mask = service_mask(provinces, rules.subset);
    let n = provinces.len();
    let mut fares: PriceMatrix = vec![vec![0; n]; n];

    for i in 0..n {
        for j in 0..n {
            if !(mask[i] && mask[j]) || (rules.exclude_same_province && i == j) {
                continue;
            }
            fares[i][j] = rules
                .overrides
                .get(provinces[i].name, provinces[j].name)
                .unwrap_or_else(|| rules.tariff.estimate(dm[i][j]));
        }
    }

    fares
}

// The forced diagonal is applied even to provinces with no service.
fn finish(mut fares: PriceMatrix) -> PriceMatrix {
    force_diagonal(&mut fares, SAME_PROVINCE_FARE);
    round_matrix(&mut fares, ROUNDING_STEP);
    fares
}

pub fn train_prices(provinces: &[Province], dm: &DistanceMatrix) -> PriceMatrix {
    let rules = ServiceRules {
        subset: &TRAIN_STATIONS,
        overrides: FareOverrides::new(&TRAIN_FARES),
        tariff: TRAIN_TARIFF,
        exclude_same_province: false,
    };
    debug!(
        "Deriving train fares: {} stations, {} known routes",
        rules.subset.len(),
        rules.overrides.len()
    );
    finish(derive_sparse(provinces, dm, &rules))
}

pub fn flight_prices(provinces: &[Province], dm: &DistanceMatrix) -> PriceMatrix {
    let rules = ServiceRules {
        subset: &AIRPORTS,
        overrides: FareOverrides::new(&FLIGHT_FARES),
        tariff: FLIGHT_TARIFF,
        exclude_same_province: true,
    };
    debug!(
        "Deriving flight fares: {} airports, {} known routes",
        rules.subset.len(),
        rules.overrides.len()
    );
    finish(derive_sparse(provinces, dm, &rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [Province; 3] = [
        Province::new("A", 10.0, 106.0),
        Province::new("B", 11.0, 106.0),
        Province::new("C", 21.0, 105.0),
    ];

    fn sample_dm() -> DistanceMatrix {
        vec![vec![0, 150, 1500], vec![150, 0, 1400], vec![1500, 1400, 0]]
    }

    fn rules(exclude_same_province: bool) -> ServiceRules<'static> {
        ServiceRules {
            subset: &["A", "C", "Z"],
            overrides: FareOverrides::new(&[("C", "A", 999_999)]),
            tariff: Tariff {
                floor: 150_000,
                per_km: 800,
                surcharge: 0,
            },
            exclude_same_province,
        }
    }

    #[test]
    fn unserved_pairs_are_zero() {
        let fares = derive_sparse(&SAMPLE, &sample_dm(), &rules(false));
        assert_eq!(fares[0][1], 0);
        assert_eq!(fares[1][2], 0);
        assert_eq!(fares[1][1], 0);
    }

    #[test]
    fn override_applies_in_both_directions() {
        let fares = derive_sparse(&SAMPLE, &sample_dm(), &rules(false));
        assert_eq!(fares[0][2], 999_999);
        assert_eq!(fares[2][0], 999_999);
    }

    #[test]
    fn same_province_is_estimated_unless_excluded() {
        let fares = derive_sparse(&SAMPLE, &sample_dm(), &rules(false));
        assert_eq!(fares[0][0], 150_000);

        let fares = derive_sparse(&SAMPLE, &sample_dm(), &rules(true));
        assert_eq!(fares[0][0], 0);
        assert_eq!(fares[2][2], 0);
    }

    #[test]
    fn finish_forces_diagonal_then_rounds() {
        let fares = finish(derive_sparse(&SAMPLE, &sample_dm(), &rules(true)));
        assert_eq!(fares[1][1], SAME_PROVINCE_FARE);
        assert_eq!(fares[0][2], 1_000_000);
        assert_eq!(fares[0][1], 0);
    }
}
