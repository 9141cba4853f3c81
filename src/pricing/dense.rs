use tracing::debug;

use super::adjust::{force_diagonal, round_matrix};
use crate::config::constant::{BUS_TARIFF, ROUNDING_STEP, SAME_PROVINCE_FARE, TAXI_TARIFF};
use crate::domain::types::{DistanceMatrix, PriceMatrix, Tariff};

/// Apply one tariff to every cell, diagonal included.
pub fn derive_dense(dm: &DistanceMatrix, tariff: &Tariff) -> PriceMatrix {
    dm.iter()
        .map(|row| row.iter().map(|&km| tariff.estimate(km)).collect())
        .collect()
}

pub fn bus_prices(dm: &DistanceMatrix) -> PriceMatrix {
    debug!("Deriving bus fares with {:?}", BUS_TARIFF);
    let mut fares = derive_dense(dm, &BUS_TARIFF);
    round_matrix(&mut fares, ROUNDING_STEP);
    force_diagonal(&mut fares, SAME_PROVINCE_FARE);
    fares
}

pub fn taxi_prices(dm: &DistanceMatrix) -> PriceMatrix {
    debug!("Deriving taxi fares with {:?}", TAXI_TARIFF);
    let mut fares = derive_dense(dm, &TAXI_TARIFF);
    round_matrix(&mut fares, ROUNDING_STEP);
    force_diagonal(&mut fares, SAME_PROVINCE_FARE);
    fares
}
