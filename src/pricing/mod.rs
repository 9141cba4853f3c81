pub mod adjust;
pub mod dense;
pub mod overrides;
pub mod sparse;

pub use adjust::*;
pub use dense::*;
pub use overrides::*;
pub use sparse::*;

use rayon::prelude::*;
use tracing::info;

use crate::domain::provinces::names;
use crate::domain::types::{DistanceMatrix, FareTable, Province, TransportMode};

pub fn derive_fare_table(
    mode: TransportMode,
    provinces: &[Province],
    dm: &DistanceMatrix,
) -> FareTable {
    let fares = match mode {
        TransportMode::Bus => bus_prices(dm),
        TransportMode::Train => train_prices(provinces, dm),
        TransportMode::Flight => flight_prices(provinces, dm),
        TransportMode::Taxi => taxi_prices(dm),
    };

    let served = fares.iter().flatten().filter(|&&fare| fare > 0).count();
    info!(
        "Derived {} fares: {}x{} ({} nonzero)",
        mode.label(),
        fares.len(),
        fares.len(),
        served
    );

    FareTable {
        mode,
        provinces: names(provinces),
        fares,
    }
}

/// Derive every mode, in export order. The modes share nothing but the read-only
/// distance matrix, so they run in parallel.
pub fn derive_all(provinces: &[Province], dm: &DistanceMatrix) -> Vec<FareTable> {
    TransportMode::ALL
        .par_iter()
        .map(|&mode| derive_fare_table(mode, provinces, dm))
        .collect()
}
