pub mod constant {
    use crate::domain::types::Tariff;

    pub(crate) const EARTH_RADIUS_KM: f64 = 6371.0;
    // straight-line to road distance
    pub(crate) const ROAD_FACTOR: f64 = 1.3;

    pub(crate) const ROUNDING_STEP: u64 = 1_000;
    pub(crate) const SAME_PROVINCE_FARE: u64 = 150_000;

    pub(crate) const PREVIEW_SIZE: usize = 10;
    pub(crate) const OUTPUT_DIR: &str = ".";

    pub(crate) const BUS_TARIFF: Tariff = Tariff {
        floor: 100_000,
        per_km: 1_200,
        surcharge: 50_000,
    };
    pub(crate) const TRAIN_TARIFF: Tariff = Tariff {
        floor: 150_000,
        per_km: 800,
        surcharge: 0,
    };
    pub(crate) const FLIGHT_TARIFF: Tariff = Tariff {
        floor: 800_000,
        per_km: 2_000,
        surcharge: 0,
    };
    // 4-seat intercity car, meter start included in the surcharge
    pub(crate) const TAXI_TARIFF: Tariff = Tariff {
        floor: 200_000,
        per_km: 12_000,
        surcharge: 100_000,
    };
}
