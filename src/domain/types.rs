use std::cmp::max;

/// Road distances in whole kilometres, indexed in province order.
pub type DistanceMatrix = Vec<Vec<u32>>;

/// Fares in VND, indexed in province order.
pub type PriceMatrix = Vec<Vec<u64>>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Province {
    pub name: &'static str,
    pub coord: Coordinate,
}

impl Province {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Province {
            name,
            coord: Coordinate { lat, lon },
        }
    }
}

/// Distance based fare: `max(floor, km * per_km) + surcharge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tariff {
    pub floor: u64,
    pub per_km: u64,
    pub surcharge: u64,
}

impl Tariff {
    pub fn estimate(&self, km: u32) -> u64 {
        max(self.floor, u64::from(km) * self.per_km) + self.surcharge
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Bus,
    Train,
    Flight,
    Taxi,
}

impl TransportMode {
    /// Export order.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Bus,
        TransportMode::Train,
        TransportMode::Flight,
        TransportMode::Taxi,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            TransportMode::Bus => "MA_TRAN_XE_KHACH_63_TINH.csv",
            TransportMode::Train => "MA_TRAN_TAU_HOA_63_TINH.csv",
            TransportMode::Flight => "MA_TRAN_MAY_BAY_63_TINH.csv",
            TransportMode::Taxi => "MA_TRAN_TAXI_63_TINH.csv",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Bus => "bus",
            TransportMode::Train => "train",
            TransportMode::Flight => "flight",
            TransportMode::Taxi => "taxi",
        }
    }

    /// Sparse modes use 0 for province pairs without direct service.
    pub fn is_sparse(&self) -> bool {
        matches!(self, TransportMode::Train | TransportMode::Flight)
    }
}

/// A derived fare matrix together with the province order it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareTable {
    pub mode: TransportMode,
    pub provinces: Vec<&'static str>,
    pub fares: PriceMatrix,
}

impl FareTable {
    pub fn fare_between(&self, from: &str, to: &str) -> Option<u64> {
        let i = self.provinces.iter().position(|&p| p == from)?;
        let j = self.provinces.iter().position(|&p| p == to)?;
        Some(self.fares[i][j])
    }

    pub fn size(&self) -> usize {
        self.fares.len()
    }
}
