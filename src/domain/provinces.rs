use std::collections::HashSet;
use std::error::Error;

use tracing::debug;

use crate::domain::types::Province;

pub const PROVINCE_COUNT: usize = 63;

/// Provincial capitals, in the canonical row/column order.
pub static PROVINCES: [Province; PROVINCE_COUNT] = [
    Province::new("An Giang", 10.3804, 105.4200),
    Province::new("Bà Rịa - Vũng Tàu", 10.3554, 107.0850),
    Province::new("Bạc Liêu", 9.2804, 105.7200),
    Province::new("Bắc Giang", 21.2670, 106.2000),
    Province::new("Bắc Kạn", 22.1333, 105.8333),
    Province::new("Bắc Ninh", 21.1839, 106.0511),
    Province::new("Bến Tre", 10.2416, 106.3759),
    Province::new("Bình Định", 13.7820, 109.2196),
    Province::new("Bình Dương", 10.9784, 106.6521),
    Province::new("Bình Phước", 11.7512, 106.7235),
    Province::new("Bình Thuận", 10.9333, 108.1000),
    Province::new("Cà Mau", 9.1769, 105.1500),
    Province::new("Cần Thơ", 10.0452, 105.7469),
    Province::new("Cao Bằng", 22.6667, 106.2667),
    Province::new("Đà Nẵng", 16.0471, 108.2068),
    Province::new("Đắk Lắk", 12.7100, 108.2378),
    Province::new("Đắk Nông", 12.0000, 107.6833),
    Province::new("Điện Biên", 21.3833, 103.0167),
    Province::new("Đồng Nai", 10.9574, 106.8413),
    Province::new("Đồng Tháp", 10.4930, 105.6880),
    Province::new("Gia Lai", 13.9833, 108.0000),
    Province::new("Hà Giang", 22.8333, 104.9833),
    Province::new("Hà Nam", 20.5333, 105.9167),
    Province::new("Hà Nội", 21.0285, 105.8048),
    Province::new("Hà Tĩnh", 18.3428, 105.9057),
    Province::new("Hải Dương", 20.9400, 106.3300),
    Province::new("Hải Phòng", 20.8449, 106.6881),
    Province::new("Hậu Giang", 9.7833, 105.4667),
    Province::new("Hòa Bình", 20.8167, 105.3333),
    Province::new("Hưng Yên", 20.6464, 106.0511),
    Province::new("Khánh Hòa", 12.2500, 109.1833),
    Province::new("Kiên Giang", 10.0167, 105.0833),
    Province::new("Kon Tum", 14.3500, 108.0000),
    Province::new("Lai Châu", 22.4000, 103.4500),
    Province::new("Lâm Đồng", 11.9460, 108.4419),
    Province::new("Lạng Sơn", 21.8500, 106.7667),
    Province::new("Lào Cai", 22.4856, 103.9707),
    Province::new("Long An", 10.5333, 106.4167),
    Province::new("Nam Định", 20.4333, 106.1667),
    Province::new("Nghệ An", 18.6766, 105.6813),
    Province::new("Ninh Bình", 20.2500, 105.9750),
    Province::new("Ninh Thuận", 11.5667, 108.9833),
    Province::new("Phú Thọ", 21.4000, 105.2333),
    Province::new("Phú Yên", 13.1000, 109.0833),
    Province::new("Quảng Bình", 17.4667, 106.6000),
    Province::new("Quảng Nam", 15.9000, 108.3333),
    Province::new("Quảng Ngãi", 15.1167, 108.8000),
    Province::new("Quảng Ninh", 20.9500, 107.0833),
    Province::new("Quảng Trị", 16.7500, 107.2000),
    Province::new("Sóc Trăng", 9.6000, 105.9667),
    Province::new("Sơn La", 21.3256, 103.9186),
    Province::new("Tây Ninh", 11.3000, 106.1000),
    Province::new("Thái Bình", 20.4500, 106.3400),
    Province::new("Thái Nguyên", 21.5926, 105.8442),
    Province::new("Thanh Hóa", 19.8000, 105.7667),
    Province::new("Thừa Thiên Huế", 16.4637, 107.5909),
    Province::new("Tiền Giang", 10.3667, 106.3500),
    Province::new("TP. Hồ Chí Minh", 10.8231, 106.6297),
    Province::new("Trà Vinh", 9.9333, 106.3500),
    Province::new("Tuyên Quang", 21.8167, 105.2167),
    Province::new("Vĩnh Long", 10.2500, 105.9667),
    Province::new("Vĩnh Phúc", 21.2978, 105.6049),
    Province::new("Yên Bái", 21.7167, 104.8667),
];

/// Provinces on the North-South railway.
pub const TRAIN_STATIONS: [&str; 20] = [
    "Hà Nội",
    "Nam Định",
    "Thanh Hóa",
    "Nghệ An",
    "Hà Tĩnh",
    "Quảng Bình",
    "Quảng Trị",
    "Thừa Thiên Huế",
    "Đà Nẵng",
    "Quảng Nam",
    "Quảng Ngãi",
    "Bình Định",
    "Phú Yên",
    "Khánh Hòa",
    "Ninh Thuận",
    "Bình Thuận",
    "TP. Hồ Chí Minh",
    "Đồng Nai",
    "Bình Dương",
    "Long An",
];

/// Airport list as published. Several entries are city or airport names rather than
/// provinces and never match a row.
pub const AIRPORTS: [&str; 15] = [
    "Hà Nội",
    "TP. Hồ Chí Minh",
    "Đà Nẵng",
    "Hải Phòng",
    "Cần Thơ",
    "Phú Quốc",
    "Đà Lạt",
    "Nha Trang",
    "Buôn Ma Thuột",
    "Pleiku",
    "Điện Biên",
    "Côn Đảo",
    "Cà Mau",
    "Rạch Giá",
    "Cát Bi",
];

/// Published railway fares (6-berth sleeper, upper tier), VND.
pub const TRAIN_FARES: [(&str, &str, u64); 6] = [
    ("Hà Nội", "TP. Hồ Chí Minh", 1_418_000),
    ("Hà Nội", "Đà Nẵng", 750_000),
    ("TP. Hồ Chí Minh", "Đà Nẵng", 668_000),
    ("Hà Nội", "Nghệ An", 273_000),
    ("Đà Nẵng", "Khánh Hòa", 544_000),
    ("TP. Hồ Chí Minh", "Khánh Hòa", 124_000),
];

/// Average economy airfares, VND.
pub const FLIGHT_FARES: [(&str, &str, u64); 6] = [
    ("Hà Nội", "TP. Hồ Chí Minh", 1_551_000),
    ("Hà Nội", "Đà Nẵng", 1_200_000),
    ("TP. Hồ Chí Minh", "Đà Nẵng", 1_000_000),
    ("TP. Hồ Chí Minh", "Phú Quốc", 1_000_000),
    ("Hà Nội", "Phú Quốc", 1_800_000),
    ("Đà Nẵng", "Nha Trang", 800_000),
];

pub fn index_of(provinces: &[Province], name: &str) -> Option<usize> {
    provinces.iter().position(|p| p.name == name)
}

pub fn names(provinces: &[Province]) -> Vec<&'static str> {
    provinces.iter().map(|p| p.name).collect()
}

/// Marks, per province index, whether the province is part of the service subset.
pub fn service_mask(provinces: &[Province], subset: &[&str]) -> Vec<bool> {
    for name in subset {
        if index_of(provinces, name).is_none() {
            debug!("Service location '{}' is not a province, ignoring", name);
        }
    }

    provinces
        .iter()
        .map(|p| subset.contains(&p.name))
        .collect()
}

/// Checks the coordinate table before any matrix is derived from it.
pub fn validate(provinces: &[Province]) -> Result<(), Box<dyn Error>> {
    if provinces.len() != PROVINCE_COUNT {
        return Err(format!(
            "Expected {} provinces, found {}",
            PROVINCE_COUNT,
            provinces.len()
        )
        .into());
    }

    let mut seen = HashSet::new();
    for p in provinces {
        if !seen.insert(p.name) {
            return Err(format!("Duplicate province name: {}", p.name).into());
        }
        if !(-90.0..=90.0).contains(&p.coord.lat) || !(-180.0..=180.0).contains(&p.coord.lon) {
            return Err(format!(
                "Coordinate out of range for {}: ({}, {})",
                p.name, p.coord.lat, p.coord.lon
            )
            .into());
        }
    }

    debug!("Validated {} provinces", provinces.len());
    Ok(())
}
