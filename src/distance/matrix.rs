use rayon::prelude::*;
use tracing::{debug, info, trace};

use super::haversine::road_distance_km;
use crate::domain::types::{DistanceMatrix, Province};

/// Build the symmetric road distance matrix for the given provinces.
///
/// Only the upper triangle is computed; the lower triangle mirrors it and the diagonal
/// stays 0.
pub fn create_dm(provinces: &[Province]) -> DistanceMatrix {
    let n = provinces.len();
    info!("Creating distance matrix for {} provinces", n);

    let upper: Vec<Vec<u32>> = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n)
                .map(|j| road_distance_km(&provinces[i].coord, &provinces[j].coord))
                .collect()
        })
        .collect();

    let mut dm: DistanceMatrix = vec![vec![0; n]; n];
    for (i, row) in upper.iter().enumerate() {
        for (offset, &km) in row.iter().enumerate() {
            let j = i + 1 + offset;
            dm[i][j] = km;
            dm[j][i] = km;
        }
    }

    let longest = dm.iter().flatten().max().copied().unwrap_or(0);
    debug!("Longest road distance: {} km", longest);
    print_dist_matrix(&dm);

    dm
}

pub fn print_dist_matrix(dm: &DistanceMatrix) {
    trace!("Distance matrix:");
    for row in dm {
        trace!("{:?}", row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::provinces::{index_of, PROVINCES, PROVINCE_COUNT};

    #[test]
    fn matrix_is_square_symmetric_with_zero_diagonal() {
        let dm = create_dm(&PROVINCES);
        assert_eq!(dm.len(), PROVINCE_COUNT);
        for i in 0..PROVINCE_COUNT {
            assert_eq!(dm[i].len(), PROVINCE_COUNT);
            assert_eq!(dm[i][i], 0);
            for j in 0..PROVINCE_COUNT {
                assert_eq!(dm[i][j], dm[j][i]);
            }
        }
    }

    #[test]
    fn every_distinct_pair_is_apart() {
        let dm = create_dm(&PROVINCES);
        let zero_off_diagonal = (0..PROVINCE_COUNT)
            .flat_map(|i| (0..PROVINCE_COUNT).map(move |j| (i, j)))
            .filter(|&(i, j)| i != j && dm[i][j] == 0)
            .count();
        assert_eq!(zero_off_diagonal, 0);
    }

    #[test]
    fn golden_distances() {
        let dm = create_dm(&PROVINCES);
        let at = |a: &str, b: &str| {
            dm[index_of(&PROVINCES, a).unwrap()][index_of(&PROVINCES, b).unwrap()]
        };
        assert_eq!(at("Hà Nội", "TP. Hồ Chí Minh"), 1480);
        assert_eq!(at("Hà Nội", "Đà Nẵng"), 792);
        assert_eq!(at("Hà Nội", "Hải Phòng"), 122);
        assert_eq!(at("TP. Hồ Chí Minh", "Khánh Hòa"), 416);

        let total: u64 = dm.iter().flatten().map(|&km| u64::from(km)).sum();
        assert_eq!(total, 3_379_810);
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(create_dm(&[]).is_empty());
        assert_eq!(create_dm(&PROVINCES[..1]), vec![vec![0]]);
    }
}
