use crate::domain::types::PriceMatrix;
use crate::utils::round_to_step;

/// Round every fare to the nearest multiple of `step`.
pub fn round_matrix(fares: &mut PriceMatrix, step: u64) {
    for fare in fares.iter_mut().flatten() {
        *fare = round_to_step(*fare, step);
    }
}

/// Overwrite the same-province cells with a flat fare, whatever the deriver produced.
pub fn force_diagonal(fares: &mut PriceMatrix, fare: u64) {
    for (i, row) in fares.iter_mut().enumerate() {
        row[i] = fare;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_diagonal_overrides_zero_and_nonzero_cells() {
        let mut fares = vec![vec![0, 7], vec![9, 420_000]];
        force_diagonal(&mut fares, 150_000);
        assert_eq!(fares, vec![vec![150_000, 7], vec![9, 150_000]]);
    }

    #[test]
    fn round_matrix_keeps_zero() {
        let mut fares = vec![vec![0, 184_400], vec![184_600, 150_000]];
        round_matrix(&mut fares, 1_000);
        assert_eq!(fares, vec![vec![0, 184_000], vec![185_000, 150_000]]);
    }
}
