use std::cmp::Ordering;

/// Sort a pair so that `(a, b)` and `(b, a)` produce the same key.
pub fn ordered_pair<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Round to the nearest multiple of `step`, halves to the even multiple.
pub fn round_to_step(value: u64, step: u64) -> u64 {
    let quotient = value / step;
    let doubled_remainder = (value % step) * 2;

    let rounded = match doubled_remainder.cmp(&step) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + quotient % 2,
    };

    rounded * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_pair_is_symmetric() {
        assert_eq!(ordered_pair("Hà Nội", "Đà Nẵng"), ordered_pair("Đà Nẵng", "Hà Nội"));
        assert_eq!(ordered_pair(3, 1), (1, 3));
        assert_eq!(ordered_pair(2, 2), (2, 2));
    }

    #[test]
    fn rounds_to_nearest_thousand() {
        assert_eq!(round_to_step(0, 1_000), 0);
        assert_eq!(round_to_step(1_418_000, 1_000), 1_418_000);
        assert_eq!(round_to_step(184_400, 1_000), 184_000);
        assert_eq!(round_to_step(184_600, 1_000), 185_000);
    }

    #[test]
    fn halves_go_to_even() {
        assert_eq!(round_to_step(2_500, 1_000), 2_000);
        assert_eq!(round_to_step(3_500, 1_000), 4_000);
        assert_eq!(round_to_step(500, 1_000), 0);
    }
}
