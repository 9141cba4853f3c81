use std::collections::HashMap;

use crate::utils::ordered_pair;

/// Known fares keyed by unordered province pair.
#[derive(Debug, Clone, Default)]
pub struct FareOverrides<'a> {
    fares: HashMap<(&'a str, &'a str), u64>,
}

impl<'a> FareOverrides<'a> {
    pub fn new(routes: &[(&'a str, &'a str, u64)]) -> Self {
        let fares = routes
            .iter()
            .map(|&(a, b, fare)| (ordered_pair(a, b), fare))
            .collect();
        FareOverrides { fares }
    }

    pub fn get(&self, a: &'a str, b: &'a str) -> Option<u64> {
        self.fares.get(&ordered_pair(a, b)).copied()
    }

    pub fn len(&self) -> usize {
        self.fares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fares.is_empty()
    }
}
