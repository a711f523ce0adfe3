use std::collections::BTreeMap;

use crate::entities::{Rack, RackType};
use crate::geometry::primitives::Dimensions;

/// Immutable specification of a rack type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RackTypeSpec {
    pub rack_type: RackType,
    pub dims: Dimensions,
    pub capacity: u32,
}

static CATALOG: [RackTypeSpec; 4] = [
    RackTypeSpec {
        rack_type: RackType::Standard,
        dims: Dimensions {
            width: 4.0,
            height: 8.0,
        },
        capacity: 200,
    },
    RackTypeSpec {
        rack_type: RackType::HighDensity,
        dims: Dimensions {
            width: 3.0,
            height: 10.0,
        },
        capacity: 300,
    },
    RackTypeSpec {
        rack_type: RackType::Freezer,
        dims: Dimensions {
            width: 5.0,
            height: 7.0,
        },
        capacity: 150,
    },
    RackTypeSpec {
        rack_type: RackType::Bulk,
        dims: Dimensions {
            width: 7.0,
            height: 5.0,
        },
        capacity: 100,
    },
];

impl RackTypeSpec {
    pub fn of(rack_type: RackType) -> &'static RackTypeSpec {
        //catalog entries are stored in declaration order of `RackType`
        let spec = &CATALOG[rack_type as usize];
        debug_assert_eq!(spec.rack_type, rack_type);
        spec
    }

    /// The full catalog, in generation order.
    pub fn catalog() -> &'static [RackTypeSpec] {
        &CATALOG
    }
}

/// Requested number of racks per type. Types without an entry count as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RackCounts(BTreeMap<RackType, usize>);

impl RackCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, rack_type: RackType, count: usize) -> Self {
        self.set(rack_type, count);
        self
    }

    pub fn set(&mut self, rack_type: RackType, count: usize) {
        self.0.insert(rack_type, count);
    }

    pub fn get(&self, rack_type: RackType) -> usize {
        self.0.get(&rack_type).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RackType, usize)> + '_ {
        self.0.iter().map(|(rt, n)| (*rt, *n))
    }
}

impl FromIterator<(RackType, usize)> for RackCounts {
    fn from_iter<T: IntoIterator<Item = (RackType, usize)>>(iter: T) -> Self {
        let mut counts = RackCounts::new();
        for (rt, n) in iter {
            counts.set(rt, counts.get(rt) + n);
        }
        counts
    }
}

/// Expands the requested counts into unplaced racks.
///
/// Types are visited in catalog order regardless of how `counts` was built,
/// ids are numbered per type starting from 1: `standard_1`, `standard_2`, ...
/// Counts are unsigned, negative requests have to be rejected when parsing external input.
pub fn generate_racks(counts: &RackCounts) -> Vec<Rack> {
    RackTypeSpec::catalog()
        .iter()
        .flat_map(|spec| {
            (1..=counts.get(spec.rack_type))
                .map(move |i| Rack::new(format!("{}_{}", spec.rack_type, i), spec))
        })
        .collect()
}
