use std::cmp::Ordering;
use std::fmt::Display;

/// Float compared with a relative tolerance of [`FPA::ULPS`] units in the last place,
/// see [`float_cmp::approx_eq!()`].
///
/// Used wherever a computed distance meets a threshold, so that a rack sitting exactly on a
/// clearance boundary is not rejected because of rounding. There is no absolute epsilon:
/// values that differ by more than rounding noise are never considered equal.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    pub const ULPS: i64 = 4;
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, ulps = FPA::ULPS)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
