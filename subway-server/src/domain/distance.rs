//! Section distance type.

use std::fmt;

use serde::Serialize;

/// Error returned when a distance is not strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid distance {0}: must be greater than zero")]
pub struct InvalidDistance(pub u64);

/// Length of a section between two adjacent stations.
///
/// Always greater than zero, so every split of a section leaves two
/// non-empty halves.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Distance;
///
/// let total = Distance::new(30).unwrap();
/// let part = Distance::new(10).unwrap();
/// assert_eq!(total.remainder_after(part), Some(Distance::new(20).unwrap()));
///
/// // Nothing left over means the split does not fit
/// assert_eq!(total.remainder_after(total), None);
/// assert!(Distance::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Distance(u64);

impl Distance {
    pub fn new(value: u64) -> Result<Self, InvalidDistance> {
        if value == 0 {
            return Err(InvalidDistance(value));
        }
        Ok(Distance(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// What remains of this distance once `part` is taken out of it.
    ///
    /// Returns `None` unless `part` is strictly shorter.
    pub fn remainder_after(self, part: Distance) -> Option<Distance> {
        self.0
            .checked_sub(part.0)
            .filter(|&rest| rest > 0)
            .map(Distance)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rejected() {
        assert_eq!(Distance::new(0), Err(InvalidDistance(0)));
        assert_eq!(
            InvalidDistance(0).to_string(),
            "invalid distance 0: must be greater than zero"
        );
    }

    #[test]
    fn remainder() {
        let d = |v| Distance::new(v).unwrap();
        assert_eq!(d(30).remainder_after(d(10)), Some(d(20)));
        assert_eq!(d(30).remainder_after(d(29)), Some(d(1)));
        assert_eq!(d(30).remainder_after(d(30)), None);
        assert_eq!(d(30).remainder_after(d(31)), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A successful split always adds back up to the whole
        #[test]
        fn remainder_sums_to_whole(whole in 1u64..10_000, part in 1u64..10_000) {
            let w = Distance::new(whole).unwrap();
            let p = Distance::new(part).unwrap();
            match w.remainder_after(p) {
                Some(rest) => prop_assert_eq!(rest.get() + part, whole),
                None => prop_assert!(part >= whole),
            }
        }
    }
}
