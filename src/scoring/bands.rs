//! Grade band tables.
//!
//! A band table maps a measured value (mismatches, percent correct,
//! seconds) to a star grade. Tables are validated on construction:
//! they must start at 0, be contiguous and non-overlapping, and end
//! with an open-ended band, so every value has exactly one grade.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Highest grade a band may award (five stars).
pub const MAX_GRADE: u8 = 5;

/// Star grade, `0..=MAX_GRADE`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Grade(u8);

impl Grade {
    /// Create a grade, rejecting values above `MAX_GRADE`.
    pub fn new(stars: u8) -> Result<Self, ConfigError> {
        if stars > MAX_GRADE {
            return Err(ConfigError::GradeOutOfRange { grade: stars });
        }
        Ok(Self(stars))
    }

    /// Number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} stars", self.0, MAX_GRADE)
    }
}

/// One inclusive range of values and the grade it earns.
///
/// `to: None` means the band extends to `u32::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeBand {
    pub from: u32,
    pub to: Option<u32>,
    pub grade: u8,
}

impl GradeBand {
    /// Closed band `from..=to`.
    #[must_use]
    pub const fn closed(from: u32, to: u32, grade: u8) -> Self {
        Self {
            from,
            to: Some(to),
            grade,
        }
    }

    /// Open-ended band `from..`.
    #[must_use]
    pub const fn open(from: u32, grade: u8) -> Self {
        Self {
            from,
            to: None,
            grade,
        }
    }

    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        value >= self.from && self.to.map_or(true, |to| value <= to)
    }
}

/// Validated, exhaustive band table.
///
/// ## Example
///
/// ```
/// use rust_minigames::scoring::{BandTable, GradeBand};
///
/// let table = BandTable::new(vec![
///     GradeBand::closed(0, 4, 5),
///     GradeBand::closed(5, 9, 4),
///     GradeBand::open(10, 3),
/// ])
/// .unwrap();
///
/// assert_eq!(table.grade_for(7).stars(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GradeBand>", into = "Vec<GradeBand>")]
pub struct BandTable {
    bands: Vec<GradeBand>,
}

impl BandTable {
    /// Build a table. Bands may be given in any order.
    pub fn new(mut bands: Vec<GradeBand>) -> Result<Self, ConfigError> {
        bands.sort_by_key(|b| b.from);
        Self::validate(&bands)?;
        Ok(Self { bands })
    }

    /// Build a table from `(lowest value, grade)` thresholds.
    ///
    /// Each threshold's band runs up to the next threshold. The lowest
    /// threshold must be 0.
    pub fn from_lower_bounds(thresholds: &[(u32, u8)]) -> Result<Self, ConfigError> {
        let mut sorted = thresholds.to_vec();
        sorted.sort_by_key(|&(from, _)| from);

        let bands = sorted
            .iter()
            .enumerate()
            .map(|(i, &(from, grade))| match sorted.get(i + 1) {
                // Equal thresholds become an inverted band, which validation rejects
                Some(&(next, _)) if next > from => GradeBand::closed(from, next - 1, grade),
                Some(_) => GradeBand {
                    from,
                    to: from.checked_sub(1),
                    grade,
                },
                None => GradeBand::open(from, grade),
            })
            .collect();

        Self::new(bands)
    }

    /// Built-in table known to be valid. Checked in debug builds.
    pub(super) fn preset(bands: Vec<GradeBand>) -> Self {
        debug_assert!(Self::validate(&bands).is_ok(), "invalid preset bands");
        Self { bands }
    }

    /// Check that sorted bands cover every `u32` exactly once.
    pub fn validate(bands: &[GradeBand]) -> Result<(), ConfigError> {
        let first = bands.first().ok_or(ConfigError::EmptyBands)?;
        if first.from != 0 {
            return Err(ConfigError::Gap {
                expected: 0,
                found: first.from,
            });
        }

        for band in bands {
            if band.grade > MAX_GRADE {
                return Err(ConfigError::GradeOutOfRange { grade: band.grade });
            }
            if let Some(to) = band.to {
                if to < band.from {
                    return Err(ConfigError::InvertedBand {
                        from: band.from,
                        to,
                    });
                }
            }
        }

        for pair in bands.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            let expected = match prev.to.and_then(|to| to.checked_add(1)) {
                Some(expected) => expected,
                // Previous band already reaches u32::MAX
                None => return Err(ConfigError::Overlap { at: next.from }),
            };
            if next.from < expected {
                return Err(ConfigError::Overlap { at: next.from });
            }
            if next.from > expected {
                return Err(ConfigError::Gap {
                    expected,
                    found: next.from,
                });
            }
        }

        match bands.last().and_then(|b| b.to) {
            Some(last) if last != u32::MAX => Err(ConfigError::NotExhaustive { last }),
            _ => Ok(()),
        }
    }

    /// Grade for a measured value.
    #[must_use]
    pub fn grade_for(&self, value: u32) -> Grade {
        // Validation guarantees exactly one band contains every value
        let band = self
            .bands
            .iter()
            .find(|b| b.contains(value))
            .unwrap_or(&self.bands[self.bands.len() - 1]);
        Grade(band.grade)
    }

    /// Bands in ascending order.
    #[must_use]
    pub fn bands(&self) -> &[GradeBand] {
        &self.bands
    }
}

impl TryFrom<Vec<GradeBand>> for BandTable {
    type Error = ConfigError;

    fn try_from(bands: Vec<GradeBand>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<BandTable> for Vec<GradeBand> {
    fn from(table: BandTable) -> Self {
        table.bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mismatch_table() -> BandTable {
        BandTable::new(vec![
            GradeBand::closed(0, 4, 5),
            GradeBand::closed(5, 9, 4),
            GradeBand::open(10, 3),
        ])
        .unwrap()
    }

    #[test]
    fn test_grade_for() {
        let table = mismatch_table();
        assert_eq!(table.grade_for(0).stars(), 5);
        assert_eq!(table.grade_for(3).stars(), 5);
        assert_eq!(table.grade_for(4).stars(), 5);
        assert_eq!(table.grade_for(5).stars(), 4);
        assert_eq!(table.grade_for(7).stars(), 4);
        assert_eq!(table.grade_for(10).stars(), 3);
        assert_eq!(table.grade_for(12).stars(), 3);
        assert_eq!(table.grade_for(u32::MAX).stars(), 3);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let table = BandTable::new(vec![
            GradeBand::open(10, 3),
            GradeBand::closed(0, 4, 5),
            GradeBand::closed(5, 9, 4),
        ])
        .unwrap();
        assert_eq!(table.bands()[0].from, 0);
        assert_eq!(table, mismatch_table());
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(BandTable::new(vec![]), Err(ConfigError::EmptyBands));
    }

    #[test]
    fn test_must_start_at_zero() {
        let err = BandTable::new(vec![GradeBand::open(1, 5)]).unwrap_err();
        assert_eq!(err, ConfigError::Gap { expected: 0, found: 1 });
    }

    #[test]
    fn test_gap_rejected() {
        let err = BandTable::new(vec![GradeBand::closed(0, 4, 5), GradeBand::open(6, 4)]).unwrap_err();
        assert_eq!(err, ConfigError::Gap { expected: 5, found: 6 });
    }

    #[test]
    fn test_overlap_rejected() {
        let err = BandTable::new(vec![GradeBand::closed(0, 5, 5), GradeBand::open(5, 4)]).unwrap_err();
        assert_eq!(err, ConfigError::Overlap { at: 5 });
    }

    #[test]
    fn test_open_band_in_middle_rejected() {
        let err = BandTable::new(vec![
            GradeBand::open(0, 5),
            GradeBand::open(10, 3),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::Overlap { at: 10 });
    }

    #[test]
    fn test_closed_last_band_rejected() {
        let err = BandTable::new(vec![GradeBand::closed(0, 4, 5), GradeBand::closed(5, 9, 4)]).unwrap_err();
        assert_eq!(err, ConfigError::NotExhaustive { last: 9 });

        // Closed at u32::MAX is still exhaustive
        assert!(BandTable::new(vec![GradeBand::closed(0, u32::MAX, 5)]).is_ok());
    }

    #[test]
    fn test_inverted_band_rejected() {
        let err = BandTable::new(vec![GradeBand::closed(0, 4, 5), GradeBand { from: 5, to: Some(3), grade: 4 }, GradeBand::open(6, 3)]).unwrap_err();
        assert_eq!(err, ConfigError::InvertedBand { from: 5, to: 3 });
    }

    #[test]
    fn test_grade_out_of_range_rejected() {
        let err = BandTable::new(vec![GradeBand::open(0, 6)]).unwrap_err();
        assert_eq!(err, ConfigError::GradeOutOfRange { grade: 6 });
        assert!(Grade::new(6).is_err());
        assert_eq!(Grade::new(5).unwrap().stars(), 5);
    }

    #[test]
    fn test_from_lower_bounds() {
        let table = BandTable::from_lower_bounds(&[(90, 5), (80, 4), (60, 3), (40, 2), (20, 1), (0, 0)]).unwrap();
        assert_eq!(table.bands().len(), 6);
        assert_eq!(table.grade_for(100).stars(), 5);
        assert_eq!(table.grade_for(90).stars(), 5);
        assert_eq!(table.grade_for(89).stars(), 4);
        assert_eq!(table.grade_for(59).stars(), 2);
        assert_eq!(table.grade_for(19).stars(), 0);
    }

    #[test]
    fn test_from_lower_bounds_duplicates_rejected() {
        assert!(BandTable::from_lower_bounds(&[(0, 5), (10, 4), (10, 3)]).is_err());
        assert!(BandTable::from_lower_bounds(&[(5, 5)]).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let json = serde_json::to_string(&mismatch_table()).unwrap();
        let back: BandTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mismatch_table());

        let bad = r#"[{"from":0,"to":4,"grade":5},{"from":6,"to":null,"grade":4}]"#;
        assert!(serde_json::from_str::<BandTable>(bad).is_err());
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::new(3).unwrap().to_string(), "3/5 stars");
    }
}
