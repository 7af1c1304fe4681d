use crate::PickerDate;

/// Error type for date bounds construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// Lower bound is after the upper bound.
    #[error("Invalid date bounds: min ({min}) is after max ({max})")]
    MinAfterMax { min: PickerDate, max: PickerDate },
}

/// An optional `[min, max]` window a picker value is kept inside.
/// Either end may be absent; when both are present `min <= max` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateBounds {
    min: Option<PickerDate>,
    max: Option<PickerDate>,
}

impl DateBounds {
    /// Creates bounds with validation.
    ///
    /// # Errors
    /// Returns `BoundsError::MinAfterMax` if both ends are present and
    /// `min > max`.
    pub fn new(min: Option<PickerDate>, max: Option<PickerDate>) -> Result<Self, BoundsError> {
        if let (Some(lo), Some(hi)) = (min, max) {
            if lo > hi {
                return Err(BoundsError::MinAfterMax { min: lo, max: hi });
            }
        }
        Ok(Self { min, max })
    }

    /// Bounds with neither end set; every date is in range.
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Returns the lower bound, if set
    pub const fn min(&self) -> Option<PickerDate> {
        self.min
    }

    /// Returns the upper bound, if set
    pub const fn max(&self) -> Option<PickerDate> {
        self.max
    }

    /// Checks if the window contains a given date
    pub fn contains(&self, date: &PickerDate) -> bool {
        self.min.is_none_or(|lo| lo <= *date) && self.max.is_none_or(|hi| *date <= hi)
    }

    /// Moves an out-of-range date to the nearest end of the window.
    /// In-range dates come back unchanged.
    pub fn clamp(&self, date: PickerDate) -> PickerDate {
        if let Some(lo) = self.min {
            if date < lo {
                return lo;
            }
        }
        if let Some(hi) = self.max {
            if date > hi {
                return hi;
            }
        }
        date
    }
}
