//! Count of study periods covering a target time

/// A `(start, end)` period whose bounds may be missing
pub trait Period {
    fn bounds(&self) -> Option<(u32, u32)>;
}

impl Period for (u32, u32) {
    fn bounds(&self) -> Option<(u32, u32)> {
        Some(*self)
    }
}

impl Period for (Option<u32>, Option<u32>) {
    fn bounds(&self) -> Option<(u32, u32)> {
        Some((self.0?, self.1?))
    }
}

/// Number of periods with `start <= target <= end`
///
/// `None` when the target is missing or any period lacks a bound.
pub fn study_schedule<P: Period>(periods: &[P], target: Option<u32>) -> Option<usize> {
    let target = target?;
    let mut count = 0;
    for period in periods {
        let (start, end) = period.bounds()?;
        if start <= target && target <= end {
            count += 1;
        }
    }
    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_covering_periods() {
        let schedule: [(u32, u32); 5] = [(2, 2), (1, 2), (2, 3), (1, 5), (4, 5)];

        assert_eq!(study_schedule(&schedule, Some(5)), Some(2));
        assert_eq!(study_schedule(&schedule, Some(4)), Some(2));
        assert_eq!(study_schedule(&schedule, Some(3)), Some(2));
        assert_eq!(study_schedule(&schedule, Some(2)), Some(4));
        assert_eq!(study_schedule(&schedule, Some(1)), Some(2));
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(study_schedule(&[(1u32, 2u32)], None), None);
        assert_eq!(study_schedule(&[(Some(1u32), None)], Some(1)), None);
        assert_eq!(study_schedule(&[(Some(1u32), Some(3u32))], Some(2)), Some(1));
        assert_eq!(study_schedule::<(u32, u32)>(&[], Some(1)), Some(0));
    }
}
