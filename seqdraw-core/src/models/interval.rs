use std::cmp::Ordering;

/// Represent a range from [start, end)
/// Inclusive start, exclusive of end
#[derive(Eq, Debug, Clone)]
pub struct Interval<T>
where
    T: Eq + Clone + Send + Sync,
{
    pub start: u32,
    pub end: u32,
    pub val: T,
}

impl<T> Interval<T>
where
    T: Eq + Clone + Send + Sync,
{
    /// Check if this interval overlaps the query range.
    #[inline]
    pub fn overlap(&self, start: u32, end: u32) -> bool {
        self.start < end && self.end > start
    }

    /// Number of positions shared with the query range, clamped at 0.
    #[inline]
    pub fn intersect(&self, start: u32, end: u32) -> u32 {
        std::cmp::min(self.end, end).saturating_sub(std::cmp::max(self.start, start))
    }
}

impl<T> Ord for Interval<T>
where
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn cmp(&self, other: &Interval<T>) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            other_ordering => other_ordering,
        }
    }
}

impl<T> PartialOrd for Interval<T>
where
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Interval<T>
where
    T: Eq + Clone + Send + Sync,
{
    #[inline]
    fn eq(&self, other: &Interval<T>) -> bool {
        self.start == other.start && self.end == other.end
    }
}
