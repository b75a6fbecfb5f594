use seqdraw_core::models::Interval;

/// A Binary Interval Search structure for overlap queries over one
/// chromosome's intervals.
///
/// From the journal article: <https://academic.oup.com/bioinformatics/article/29/1/1/273289>
///
/// The intervals are kept sorted by start, together with independently
/// sorted start and end position arrays. A query binary-searches for
/// the first interval that could overlap (using the longest interval
/// length as a back-off) and then scans forward until starts pass the
/// query end, so a query touches a bounded slice of the list rather
/// than every record.
///
/// # Examples
///
/// ```
/// use seqdraw_features::Bits;
/// use seqdraw_core::models::Interval;
///
/// let bits = Bits::build(vec![
///     Interval { start: 100, end: 150, val: "read1" },
///     Interval { start: 200, end: 250, val: "read2" },
///     Interval { start: 225, end: 275, val: "read3" },
/// ]);
///
/// let overlaps: Vec<_> = bits.find_iter(210, 240).collect();
/// assert_eq!(overlaps.len(), 2); // read2 and read3
/// assert_eq!(bits.count(210, 240), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Bits<T>
where
    T: Eq + Clone + Send + Sync,
{
    intervals: Vec<Interval<T>>,
    starts: Vec<u32>,
    ends: Vec<u32>,
    max_len: u32,
}

impl<T> Bits<T>
where
    T: Eq + Clone + Send + Sync,
{
    /// Build the index from a vector of intervals. The vector is sorted
    /// by start order on the way in.
    pub fn build(mut intervals: Vec<Interval<T>>) -> Self {
        intervals.sort();
        let (mut starts, mut ends): (Vec<_>, Vec<_>) =
            intervals.iter().map(|iv| (iv.start, iv.end)).unzip();
        starts.sort_unstable();
        ends.sort_unstable();
        let max_len = intervals
            .iter()
            .map(|iv| iv.end.saturating_sub(iv.start))
            .max()
            .unwrap_or(0);
        Bits {
            intervals,
            starts,
            ends,
            max_len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterate over every interval that overlaps `[start, end)`.
    #[inline]
    pub fn find_iter(&self, start: u32, end: u32) -> IterFind<'_, T> {
        let probe = start.saturating_sub(self.max_len);
        IterFind {
            inner: self,
            off: self.intervals.partition_point(|iv| iv.start < probe),
            start,
            end,
        }
    }

    /// Count the intervals overlapping `[start, end)` without visiting
    /// them: two binary searches exclude everything that ends at or
    /// before the query start or starts at or after the query end.
    #[inline]
    pub fn count(&self, start: u32, end: u32) -> usize {
        // the +1 accounts for our half-open intervals relative to the
        // closed intervals in the BITS paper
        let ends_before = self.ends.partition_point(|&e| e < start + 1);
        let starts_before_end = self.starts.partition_point(|&s| s < end);
        starts_before_end - ends_before
    }
}

/// Iterator over the intervals in a [`Bits`] that overlap a query
/// range, created by [`Bits::find_iter`].
#[derive(Debug)]
pub struct IterFind<'a, T>
where
    T: Eq + Clone + Send + Sync,
{
    inner: &'a Bits<T>,
    off: usize,
    start: u32,
    end: u32,
}

impl<'a, T> Iterator for IterFind<'a, T>
where
    T: Eq + Clone + Send + Sync,
{
    type Item = &'a Interval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.off < self.inner.intervals.len() {
            let interval = &self.inner.intervals[self.off];
            self.off += 1;
            if interval.overlap(self.start, self.end) {
                return Some(interval);
            } else if interval.start >= self.end {
                break;
            }
        }
        None
    }
}
