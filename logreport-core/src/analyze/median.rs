use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Streaming median over the most recent `window` samples.
///
/// Keeps the window in arrival order alongside a sorted copy. Each push is a
/// binary-search insert into the sorted copy and, once the window is full, a
/// binary-search removal of the evicted sample.
///
/// The reported median is the element at index `len / 2` of the sorted window,
/// so an even-sized window yields its upper median rather than the mean of the
/// two central values.
#[derive(Debug, Clone)]
pub struct SlidingMedian {
    window: NonZeroUsize,
    arrivals: VecDeque<f64>,
    sorted: Vec<f64>,
}

impl SlidingMedian {
    pub fn new(window: NonZeroUsize) -> Self {
        Self {
            window,
            arrivals: VecDeque::with_capacity(window.get()),
            sorted: Vec::with_capacity(window.get()),
        }
    }

    /// Add a sample and return the median of the current window.
    pub fn push(&mut self, value: f64) -> f64 {
        if self.arrivals.len() == self.window.get() {
            self.evict_oldest();
        }

        self.arrivals.push_back(value);
        let at = self.sorted.partition_point(|v| v.total_cmp(&value).is_le());
        self.sorted.insert(at, value);

        self.sorted[self.sorted.len() / 2]
    }

    fn evict_oldest(&mut self) {
        let Some(old) = self.arrivals.pop_front() else {
            return;
        };
        let at = self.sorted.partition_point(|v| v.total_cmp(&old).is_lt());
        self.sorted.remove(at);
    }

    pub fn median(&self) -> Option<f64> {
        self.sorted.get(self.sorted.len() / 2).copied()
    }

    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}

/// Exact upper median of a complete sample set.
///
/// Same result as feeding every value through a [`SlidingMedian`] whose window
/// covers the whole set, without keeping the intermediate medians around.
pub fn upper_median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    Some(sorted[sorted.len() / 2])
}
