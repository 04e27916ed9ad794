use crate::analyze::parse::ParsedRequest;
use ahash::AHashMap;

/// Running statistics for a single request path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathAccumulator {
    pub path: String,
    /// Every duration seen for this path, in log order.
    pub durations: Vec<f64>,
    pub count: u64,
    pub time_sum: f64,
    pub time_max: f64,
}

impl PathAccumulator {
    fn new(path: String) -> Self {
        Self {
            path,
            durations: Vec::new(),
            count: 0,
            time_sum: 0.0,
            time_max: 0.0,
        }
    }

    fn record(&mut self, duration: f64) {
        self.durations.push(duration);
        self.count += 1;
        self.time_sum += duration;
        self.time_max = self.time_max.max(duration);
    }
}

/// Line and request totals for one log file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParseSummary {
    pub total_lines: u64,
    pub error_lines: u64,
    pub total_request_count: u64,
    pub total_request_time_sum: f64,
}

impl ParseSummary {
    /// Share of unparsable lines, in percent. An empty log has no errors.
    pub fn error_rate(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        self.error_lines as f64 * 100.0 / self.total_lines as f64
    }
}

/// Folds parsed requests into per-path accumulators.
///
/// Paths are kept in the order they were first seen so that ranking ties
/// resolve the same way on every run.
#[derive(Debug, Default)]
pub struct Aggregator {
    index: AHashMap<String, usize>,
    paths: Vec<PathAccumulator>,
    summary: ParseSummary,
}

/// Everything the aggregator learned from one log.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub paths: Vec<PathAccumulator>,
    pub summary: ParseSummary,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingest(&mut self, request: ParsedRequest) {
        self.summary.total_lines += 1;
        self.summary.total_request_count += 1;
        self.summary.total_request_time_sum += request.duration;

        let slot = match self.index.get(&request.path) {
            Some(&slot) => slot,
            None => {
                let slot = self.paths.len();
                self.index.insert(request.path.clone(), slot);
                self.paths.push(PathAccumulator::new(request.path));
                slot
            }
        };

        self.paths[slot].record(request.duration);
    }

    /// Count a line that did not parse.
    pub fn reject(&mut self) {
        self.summary.total_lines += 1;
        self.summary.error_lines += 1;
    }

    pub fn summary(&self) -> &ParseSummary {
        &self.summary
    }

    pub fn get(&self, path: &str) -> Option<&PathAccumulator> {
        self.index.get(path).map(|&slot| &self.paths[slot])
    }

    pub fn finalize(self) -> Aggregation {
        Aggregation {
            paths: self.paths,
            summary: self.summary,
        }
    }
}
