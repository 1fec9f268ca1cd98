use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::domain::extract_domain;

/// Running tables for one batch run. Owned by the driver and lent mutably to
/// each ingest step; reporting only borrows it.
#[derive(Debug, Default)]
pub struct AggregateState {
    pub unique_urls: HashSet<String>,
    pub domain_counts: HashMap<String, u64>,
    pub ip_count: HashMap<String, u64>,
    pub totals: LineTotals,
}

/// Line counters, kept for the whole run in `AggregateState::totals`. A
/// per-file figure is the difference between two snapshots.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LineTotals {
    pub lines_valid: u64,
    pub lines_skipped: u64,
    pub domains_unextractable: u64,
}

impl LineTotals {
    pub fn lines_read(&self) -> u64 {
        self.lines_valid + self.lines_skipped
    }

    pub fn since(&self, earlier: &LineTotals) -> LineTotals {
        LineTotals {
            lines_valid: self.lines_valid - earlier.lines_valid,
            lines_skipped: self.lines_skipped - earlier.lines_skipped,
            domains_unextractable: self.domains_unextractable - earlier.domains_unextractable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Recorded,
    /// URL and IP were counted but the URL had no extractable domain.
    RecordedWithoutDomain,
    /// Fewer than four tab-separated fields; no table was touched.
    Skipped,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one log line with its terminator already removed.
    pub fn record_line(&mut self, line: &str) -> LineOutcome {
        let mut fields = line.split('\t');
        let (Some(ip), Some(raw_url)) = (fields.nth(2), fields.next()) else {
            self.totals.lines_skipped += 1;
            return LineOutcome::Skipped;
        };

        self.totals.lines_valid += 1;

        self.unique_urls.insert(raw_url.to_string());

        let outcome = match extract_domain(raw_url) {
            Some(domain) => {
                *self.domain_counts.entry(domain.to_string()).or_insert(0) += 1;
                LineOutcome::Recorded
            }
            None => {
                self.totals.domains_unextractable += 1;
                LineOutcome::RecordedWithoutDomain
            }
        };

        *self.ip_count.entry(ip.to_string()).or_insert(0) += 1;
        outcome
    }
}

/// Keys of the `k` highest counts, highest first. Equal counts are ordered by
/// key ascending so the output does not depend on map iteration order.
pub fn top_k(counts: &HashMap<String, u64>, k: usize) -> Vec<String> {
    let mut sorted: Vec<(&String, &u64)> = counts.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    sorted
        .into_iter()
        .take(k)
        .map(|(key, _)| key.clone())
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub unique_url_count: usize,
    pub unique_domain_count: usize,
    pub top_domains: Vec<String>,
    pub top_crawlers: Vec<String>,
    pub elapsed: Duration,
}

pub fn summarize(
    state: &AggregateState,
    top_domains: usize,
    top_crawlers: usize,
    started: Instant,
) -> AnalysisResult {
    AnalysisResult {
        unique_url_count: state.unique_urls.len(),
        unique_domain_count: state.domain_counts.len(),
        top_domains: top_k(&state.domain_counts, top_domains),
        top_crawlers: top_k(&state.ip_count, top_crawlers),
        elapsed: started.elapsed(),
    }
}
