//! Derived statistics over the processing history.
//!
//! Everything here is a read-only view recomputed from the entry list on
//! each render; nothing is maintained incrementally.

use super::models::HistoryEntry;
use crate::transform::TransformMode;
use chrono::{DateTime, Utc};

/// Summary of processing times in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessingTimeStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std_dev: f64,
}

/// A single point of the processing-time chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePoint {
    pub timestamp: DateTime<Utc>,
    pub mode: TransformMode,
    pub processing_time: f64,
}

/// Counts entries per mode.
///
/// Modes appear in the order they are first seen in `entries`; modes with
/// no entries are omitted.
pub fn mode_distribution(entries: &[HistoryEntry]) -> Vec<(TransformMode, usize)> {
    let mut distribution: Vec<(TransformMode, usize)> = Vec::new();

    for entry in entries {
        match distribution.iter_mut().find(|(mode, _)| *mode == entry.mode) {
            Some((_, count)) => *count += 1,
            None => distribution.push((entry.mode, 1)),
        }
    }

    distribution
}

/// Computes min/max/mean/standard deviation of the processing times.
///
/// Returns `None` with fewer than two entries, since a sample standard
/// deviation is undefined there.
pub fn processing_time_stats(entries: &[HistoryEntry]) -> Option<ProcessingTimeStats> {
    if entries.len() < 2 {
        return None;
    }

    let times: Vec<f64> = entries.iter().map(|e| e.processing_time).collect();
    let count = times.len();
    let min = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = times.iter().sum::<f64>() / count as f64;
    let variance = times.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / (count - 1) as f64;

    Some(ProcessingTimeStats {
        count,
        min,
        max,
        mean,
        std_dev: variance.sqrt(),
    })
}

/// Processing times in chronological order (oldest first).
pub fn timeline(entries: &[HistoryEntry]) -> Vec<TimelinePoint> {
    entries
        .iter()
        .rev()
        .map(|entry| TimelinePoint {
            timestamp: entry.timestamp,
            mode: entry.mode,
            processing_time: entry.processing_time,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn entry(mode: TransformMode, millis: u64) -> HistoryEntry {
        HistoryEntry::new(mode, "text", "out", Duration::from_millis(millis))
    }

    #[test]
    fn test_mode_distribution() {
        let entries = vec![
            entry(TransformMode::Reverse, 100),
            entry(TransformMode::Uppercase, 100),
            entry(TransformMode::Reverse, 100),
            entry(TransformMode::Count, 100),
            entry(TransformMode::Reverse, 100),
        ];

        let distribution = mode_distribution(&entries);
        assert_eq!(
            distribution,
            vec![
                (TransformMode::Reverse, 3),
                (TransformMode::Uppercase, 1),
                (TransformMode::Count, 1),
            ]
        );
    }

    #[test]
    fn test_mode_distribution_empty() {
        assert!(mode_distribution(&[]).is_empty());
    }

    #[test]
    fn test_processing_time_stats() {
        let entries = vec![
            entry(TransformMode::Count, 2000),
            entry(TransformMode::Count, 4000),
            entry(TransformMode::Count, 4000),
            entry(TransformMode::Count, 4000),
            entry(TransformMode::Count, 5000),
            entry(TransformMode::Count, 5000),
            entry(TransformMode::Count, 7000),
            entry(TransformMode::Count, 9000),
        ];

        let stats = processing_time_stats(&entries).unwrap();
        assert_eq!(stats.count, 8);
        assert!((stats.min - 2.0).abs() < 1e-9);
        assert!((stats.max - 9.0).abs() < 1e-9);
        assert!((stats.mean - 5.0).abs() < 1e-9);
        // Sample variance is 32 / 7
        assert!((stats.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_processing_time_stats_needs_two_entries() {
        assert!(processing_time_stats(&[]).is_none());
        assert!(processing_time_stats(&[entry(TransformMode::Count, 100)]).is_none());
    }

    #[test]
    fn test_timeline_is_oldest_first() {
        let entries = vec![
            entry(TransformMode::Md5Hash, 300),
            entry(TransformMode::Reverse, 200),
            entry(TransformMode::Uppercase, 100),
        ];

        let points = timeline(&entries);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].mode, TransformMode::Uppercase);
        assert_eq!(points[2].mode, TransformMode::Md5Hash);
    }
}
