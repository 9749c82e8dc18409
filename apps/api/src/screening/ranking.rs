//! Ranking: orders candidates by score and summarizes the batch.

use anyhow::{anyhow, Result};
use serde::Serialize;

/// File name offered for the CSV download.
pub const RANKING_CSV_FILE_NAME: &str = "candidate_ranking.csv";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub label: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub rows: Vec<RankedCandidate>,
    /// `None` for an empty batch.
    pub top_candidate: Option<RankedCandidate>,
    /// `None` for an empty batch.
    pub average_score: Option<f64>,
}

/// Sorts descending by score. Ties keep their input order.
pub fn rank(scores: Vec<(String, u32)>) -> Ranking {
    let mut rows: Vec<RankedCandidate> = scores
        .into_iter()
        .map(|(label, score)| RankedCandidate { label, score })
        .collect();
    // sort_by is stable
    rows.sort_by(|a, b| b.score.cmp(&a.score));

    let top_candidate = rows.first().cloned();
    let average_score = if rows.is_empty() {
        None
    } else {
        let total: u64 = rows.iter().map(|r| u64::from(r.score)).sum();
        Some(total as f64 / rows.len() as f64)
    };

    Ranking {
        rows,
        top_candidate,
        average_score,
    }
}

impl Ranking {
    /// Serializes the table as `Candidate,Score` CSV, UTF-8.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["Candidate", "Score"])?;
        for row in &self.rows {
            let score = row.score.to_string();
            writer.write_record([row.label.as_str(), score.as_str()])?;
        }
        writer
            .into_inner()
            .map_err(|e| anyhow!("failed to flush CSV writer: {}", e.error()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, u32)]) -> Vec<(String, u32)> {
        pairs.iter().map(|(l, s)| (l.to_string(), *s)).collect()
    }

    fn labels(ranking: &Ranking) -> Vec<&str> {
        ranking.rows.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn test_stable_descending_sort() {
        let ranking = rank(scores(&[("A", 3), ("B", 5), ("C", 5), ("D", 1)]));
        assert_eq!(labels(&ranking), vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_all_ties_keep_input_order() {
        let ranking = rank(scores(&[("A", 0), ("B", 0), ("C", 0)]));
        assert_eq!(labels(&ranking), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_top_candidate_and_average() {
        let ranking = rank(scores(&[("A", 5), ("B", 5), ("C", 1), ("D", 3)]));
        assert_eq!(
            ranking.top_candidate,
            Some(RankedCandidate {
                label: "A".to_string(),
                score: 5
            })
        );
        assert_eq!(ranking.average_score, Some(3.5));
    }

    #[test]
    fn test_empty_batch_has_no_top_or_average() {
        let ranking = rank(vec![]);
        assert!(ranking.rows.is_empty());
        assert!(ranking.top_candidate.is_none());
        assert!(ranking.average_score.is_none());
    }

    #[test]
    fn test_csv_export() {
        let ranking = rank(scores(&[("Resume 1", 3), ("Resume 2", 5)]));
        let csv = String::from_utf8(ranking.to_csv().unwrap()).unwrap();
        assert_eq!(csv, "Candidate,Score\nResume 2,5\nResume 1,3\n");
    }

    #[test]
    fn test_csv_quotes_labels_with_commas() {
        let ranking = rank(scores(&[("Doe, Jane", 4)]));
        let csv = String::from_utf8(ranking.to_csv().unwrap()).unwrap();
        assert_eq!(csv, "Candidate,Score\n\"Doe, Jane\",4\n");
    }

    #[test]
    fn test_empty_csv_has_header_only() {
        let csv = String::from_utf8(rank(vec![]).to_csv().unwrap()).unwrap();
        assert_eq!(csv, "Candidate,Score\n");
    }
}
