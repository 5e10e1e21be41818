//! Simulation report generation.

use serde::Serialize;

/// Outcome of a single headless game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub ticks: u64,
    pub timed_out: bool,
    pub new_high_score: bool,
}

/// Aggregated results from a batch of games.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_timed_out: u32,
    pub best_score: u32,
    pub avg_score: f64,
    pub avg_ticks: f64,
    /// Times the best score was written to the store.
    pub high_score_saves: u32,
    /// Best score held by the store after the last game.
    pub final_high_score: u32,
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, final_high_score: u32) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;
        let best_score = runs.iter().map(|r| r.score).max().unwrap_or(0);
        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let avg_ticks = runs.iter().map(|r| r.ticks as f64).sum::<f64>() / divisor;
        let high_score_saves = runs.iter().filter(|r| r.new_high_score).count() as u32;

        Self {
            num_runs,
            runs_timed_out,
            best_score,
            avg_score,
            avg_ticks,
            high_score_saves,
            final_high_score,
            run_stats: runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                     SIMULATION RESULTS\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");
        report.push_str(&format!("  Games played:     {}\n", self.num_runs));
        report.push_str(&format!("  Timed out:        {}\n", self.runs_timed_out));
        report.push_str(&format!("  Best score:       {}\n", self.best_score));
        report.push_str(&format!("  Average score:    {:.2}\n", self.avg_score));
        report.push_str(&format!(
            "  Average length:   {:.0} ticks ({:.1}s)\n",
            self.avg_ticks,
            self.avg_ticks / 60.0
        ));
        report.push_str(&format!("  High score saves: {}\n", self.high_score_saves));
        report.push_str(&format!("  Final high score: {}\n", self.final_high_score));
        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u32, ticks: u64, new_high_score: bool) -> RunStats {
        RunStats {
            score,
            ticks,
            timed_out: false,
            new_high_score,
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![run(2, 300, true), run(6, 700, true), run(1, 200, false)];
        let report = SimReport::from_runs(runs, 6);
        assert_eq!(report.num_runs, 3);
        assert_eq!(report.best_score, 6);
        assert!((report.avg_score - 3.0).abs() < 1e-9);
        assert!((report.avg_ticks - 400.0).abs() < 1e-9);
        assert_eq!(report.high_score_saves, 2);
        assert!(report.to_text().contains("Best score:       6"));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new(), 0);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_score, 0.0);
    }

    #[test]
    fn test_json_contains_fields() {
        let report = SimReport::from_runs(vec![run(4, 100, true)], 4);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["best_score"], 4);
        assert_eq!(json["run_stats"][0]["ticks"], 100);
    }
}
