//! Simulation report generation.

use crate::adventurer::RankLabel;
use serde::Serialize;

/// Aggregated attempts for one quest rank against one party rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixCell {
    pub quest_rank: RankLabel,
    pub party_rank: RankLabel,
    pub attempts: u32,
    pub success_rate: f64,
    /// Mean damage per member per attempt
    pub avg_damage: f64,
    /// Share of member outcomes ending in death
    pub death_rate: f64,
    pub injury_rate: f64,
    /// Mean rank change per member per attempt
    pub avg_rank_delta: f64,
    pub avg_reward: f64,
}

/// Monte Carlo results across every quest rank × party rank pair.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixReport {
    pub formula: String,
    pub runs_per_cell: u32,
    pub party_size: usize,
    pub quest_type: String,
    pub cells: Vec<MatrixCell>,
}

impl MatrixReport {
    pub fn cell(&self, quest_rank: RankLabel, party_rank: RankLabel) -> Option<&MatrixCell> {
        self.cells
            .iter()
            .find(|c| c.quest_rank == quest_rank && c.party_rank == party_rank)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 QUEST BALANCE MATRIX\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");
        report.push_str(&format!(
            "Formula: {}   Quest: {}   Party: {}   Runs/cell: {}\n\n",
            self.formula, self.quest_type, self.party_size, self.runs_per_cell
        ));

        let sections: [(&str, fn(&MatrixCell) -> String); 4] = [
            ("SUCCESS RATE", |c| format!("{:>5.1}%", c.success_rate * 100.0)),
            ("DEATH RATE", |c| format!("{:>5.1}%", c.death_rate * 100.0)),
            ("AVG RANK DELTA", |c| format!("{:>+6.1}", c.avg_rank_delta)),
            ("AVG REWARD", |c| format!("{:>6.0}", c.avg_reward)),
        ];
        for (title, render) in sections {
            report.push_str(&format!("── {title} (rows: quest rank, cols: party rank) ──\n"));
            report.push_str("        ");
            for party in RankLabel::ALL {
                report.push_str(&format!("{:>7}", party.as_str()));
            }
            report.push('\n');
            for quest in RankLabel::ALL {
                report.push_str(&format!("  {:<5} ", quest.as_str()));
                for party in RankLabel::ALL {
                    let cell = self.cell(quest, party).map(render).unwrap_or_else(|| "     -".to_string());
                    report.push_str(&format!(" {cell}"));
                }
                report.push('\n');
            }
            report.push('\n');
        }

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let mut flagged = false;
        for cell in &self.cells {
            if cell.quest_rank == cell.party_rank && cell.success_rate < 0.4 {
                report.push_str(&format!(
                    "  ⚠️  {}-rank parties clear only {:.1}% of {}-rank quests\n",
                    cell.party_rank,
                    cell.success_rate * 100.0,
                    cell.quest_rank
                ));
                flagged = true;
            }
            if cell.death_rate > 0.1 {
                report.push_str(&format!(
                    "  ⚠️  {} quests kill {:.1}% of {}-rank members\n",
                    cell.quest_rank,
                    cell.death_rate * 100.0,
                    cell.party_rank
                ));
                flagged = true;
            }
        }
        if !flagged {
            report.push_str("  No outliers.\n");
        }
        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Final state of one simulated guild.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeasonRun {
    pub days: u32,
    pub final_roster: usize,
    /// Head count per rank label, E first
    pub rank_distribution: [usize; 6],
    pub final_money: i64,
    pub final_reputation: i64,
    pub quests_resolved: u32,
    pub quests_succeeded: u32,
    pub deaths: u32,
    pub departures: u32,
}

/// Aggregated results from several guild seasons.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeasonReport {
    pub formula: String,
    pub runs: Vec<SeasonRun>,
    pub avg_roster: f64,
    pub avg_money: f64,
    pub avg_reputation: f64,
    pub avg_deaths: f64,
    pub avg_departures: f64,
    pub success_rate: f64,
    /// Mean head count per rank label, E first
    pub avg_rank_distribution: [f64; 6],
}

impl SeasonReport {
    pub fn from_runs(formula: &str, runs: Vec<SeasonRun>) -> Self {
        let n = runs.len().max(1) as f64;
        let avg = |f: fn(&SeasonRun) -> f64| runs.iter().map(f).sum::<f64>() / n;

        let resolved: u32 = runs.iter().map(|r| r.quests_resolved).sum();
        let succeeded: u32 = runs.iter().map(|r| r.quests_succeeded).sum();
        let mut avg_rank_distribution = [0.0; 6];
        for run in &runs {
            for (slot, count) in avg_rank_distribution.iter_mut().zip(run.rank_distribution) {
                *slot += count as f64 / n;
            }
        }

        Self {
            formula: formula.to_string(),
            avg_roster: avg(|r| r.final_roster as f64),
            avg_money: avg(|r| r.final_money as f64),
            avg_reputation: avg(|r| r.final_reputation as f64),
            avg_deaths: avg(|r| r.deaths as f64),
            avg_departures: avg(|r| r.departures as f64),
            success_rate: succeeded as f64 / resolved.max(1) as f64,
            avg_rank_distribution,
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        let days = self.runs.first().map(|r| r.days).unwrap_or(0);

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    GUILD SEASON REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");
        report.push_str(&format!(
            "Guilds: {}   Days: {}   Formula: {}\n\n",
            self.runs.len(),
            days,
            self.formula
        ));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Money:     {:.0}\n", self.avg_money));
        report.push_str(&format!("  Avg Reputation:      {:.0}\n", self.avg_reputation));
        report.push_str(&format!("  Quest Success Rate:  {:.1}%\n\n", self.success_rate * 100.0));

        report.push_str("── ROSTER ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Roster Size:     {:.1}\n", self.avg_roster));
        report.push_str(&format!("  Avg Deaths:          {:.1}\n", self.avg_deaths));
        report.push_str(&format!("  Avg Departures:      {:.1}\n\n", self.avg_departures));

        report.push_str("── RANK DISTRIBUTION ────────────────────────────────────────────\n");
        for (label, avg) in RankLabel::ALL.iter().zip(self.avg_rank_distribution) {
            let bar: String = "█".repeat((avg * 4.0).round() as usize);
            report.push_str(&format!("  {:<2} {:>5.1} {}\n", label.as_str(), avg, bar));
        }
        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
