//! Cumulative trade statistics

use crate::models::state::{PerformanceStats, RiskState};
use crate::models::trade::TradeOutcome;
use std::fmt;

impl PerformanceStats {
    /// Fold one outcome into the statistics. Failed outcomes only count
    /// toward `total_trades`.
    pub fn record(&mut self, outcome: &TradeOutcome) {
        self.total_trades += 1;

        if let Some(profit) = outcome.profit() {
            self.cumulative_return += profit;
            if profit > 0.0 {
                self.profitable_trades += 1;
                self.best_trade = self.best_trade.max(profit);
            } else {
                self.worst_trade = self.worst_trade.min(profit);
            }
        }

        self.win_rate = self.profitable_trades as f64 / self.total_trades as f64;
        self.average_return = self.cumulative_return / self.total_trades as f64;
    }
}

/// Human-readable performance summary
pub struct PerformanceReport<'a> {
    pub stats: &'a PerformanceStats,
    pub risk: &'a RiskState,
}

impl<'a> PerformanceReport<'a> {
    pub fn new(stats: &'a PerformanceStats, risk: &'a RiskState) -> Self {
        Self { stats, risk }
    }
}

impl fmt::Display for PerformanceReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        writeln!(f, "PERFORMANCE REPORT")?;
        writeln!(f, "{}", "=".repeat(40))?;
        writeln!(f, "Total Trades: {}", s.total_trades)?;
        writeln!(f, "Profitable Trades: {}", s.profitable_trades)?;
        writeln!(f, "Win Rate: {:.1}%", s.win_rate * 100.0)?;
        writeln!(f, "Total Return: {:.2}%", s.cumulative_return * 100.0)?;
        writeln!(f, "Average Return: {:.2}%", s.average_return * 100.0)?;
        writeln!(f, "Best Trade: {:.2}%", s.best_trade * 100.0)?;
        writeln!(f, "Worst Trade: {:.2}%", s.worst_trade * 100.0)?;
        write!(f, "Bot Confidence: {:.1}%", self.risk.confidence * 100.0)
    }
}
