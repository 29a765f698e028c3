//! Session tally across hands.

/// Counts of hands dealt, won, and abandoned in one sitting.
#[derive(Default, Debug)]
pub struct Stats {
    pub hands_dealt: u64,
    pub hands_won: u64,
    pub hands_abandoned: u64,
}

impl Stats {
    pub fn record_deal(&mut self) {
        self.hands_dealt += 1;
    }

    pub fn record_win(&mut self) {
        self.hands_won += 1;
    }

    pub fn record_abandon(&mut self) {
        self.hands_abandoned += 1;
    }

    pub fn win_rate(&self) -> f64 {
        if self.hands_dealt == 0 {
            0.0
        } else {
            self.hands_won as f64 / self.hands_dealt as f64
        }
    }

    /// One-line session summary for the end of a sitting.
    pub fn summary(&self) -> String {
        format!(
            "Session: {} hands dealt, {} won, {} abandoned",
            self.hands_dealt, self.hands_won, self.hands_abandoned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_and_win_rate() {
        let mut stats = Stats::default();
        assert_eq!(stats.win_rate(), 0.0);

        stats.record_deal();
        stats.record_win();
        stats.record_deal();
        stats.record_abandon();

        assert_eq!(stats.hands_dealt, 2);
        assert_eq!(stats.win_rate(), 0.5);
        assert_eq!(stats.summary(), "Session: 2 hands dealt, 1 won, 1 abandoned");
    }
}
