//! 计分器
//!
//! 只增不减的会话总分。唯一的归零方式是显式的 `reset`（开始新会话）。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    total: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加分数并返回新的总分
    pub fn award(&mut self, points: u32) -> u32 {
        self.total = self.total.saturating_add(points);
        self.total
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// 新会话
    pub fn reset(&mut self) {
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_award_accumulates() {
        let mut score = ScoreTracker::new();
        assert_eq!(score.award(10), 10);
        assert_eq!(score.award(15), 25);
        assert_eq!(score.award(0), 25);
        assert_eq!(score.total(), 25);
    }

    #[test]
    fn test_monotonic_over_any_award_sequence() {
        let mut score = ScoreTracker::new();
        let mut previous = score.total();
        for points in [10, 0, 25, 20, 15, 0, 10, u32::MAX, 5] {
            let total = score.award(points);
            assert!(total >= previous);
            previous = total;
        }
        assert_eq!(score.total(), u32::MAX);
    }

    #[test]
    fn test_reset_zeroes() {
        let mut score = ScoreTracker::new();
        score.award(40);
        score.reset();
        assert_eq!(score.total(), 0);
    }
}
