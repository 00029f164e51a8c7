//! 游戏引擎
//!
//! 四个互相独立的小游戏，每个都是一个小状态机：
//! `NotStarted → InRound → Graded`，`next` 回到新一轮，`back_to_menu` 回到未开始。
//! 判分时把得分累加到调用方传入的 `ScoreTracker`。

pub mod guess;
pub mod math;
pub mod memory;
pub mod riddle;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use guess::{GuessGame, grade_guess};
pub use math::{MathGame, MathProblem, Operator};
pub use memory::{MemoryGame, MemoryPhase, MemoryRound};
pub use riddle::{RiddleGame, grade_riddle};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("submission is empty")]
    EmptySubmission,

    #[error("no round is in progress")]
    NotInRound,

    #[error("not accepting input right now")]
    NotAcceptingInput,

    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("unknown entry: {index} (table has {len})")]
    UnknownEntry { index: usize, len: usize },

    #[error("data table is empty")]
    EmptyTable,

    #[error("target sequence is empty")]
    EmptySequence,
}

/// 游戏阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    NotStarted,
    InRound,
    Graded,
}

/// 一次判分的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub correct: bool,
    /// 本次获得的分数，答错为 0
    pub points: u32,
    /// 反馈文案
    pub feedback: String,
    /// 答错时揭晓的答案
    pub reveal: Option<String>,
}

impl Grade {
    pub fn correct(points: u32, feedback: &str) -> Self {
        Self {
            correct: true,
            points,
            feedback: feedback.to_string(),
            reveal: None,
        }
    }

    pub fn incorrect(feedback: String, reveal: Option<String>) -> Self {
        Self {
            correct: false,
            points: 0,
            feedback,
            reveal,
        }
    }
}

/// 菜单中的游戏
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Riddle,
    Math,
    Memory,
    Guess,
}

impl GameKind {
    pub const ALL: [GameKind; 4] = [
        GameKind::Riddle,
        GameKind::Math,
        GameKind::Memory,
        GameKind::Guess,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Riddle => "Riddle Time! 🧩",
            GameKind::Math => "Math Adventure! 🔢",
            GameKind::Memory => "Memory Challenge! 🧠",
            GameKind::Guess => "Animal Guessing! 🐾",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameKind::Riddle => "Solve fun riddles and brain teasers!",
            GameKind::Math => "Practice math with fun problems!",
            GameKind::Memory => "Test your memory with emoji patterns!",
            GameKind::Guess => "Guess the animal from clues!",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            GameKind::Riddle => "🧩",
            GameKind::Math => "🔢",
            GameKind::Memory => "🧠",
            GameKind::Guess => "🐾",
        }
    }

    /// 答对时的得分
    pub fn points(&self) -> u32 {
        match self {
            GameKind::Riddle => riddle::RIDDLE_POINTS,
            GameKind::Math => math::MATH_POINTS,
            GameKind::Memory => memory::MEMORY_POINTS,
            GameKind::Guess => guess::GUESS_POINTS,
        }
    }
}

/// 比较用的答案形式：去除首尾空白并转小写
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// 文本答案是否匹配
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    normalize_answer(submitted) == normalize_answer(expected)
}

/// 空白提交在判分前被拒绝
pub fn ensure_submission(text: &str) -> Result<(), GameError> {
    if text.trim().is_empty() {
        Err(GameError::EmptySubmission)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_match_ignores_case_and_whitespace() {
        assert!(answers_match("  DoG \n", "dog"));
        assert!(answers_match("Butterfly", "butterfly"));
        assert!(!answers_match("do g", "dog"));
    }

    #[test]
    fn test_blank_submission_rejected() {
        assert_eq!(ensure_submission(" \t"), Err(GameError::EmptySubmission));
        assert!(ensure_submission("x").is_ok());
    }

    #[test]
    fn test_catalog_points() {
        let points: Vec<u32> = GameKind::ALL.iter().map(|g| g.points()).collect();
        assert_eq!(points, vec![10, 15, 20, 25]);
        assert_eq!(GameKind::Memory.emoji(), "🧠");
    }
}
