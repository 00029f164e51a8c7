//! 记忆序列游戏
//!
//! 先展示一段 emoji 序列，展示窗口结束后由外壳调用 `reveal_complete`
//! 进入输入阶段；用户每选一个符号追加一次，长度与目标相同时立即按顺序逐个比较。

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::services::games::{GameError, Grade, Phase};
use crate::services::random::RandomSource;
use crate::services::score::ScoreTracker;

pub const MEMORY_POINTS: u32 = 20;

/// 可选符号
pub const SYMBOLS: [&str; 8] = ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"];

/// 序列展示时长，由外壳计时
pub const REVEAL_WINDOW: Duration = Duration::from_secs(3);

const BASE_LENGTH: u32 = 3;
const MAX_LENGTH: u32 = 6;
const POINTS_PER_LEVEL: u32 = 50;

const CORRECT_FEEDBACK: &str = "🎉 Amazing memory! You got it perfect! 🎉";
const INCORRECT_FEEDBACK: &str = "😊 Good try! Let's practice more!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryPhase {
    #[default]
    Waiting,
    Showing,
    Input,
    Feedback,
}

impl MemoryPhase {
    pub fn as_phase(&self) -> Phase {
        match self {
            MemoryPhase::Waiting => Phase::NotStarted,
            MemoryPhase::Showing | MemoryPhase::Input => Phase::InRound,
            MemoryPhase::Feedback => Phase::Graded,
        }
    }
}

/// 一轮的目标序列与用户输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRound {
    pub target_sequence: Vec<String>,
    pub user_sequence: Vec<String>,
}

impl MemoryRound {
    pub fn new(target_sequence: Vec<String>) -> Self {
        Self {
            target_sequence,
            user_sequence: Vec::new(),
        }
    }

    /// 有放回地抽取 `length` 个符号
    pub fn generate(length: usize, rng: &mut dyn RandomSource) -> Self {
        let target = (0..length)
            .map(|_| SYMBOLS[rng.below(SYMBOLS.len())].to_string())
            .collect();
        Self::new(target)
    }

    pub fn is_complete(&self) -> bool {
        self.user_sequence.len() >= self.target_sequence.len()
    }

    /// 顺序敏感的逐个比较
    pub fn is_match(&self) -> bool {
        self.user_sequence.len() == self.target_sequence.len()
            && self
                .target_sequence
                .iter()
                .zip(&self.user_sequence)
                .all(|(target, picked)| target == picked)
    }
}

/// 按当前总分计算序列长度：min(3 + score / 50, 6)
pub fn round_length(score: u32) -> usize {
    (BASE_LENGTH + score / POINTS_PER_LEVEL).min(MAX_LENGTH) as usize
}

pub fn is_symbol(symbol: &str) -> bool {
    SYMBOLS.contains(&symbol)
}

/// 对完整输入判分
pub fn grade_sequence(round: &MemoryRound) -> Grade {
    if round.is_match() {
        Grade::correct(MEMORY_POINTS, CORRECT_FEEDBACK)
    } else {
        Grade::incorrect(
            INCORRECT_FEEDBACK.to_string(),
            Some(round.target_sequence.concat()),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryGame {
    round: Option<MemoryRound>,
    phase: MemoryPhase,
    last_grade: Option<Grade>,
}

impl MemoryGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> MemoryPhase {
        self.phase
    }

    pub fn round(&self) -> Option<&MemoryRound> {
        self.round.as_ref()
    }

    pub fn last_grade(&self) -> Option<&Grade> {
        self.last_grade.as_ref()
    }

    /// 展示阶段才返回目标序列
    pub fn visible_sequence(&self) -> Option<&[String]> {
        match (self.phase, &self.round) {
            (MemoryPhase::Showing, Some(round)) => Some(&round.target_sequence),
            _ => None,
        }
    }

    /// 开始新一轮，难度随当前总分增加
    pub fn start(&mut self, score: &ScoreTracker, rng: &mut dyn RandomSource) -> &MemoryRound {
        let round = MemoryRound::generate(round_length(score.total()), rng);
        self.enter_round(round)
    }

    /// 以给定目标序列开始新一轮；已有的用户输入会被清空
    pub fn begin(&mut self, mut round: MemoryRound) -> Result<&MemoryRound, GameError> {
        if round.target_sequence.is_empty() {
            return Err(GameError::EmptySequence);
        }
        round.user_sequence.clear();
        Ok(self.enter_round(round))
    }

    fn enter_round(&mut self, round: MemoryRound) -> &MemoryRound {
        self.phase = MemoryPhase::Showing;
        self.last_grade = None;
        self.round.insert(round)
    }

    /// 展示窗口结束，开放输入
    pub fn reveal_complete(&mut self) -> Result<(), GameError> {
        if self.phase != MemoryPhase::Showing {
            return Err(GameError::NotInRound);
        }
        self.phase = MemoryPhase::Input;
        Ok(())
    }

    /// 追加一个符号；长度达到目标时判分并返回结果
    pub fn select(
        &mut self,
        symbol: &str,
        score: &mut ScoreTracker,
    ) -> Result<Option<Grade>, GameError> {
        if self.phase != MemoryPhase::Input {
            return Err(GameError::NotAcceptingInput);
        }
        if !is_symbol(symbol) {
            return Err(GameError::UnknownSymbol(symbol.to_string()));
        }
        let round = self.round.as_mut().ok_or(GameError::NotInRound)?;

        round.user_sequence.push(symbol.to_string());
        if round.user_sequence.len() < round.target_sequence.len() {
            return Ok(None);
        }

        let grade = grade_sequence(round);
        score.award(grade.points);
        self.phase = MemoryPhase::Feedback;
        self.last_grade = Some(grade.clone());
        Ok(Some(grade))
    }

    /// 再来一轮
    pub fn next(&mut self, score: &ScoreTracker, rng: &mut dyn RandomSource) -> &MemoryRound {
        self.start(score, rng)
    }

    pub fn back_to_menu(&mut self) {
        self.round = None;
        self.phase = MemoryPhase::Waiting;
        self.last_grade = None;
    }
}
