//! 谜语游戏

use crate::models::catalog::{Riddle, builtin_riddles};
use crate::services::games::{GameError, Grade, Phase, answers_match, ensure_submission};
use crate::services::score::ScoreTracker;

pub const RIDDLE_POINTS: u32 = 10;

const CORRECT_FEEDBACK: &str = "🎉 Correct! Great job! 🎉";

/// 谜语游戏状态
#[derive(Debug, Clone)]
pub struct RiddleGame {
    riddles: Vec<Riddle>,
    index: usize,
    phase: Phase,
    last_grade: Option<Grade>,
}

impl Default for RiddleGame {
    fn default() -> Self {
        Self {
            riddles: builtin_riddles(),
            index: 0,
            phase: Phase::NotStarted,
            last_grade: None,
        }
    }
}

impl RiddleGame {
    pub fn new(riddles: Vec<Riddle>) -> Result<Self, GameError> {
        if riddles.is_empty() {
            return Err(GameError::EmptyTable);
        }
        Ok(Self {
            riddles,
            ..Self::default()
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.riddles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riddles.is_empty()
    }

    /// 当前谜语
    pub fn current(&self) -> &Riddle {
        &self.riddles[self.index]
    }

    pub fn last_grade(&self) -> Option<&Grade> {
        self.last_grade.as_ref()
    }

    /// 从第一题开始
    pub fn start(&mut self) -> &Riddle {
        self.index = 0;
        self.enter_round();
        self.current()
    }

    /// 从指定题目开始
    pub fn start_at(&mut self, index: usize) -> Result<&Riddle, GameError> {
        if index >= self.riddles.len() {
            return Err(GameError::UnknownEntry {
                index,
                len: self.riddles.len(),
            });
        }
        self.index = index;
        self.enter_round();
        Ok(self.current())
    }

    /// 判分；无论对错都进入已判分状态
    pub fn submit(&mut self, answer: &str, score: &mut ScoreTracker) -> Result<Grade, GameError> {
        if self.phase != Phase::InRound {
            return Err(GameError::NotInRound);
        }
        ensure_submission(answer)?;

        let grade = grade_riddle(self.current(), answer);
        score.award(grade.points);
        self.phase = Phase::Graded;
        self.last_grade = Some(grade.clone());
        Ok(grade)
    }

    /// 下一题，末尾回到第一题
    pub fn next(&mut self) -> &Riddle {
        self.index = (self.index + 1) % self.riddles.len();
        self.enter_round();
        self.current()
    }

    pub fn back_to_menu(&mut self) {
        self.phase = Phase::NotStarted;
        self.last_grade = None;
    }

    fn enter_round(&mut self) {
        self.phase = Phase::InRound;
        self.last_grade = None;
    }
}

/// 对单个谜语判分（不涉及状态，后端校验接口也使用它）
pub fn grade_riddle(riddle: &Riddle, answer: &str) -> Grade {
    if answers_match(answer, &riddle.answer) {
        Grade::correct(RIDDLE_POINTS, CORRECT_FEEDBACK)
    } else {
        Grade::incorrect(
            format!("😊 Good try! The answer is: {}", riddle.answer),
            Some(riddle.answer.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_answer_awards_points() {
        let mut game = RiddleGame::default();
        let mut score = ScoreTracker::new();
        game.start();

        let grade = game.submit("  DOG ", &mut score).unwrap();
        assert!(grade.correct);
        assert_eq!(grade.points, 10);
        assert_eq!(score.total(), 10);
        assert_eq!(game.phase(), Phase::Graded);
    }

    #[test]
    fn test_wrong_answer_reveals() {
        let mut game = RiddleGame::default();
        let mut score = ScoreTracker::new();
        game.start_at(1).unwrap();

        let grade = game.submit("moon", &mut score).unwrap();
        assert!(!grade.correct);
        assert_eq!(grade.reveal.as_deref(), Some("sun"));
        assert!(grade.feedback.contains("sun"));
        assert_eq!(score.total(), 0);
        assert_eq!(game.phase(), Phase::Graded);
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut game = RiddleGame::default();
        game.start_at(game.len() - 1).unwrap();
        game.next();
        assert_eq!(game.index(), 0);
        assert_eq!(game.phase(), Phase::InRound);
    }

    #[test]
    fn test_submit_requires_round() {
        let mut game = RiddleGame::default();
        let mut score = ScoreTracker::new();
        assert_eq!(game.submit("dog", &mut score), Err(GameError::NotInRound));

        game.start();
        assert_eq!(game.submit("   ", &mut score), Err(GameError::EmptySubmission));
        assert_eq!(game.phase(), Phase::InRound);

        game.submit("cat", &mut score).unwrap();
        assert_eq!(game.submit("dog", &mut score), Err(GameError::NotInRound));
    }

    #[test]
    fn test_start_at_out_of_range() {
        let mut game = RiddleGame::default();
        assert_eq!(
            game.start_at(4).unwrap_err(),
            GameError::UnknownEntry { index: 4, len: 4 }
        );
    }

    #[test]
    fn test_back_to_menu() {
        let mut game = RiddleGame::default();
        game.start();
        game.back_to_menu();
        assert_eq!(game.phase(), Phase::NotStarted);
        assert!(game.last_grade().is_none());
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(RiddleGame::new(vec![]).unwrap_err(), GameError::EmptyTable);
    }
}
