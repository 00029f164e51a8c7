//! 猜动物游戏
//!
//! 一轮中所有线索一次性给出，按名称判分。

use crate::models::catalog::{AnimalClueSet, builtin_animals};
use crate::services::games::{GameError, Grade, Phase, answers_match, ensure_submission};
use crate::services::score::ScoreTracker;

pub const GUESS_POINTS: u32 = 25;

#[derive(Debug, Clone)]
pub struct GuessGame {
    animals: Vec<AnimalClueSet>,
    index: usize,
    phase: Phase,
    last_grade: Option<Grade>,
}

impl Default for GuessGame {
    fn default() -> Self {
        Self {
            animals: builtin_animals(),
            index: 0,
            phase: Phase::NotStarted,
            last_grade: None,
        }
    }
}

impl GuessGame {
    pub fn new(animals: Vec<AnimalClueSet>) -> Result<Self, GameError> {
        if animals.is_empty() {
            return Err(GameError::EmptyTable);
        }
        Ok(Self {
            animals,
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
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }

    pub fn current(&self) -> &AnimalClueSet {
        &self.animals[self.index]
    }

    /// 当前动物的全部线索
    pub fn clues(&self) -> &[String] {
        &self.current().clues
    }

    pub fn last_grade(&self) -> Option<&Grade> {
        self.last_grade.as_ref()
    }

    pub fn start(&mut self) -> &AnimalClueSet {
        self.index = 0;
        self.enter_round();
        self.current()
    }

    pub fn start_at(&mut self, index: usize) -> Result<&AnimalClueSet, GameError> {
        if index >= self.animals.len() {
            return Err(GameError::UnknownEntry {
                index,
                len: self.animals.len(),
            });
        }
        self.index = index;
        self.enter_round();
        Ok(self.current())
    }

    pub fn submit(&mut self, guess: &str, score: &mut ScoreTracker) -> Result<Grade, GameError> {
        if self.phase != Phase::InRound {
            return Err(GameError::NotInRound);
        }
        ensure_submission(guess)?;

        let grade = grade_guess(self.current(), guess);
        score.award(grade.points);
        self.phase = Phase::Graded;
        self.last_grade = Some(grade.clone());
        Ok(grade)
    }

    pub fn next(&mut self) -> &AnimalClueSet {
        self.index = (self.index + 1) % self.animals.len();
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

/// 对单个动物判分，答错时揭晓名称和 emoji
pub fn grade_guess(animal: &AnimalClueSet, guess: &str) -> Grade {
    if answers_match(guess, &animal.name) {
        Grade::correct(GUESS_POINTS, "🎉 Correct! Great job! 🎉")
    } else {
        Grade::incorrect(
            format!("😊 Good try! It's a {}! {}", animal.name, animal.emoji),
            Some(format!("{} {}", animal.name, animal.emoji)),
        )
    }
}
