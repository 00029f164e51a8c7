//! 算术游戏
//!
//! 每轮生成一道新题：加法两数均在 [1,20]，减法被减数在 [10,29]、减数在
//! [1,被减数]（结果不为负），乘法两数均在 [1,10]。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::games::{GameError, Grade, Phase, ensure_submission};
use crate::services::random::RandomSource;
use crate::services::score::ScoreTracker;

pub const MATH_POINTS: u32 = 15;

const CORRECT_FEEDBACK: &str = "🎉 Excellent! You got it right! 🎉";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    pub const ALL: [Operator; 3] = [Operator::Add, Operator::Subtract, Operator::Multiply];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
        }
    }
}

/// 一道算术题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathProblem {
    pub operand_a: i64,
    pub operand_b: i64,
    pub operator: Operator,
}

impl MathProblem {
    pub fn new(operand_a: i64, operand_b: i64, operator: Operator) -> Self {
        Self {
            operand_a,
            operand_b,
            operator,
        }
    }

    /// 随机出题
    pub fn generate(rng: &mut dyn RandomSource) -> Self {
        let operator = Operator::ALL[rng.below(Operator::ALL.len())];
        let (a, b) = match operator {
            Operator::Add => (rng.between(1, 20), rng.between(1, 20)),
            Operator::Subtract => {
                let a = 10 + rng.below(20) as i64;
                (a, rng.between(1, a))
            }
            Operator::Multiply => (rng.between(1, 10), rng.between(1, 10)),
        };
        Self::new(a, b, operator)
    }

    /// 正确结果，按 i128 计算，任意 i64 操作数都不会溢出
    pub fn answer(&self) -> i128 {
        let (a, b) = (i128::from(self.operand_a), i128::from(self.operand_b));
        match self.operator {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
        }
    }
}

impl fmt::Display for MathProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.operand_a,
            self.operator.symbol(),
            self.operand_b
        )
    }
}

/// 解析输入开头的整数：跳过前导空白，可选正负号，随后至少一位数字，
/// 数字之后的内容忽略（"10 apples" 解析为 10）。
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// 对单道题判分；无法解析的输入视为答错
pub fn grade_math(problem: &MathProblem, text: &str) -> Grade {
    let expected = problem.answer();
    match parse_leading_integer(text) {
        Some(value) if i128::from(value) == expected => Grade::correct(MATH_POINTS, CORRECT_FEEDBACK),
        _ => Grade::incorrect(
            format!("😊 Good try! The answer is: {}", expected),
            Some(expected.to_string()),
        ),
    }
}

/// 算术游戏状态
#[derive(Debug, Clone, Default)]
pub struct MathGame {
    problem: Option<MathProblem>,
    phase: Phase,
    last_grade: Option<Grade>,
}

impl MathGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn problem(&self) -> Option<&MathProblem> {
        self.problem.as_ref()
    }

    pub fn last_grade(&self) -> Option<&Grade> {
        self.last_grade.as_ref()
    }

    /// 进入新一轮并生成题目
    pub fn start(&mut self, rng: &mut dyn RandomSource) -> MathProblem {
        self.begin(MathProblem::generate(rng))
    }

    /// 以给定题目进入新一轮
    pub fn begin(&mut self, problem: MathProblem) -> MathProblem {
        self.problem = Some(problem);
        self.phase = Phase::InRound;
        self.last_grade = None;
        problem
    }

    pub fn submit(&mut self, text: &str, score: &mut ScoreTracker) -> Result<Grade, GameError> {
        let problem = match (self.phase, self.problem) {
            (Phase::InRound, Some(problem)) => problem,
            _ => return Err(GameError::NotInRound),
        };
        ensure_submission(text)?;

        let grade = grade_math(&problem, text);
        score.award(grade.points);
        self.phase = Phase::Graded;
        self.last_grade = Some(grade.clone());
        Ok(grade)
    }

    /// 下一题
    pub fn next(&mut self, rng: &mut dyn RandomSource) -> MathProblem {
        self.start(rng)
    }

    pub fn back_to_menu(&mut self) {
        self.problem = None;
        self.phase = Phase::NotStarted;
        self.last_grade = None;
    }
}
