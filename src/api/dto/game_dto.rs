//! 游戏 DTO
//!
//! 题库下发与谜语、猜动物两个游戏的判分请求。

use serde::{Deserialize, Serialize};

use crate::models::catalog::{AnimalClueSet, Riddle};

/// 谜语列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiddlesResponse {
    pub riddles: Vec<Riddle>,
}

/// 动物列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalsResponse {
    pub animals: Vec<AnimalClueSet>,
}

/// 谜语判分请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckRiddleRequest {
    /// 谜语下标
    pub riddle_id: usize,
    /// 用户答案
    pub answer: String,
}

/// 谜语判分响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRiddleResponse {
    pub correct: bool,
    /// 正确答案
    pub answer: String,
    /// 获得分数，答错为 0
    pub points: u32,
}

/// 猜动物判分请求
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckAnimalRequest {
    /// 动物下标
    pub animal_id: usize,
    /// 用户猜测
    pub guess: String,
}

/// 猜动物判分响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckAnimalResponse {
    pub correct: bool,
    /// 动物名称
    pub answer: String,
    pub emoji: String,
    pub points: u32,
}
