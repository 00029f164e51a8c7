//! 题库
//!
//! 谜语和猜动物两个游戏使用的固定数据表。后端通过 `/riddles` 与 `/animals`
//! 原样下发这些表，客户端在后端不可达时直接使用内置副本。

use serde::{Deserialize, Serialize};

/// 谜语
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Riddle {
    /// 题面
    pub question: String,
    /// 答案（比较时忽略大小写并去除首尾空白）
    pub answer: String,
    /// 提示
    pub hint: String,
}

impl Riddle {
    pub fn new(question: &str, answer: &str, hint: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            hint: hint.to_string(),
        }
    }
}

/// 猜动物线索集
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalClueSet {
    /// 动物名称（比较目标）
    pub name: String,
    /// 按顺序给出的线索
    pub clues: Vec<String>,
    /// 对应的 emoji
    pub emoji: String,
}

impl AnimalClueSet {
    pub fn new(name: &str, clues: &[&str], emoji: &str) -> Self {
        Self {
            name: name.to_string(),
            clues: clues.iter().map(|c| c.to_string()).collect(),
            emoji: emoji.to_string(),
        }
    }
}

/// 两张数据表的组合
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub riddles: Vec<Riddle>,
    pub animals: Vec<AnimalClueSet>,
}

impl Catalog {
    /// 内置数据表
    pub fn builtin() -> Self {
        Self {
            riddles: builtin_riddles(),
            animals: builtin_animals(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 内置谜语表
pub fn builtin_riddles() -> Vec<Riddle> {
    vec![
        Riddle::new(
            "I have a tail and four legs, I bark and I'm loyal. What am I?",
            "dog",
            "I'm man's best friend! 🐕",
        ),
        Riddle::new(
            "I'm yellow and I light up the day. I'm very hot and far away. What am I?",
            "sun",
            "I'm in the sky and give us light! ☀️",
        ),
        Riddle::new(
            "I have wings but I'm not a bird. I'm colorful and visit flowers. What am I?",
            "butterfly",
            "I start as a caterpillar! 🦋",
        ),
        Riddle::new(
            "I'm white and cold, I fall from the sky in winter. What am I?",
            "snow",
            "Kids love to build snowmen with me! ❄️",
        ),
    ]
}

/// 内置动物表
pub fn builtin_animals() -> Vec<AnimalClueSet> {
    vec![
        AnimalClueSet::new(
            "elephant",
            &[
                "I am very big and gray! 🐘",
                "I have a long nose called a trunk!",
                "I never forget anything!",
                "I love to spray water on myself!",
            ],
            "🐘",
        ),
        AnimalClueSet::new(
            "lion",
            &[
                "I am the king of the jungle! 🦁",
                "I have a big mane around my face!",
                "I make a loud roaring sound!",
                "I have golden fur!",
            ],
            "🦁",
        ),
        AnimalClueSet::new(
            "penguin",
            &[
                "I live in very cold places! 🐧",
                "I am black and white!",
                "I can't fly but I love to swim!",
                "I slide on my belly on the ice!",
            ],
            "🐧",
        ),
        AnimalClueSet::new(
            "butterfly",
            &[
                "I have beautiful colorful wings! 🦋",
                "I start life as a caterpillar!",
                "I love to visit flowers!",
                "I can fly but I'm not a bird!",
            ],
            "🦋",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.riddles.len(), 4);
        assert_eq!(catalog.animals.len(), 4);
        assert!(catalog.animals.iter().all(|a| a.clues.len() == 4));
    }

    #[test]
    fn test_riddle_json_field_names() {
        let json = serde_json::to_value(&builtin_riddles()[0]).unwrap();
        assert_eq!(json["answer"], "dog");
        assert!(json.get("question").is_some());
        assert!(json.get("hint").is_some());
    }
}
