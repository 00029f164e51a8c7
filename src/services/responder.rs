//! 回复选择器
//!
//! 根据用户输入挑选一条预设回复。规则按固定顺序逐条做小写子串匹配，
//! 第一条命中的规则生效：安全过滤 → 自我介绍 → 问候 → 话题 → 随机鼓励。
//! 子串匹配是字面的（"something" 中含有 "hi"），不做额外纠正。

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::services::random::RandomSource;

/// 安全过滤命中时的固定回复
pub const SAFETY_REDIRECT_REPLY: &str = "Let's keep our conversation positive and fun! 😊 How about we talk about something cool instead? What's your favorite animal? 🐾";

/// 问候回复
pub const GREETING_REPLY: &str =
    "Hello there! 👋 I'm so happy to see you! How are you feeling today? 😊";

/// 无法提取名字时使用的称呼
pub const DEFAULT_NAME: &str = "friend";

/// 随机鼓励回复
pub const ENCOURAGING_REPLIES: [&str; 5] = [
    "That's really interesting! 🤔 Tell me more about it! I love learning new things from awesome kids like you! ✨",
    "Wow, you're so smart! 🧠 I'm always amazed by how much kids know! What else would you like to chat about? 😊",
    "That's so cool! 🎉 You know what? You're a really fun person to chat with! What makes you happy? 🌟",
    "I love talking with you! 💫 You have such interesting thoughts! What's something that makes you laugh? 😄",
    "You're awesome! 🌈 I'm learning so much from our conversation! What's your favorite thing to do for fun? 🎨",
];

const NAME_TRIGGERS: [&str; 3] = ["my name is", "i'm ", "call me"];
const GREETING_KEYWORDS: [&str; 3] = ["hi", "hello", "hey"];

/// 话题类别，按匹配优先级排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Animals,
    Games,
    Colors,
    School,
    Food,
    Age,
}

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Animals,
        Topic::Games,
        Topic::Colors,
        Topic::School,
        Topic::Food,
        Topic::Age,
    ];

    pub fn reply(&self) -> &'static str {
        match self {
            Topic::Animals => "I LOVE animals! 🐾 Did you know that a group of flamingos is called a 'flamboyance'? So fancy! What's your favorite animal? I'd love to share a fun fact about it! 🦩✨",
            Topic::Games => "Games are awesome! 🎮 I love playing word games, riddles, and brain teasers! Want to play a quick game? I could ask you a riddle or we could play 20 questions! What sounds fun to you? 🎲",
            Topic::Colors => "Ooh, colors! 🌈 I love all the bright, beautiful colors! Did you know that mixing blue and yellow makes green? What's your favorite color? I bet it's super cool! 🎨",
            Topic::School => "Learning is so exciting! 📚 I love discovering new things every day! What's your favorite subject in school? I think learning is like going on treasure hunts for knowledge! 🏆✨",
            Topic::Food => "Food is yummy! 🍎 I love hearing about all the tasty things kids enjoy! What's your favorite healthy snack? I think fruits are like nature's candy! 🍓🍌",
            Topic::Age => "Growing up is so exciting! 🌱 Every year you get to learn new things and have new adventures! What's the coolest thing you've learned this year? 🎓",
        }
    }
}

/// 关键词表
///
/// `Standard` 是页面组件使用的词表，`Extended` 是后端使用的词表，
/// 额外包含若干屏蔽词和话题词。两者的规则顺序与回复完全相同。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    #[default]
    Standard,
    Extended,
}

impl Vocabulary {
    pub fn denylist(&self) -> &'static [&'static str] {
        match self {
            Vocabulary::Standard => &["bad", "stupid", "hate", "kill", "die", "dumb"],
            Vocabulary::Extended => &[
                "bad", "stupid", "hate", "kill", "die", "dumb", "shut up", "idiot",
            ],
        }
    }

    pub fn keywords(&self, topic: Topic) -> &'static [&'static str] {
        match (self, topic) {
            (Vocabulary::Standard, Topic::Animals) => &["animal", "dog", "cat", "bird"],
            (Vocabulary::Extended, Topic::Animals) => &["animal", "dog", "cat", "bird", "pet"],
            (_, Topic::Games) => &["game", "play", "fun"],
            (Vocabulary::Standard, Topic::Colors) => &["color", "blue", "red", "green"],
            (Vocabulary::Extended, Topic::Colors) => {
                &["color", "blue", "red", "green", "yellow", "purple"]
            }
            (Vocabulary::Standard, Topic::School) => &["school", "learn", "homework"],
            (Vocabulary::Extended, Topic::School) => &["school", "learn", "homework", "teacher"],
            (Vocabulary::Standard, Topic::Food) => &["food", "eat", "hungry"],
            (Vocabulary::Extended, Topic::Food) => &["food", "eat", "hungry", "snack"],
            (_, Topic::Age) => &["old", "age", "years"],
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vocabulary::Standard => write!(f, "standard"),
            Vocabulary::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for Vocabulary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Vocabulary::Standard),
            "extended" => Ok(Vocabulary::Extended),
            other => Err(format!("unknown vocabulary: {}", other)),
        }
    }
}

/// 命中的规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyRule {
    SafetyRedirect,
    NameIntroduction(String),
    Greeting,
    Topic(Topic),
    Encouragement,
}

/// 回复选择器
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    vocabulary: Vocabulary,
    name_pattern: Regex,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(Vocabulary::Standard)
    }
}

impl ResponseSelector {
    pub fn new(vocabulary: Vocabulary) -> Self {
        // 名字按 ASCII 单词字符截取
        let name_pattern = Regex::new(r"(?i)(?:my name is|i'm|call me)\s+([A-Za-z0-9_]+)")
            .expect("name pattern is a valid regex");
        Self {
            vocabulary,
            name_pattern,
        }
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    /// 是否命中屏蔽词
    pub fn is_inappropriate(&self, input: &str) -> bool {
        let lower = input.to_lowercase();
        contains_any(&lower, self.vocabulary.denylist())
    }

    /// 按固定顺序找出第一条命中的规则
    pub fn classify(&self, input: &str) -> ReplyRule {
        let lower = input.to_lowercase();

        if contains_any(&lower, self.vocabulary.denylist()) {
            return ReplyRule::SafetyRedirect;
        }

        if contains_any(&lower, &NAME_TRIGGERS) {
            let name = self
                .name_pattern
                .captures(input)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| DEFAULT_NAME.to_string());
            return ReplyRule::NameIntroduction(name);
        }

        if contains_any(&lower, &GREETING_KEYWORDS) {
            return ReplyRule::Greeting;
        }

        Topic::ALL
            .into_iter()
            .find(|topic| contains_any(&lower, self.vocabulary.keywords(*topic)))
            .map(ReplyRule::Topic)
            .unwrap_or(ReplyRule::Encouragement)
    }

    /// 选出回复文本；只有兜底规则会从随机源抽取一次
    pub fn select_response(&self, input: &str, rng: &mut dyn RandomSource) -> String {
        match self.classify(input) {
            ReplyRule::SafetyRedirect => SAFETY_REDIRECT_REPLY.to_string(),
            ReplyRule::NameIntroduction(name) => name_reply(&name),
            ReplyRule::Greeting => GREETING_REPLY.to_string(),
            ReplyRule::Topic(topic) => topic.reply().to_string(),
            ReplyRule::Encouragement => {
                ENCOURAGING_REPLIES[rng.below(ENCOURAGING_REPLIES.len())].to_string()
            }
        }
    }
}

/// 按名字问候的模板回复
pub fn name_reply(name: &str) -> String {
    format!(
        "Nice to meet you, {}! 🎉 That's such a cool name! What would you like to chat about today? We could talk about animals, games, or I could tell you a fun fact! 🌟",
        name
    )
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
