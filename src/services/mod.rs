//! 服务模块
//!
//! 与界面无关的核心逻辑：回复选择、游戏引擎、计分与聊天会话。

pub mod chat_session;
pub mod games;
pub mod random;
pub mod responder;
pub mod score;

pub use chat_session::{ChatError, ChatSession};
pub use games::{GameError, GameKind, Grade, Phase};
pub use random::{RandomSource, ScriptedRandom};
pub use responder::{ReplyRule, ResponseSelector, Topic, Vocabulary};
pub use score::ScoreTracker;
