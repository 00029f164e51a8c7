//! 后端客户端
//!
//! `PlaygroundBackend` 抽象了聊天与判分的五个接口。`LocalBackend` 完全离线，
//! 用内置题库和本地回复选择器作答；`HttpBackend` 调用 JSON 后端；
//! `ResilientBackend` 优先走远端，失败时降级到本地，错误不会直接暴露给界面。

pub mod http;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::warn;

use crate::api::dto::{CheckAnimalResponse, CheckRiddleResponse};
use crate::config::config::ClientConfig;
use crate::error::{AppError, Result};
use crate::models::catalog::{AnimalClueSet, Catalog, Riddle};
use crate::services::games::{grade_guess, grade_riddle};
use crate::services::random::{RandomSource, entropy_source};
use crate::services::responder::{ResponseSelector, Vocabulary};

pub use http::HttpBackend;

/// 聊天请求失败时展示的道歉语
pub const CHAT_FAILURE_REPLY: &str = "Oops! Something went wrong. Let's try again! 😊";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaygroundBackend: Send + Sync {
    /// 发送一条聊天消息，返回机器人回复
    async fn chat(&self, message: &str) -> Result<String>;

    async fn riddles(&self) -> Result<Vec<Riddle>>;

    async fn animals(&self) -> Result<Vec<AnimalClueSet>>;

    async fn check_riddle(&self, riddle_id: usize, answer: &str) -> Result<CheckRiddleResponse>;

    async fn check_animal(&self, animal_id: usize, guess: &str) -> Result<CheckAnimalResponse>;
}

/// 离线后端：内置题库加本地回复选择
pub struct LocalBackend {
    catalog: Catalog,
    selector: ResponseSelector,
    rng: Mutex<Box<dyn RandomSource>>,
}

impl LocalBackend {
    pub fn new(catalog: Catalog, selector: ResponseSelector, rng: Box<dyn RandomSource>) -> Self {
        Self {
            catalog,
            selector,
            rng: Mutex::new(rng),
        }
    }

    /// 内置题库，页面组件使用的词表
    pub fn builtin() -> Self {
        Self::new(
            Catalog::builtin(),
            ResponseSelector::new(Vocabulary::Standard),
            Box::new(entropy_source()),
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn riddle(&self, riddle_id: usize) -> Result<&Riddle> {
        self.catalog
            .riddles
            .get(riddle_id)
            .ok_or_else(|| AppError::Validation(format!("Invalid riddle ID: {}", riddle_id)))
    }

    fn animal(&self, animal_id: usize) -> Result<&AnimalClueSet> {
        self.catalog
            .animals
            .get(animal_id)
            .ok_or_else(|| AppError::Validation(format!("Invalid animal ID: {}", animal_id)))
    }
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl PlaygroundBackend for LocalBackend {
    async fn chat(&self, message: &str) -> Result<String> {
        let mut rng = self.rng.lock().await;
        Ok(self.selector.select_response(message, &mut **rng))
    }

    async fn riddles(&self) -> Result<Vec<Riddle>> {
        Ok(self.catalog.riddles.clone())
    }

    async fn animals(&self) -> Result<Vec<AnimalClueSet>> {
        Ok(self.catalog.animals.clone())
    }

    async fn check_riddle(&self, riddle_id: usize, answer: &str) -> Result<CheckRiddleResponse> {
        let riddle = self.riddle(riddle_id)?;
        let grade = grade_riddle(riddle, answer);
        Ok(CheckRiddleResponse {
            correct: grade.correct,
            answer: riddle.answer.clone(),
            points: grade.points,
        })
    }

    async fn check_animal(&self, animal_id: usize, guess: &str) -> Result<CheckAnimalResponse> {
        let animal = self.animal(animal_id)?;
        let grade = grade_guess(animal, guess);
        Ok(CheckAnimalResponse {
            correct: grade.correct,
            answer: animal.name.clone(),
            emoji: animal.emoji.clone(),
            points: grade.points,
        })
    }
}

/// 远端优先、失败降级的后端
///
/// 记住最近一次展示给用户的题库；远端判分失败时按这份题库在本地判分，
/// 而不是内置题库。
pub struct ResilientBackend<R> {
    remote: R,
    local: LocalBackend,
    shown_riddles: Mutex<Option<Vec<Riddle>>>,
    shown_animals: Mutex<Option<Vec<AnimalClueSet>>>,
}

impl<R: PlaygroundBackend> ResilientBackend<R> {
    pub fn new(remote: R, local: LocalBackend) -> Self {
        Self {
            remote,
            local,
            shown_riddles: Mutex::new(None),
            shown_animals: Mutex::new(None),
        }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// 按已展示的题库判分；编号不存在时判为答错
    async fn grade_riddle_locally(&self, riddle_id: usize, answer: &str) -> CheckRiddleResponse {
        let shown = self.shown_riddles.lock().await;
        let table = shown.as_deref().unwrap_or(self.local.catalog().riddles.as_slice());
        match table.get(riddle_id) {
            Some(riddle) => {
                let grade = grade_riddle(riddle, answer);
                CheckRiddleResponse {
                    correct: grade.correct,
                    answer: riddle.answer.clone(),
                    points: grade.points,
                }
            }
            None => {
                warn!("Riddle {} is not in the shown table", riddle_id);
                CheckRiddleResponse {
                    correct: false,
                    answer: String::new(),
                    points: 0,
                }
            }
        }
    }

    async fn grade_guess_locally(&self, animal_id: usize, guess: &str) -> CheckAnimalResponse {
        let shown = self.shown_animals.lock().await;
        let table = shown.as_deref().unwrap_or(self.local.catalog().animals.as_slice());
        match table.get(animal_id) {
            Some(animal) => {
                let grade = grade_guess(animal, guess);
                CheckAnimalResponse {
                    correct: grade.correct,
                    answer: animal.name.clone(),
                    emoji: animal.emoji.clone(),
                    points: grade.points,
                }
            }
            None => {
                warn!("Animal {} is not in the shown table", animal_id);
                CheckAnimalResponse {
                    correct: false,
                    answer: String::new(),
                    emoji: String::new(),
                    points: 0,
                }
            }
        }
    }
}

#[async_trait]
impl<R: PlaygroundBackend> PlaygroundBackend for ResilientBackend<R> {
    /// 失败时返回道歉语而不是错误
    async fn chat(&self, message: &str) -> Result<String> {
        match self.remote.chat(message).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                warn!("Chat request failed, showing apology: {}", e);
                Ok(CHAT_FAILURE_REPLY.to_string())
            }
        }
    }

    async fn riddles(&self) -> Result<Vec<Riddle>> {
        let riddles = match self.remote.riddles().await {
            Ok(riddles) if !riddles.is_empty() => riddles,
            Ok(_) => {
                warn!("Backend returned no riddles, using built-in table");
                self.local.riddles().await?
            }
            Err(e) => {
                warn!("Riddle fetch failed, using built-in table: {}", e);
                self.local.riddles().await?
            }
        };
        *self.shown_riddles.lock().await = Some(riddles.clone());
        Ok(riddles)
    }

    async fn animals(&self) -> Result<Vec<AnimalClueSet>> {
        let animals = match self.remote.animals().await {
            Ok(animals) if !animals.is_empty() => animals,
            Ok(_) => {
                warn!("Backend returned no animals, using built-in table");
                self.local.animals().await?
            }
            Err(e) => {
                warn!("Animal fetch failed, using built-in table: {}", e);
                self.local.animals().await?
            }
        };
        *self.shown_animals.lock().await = Some(animals.clone());
        Ok(animals)
    }

    async fn check_riddle(&self, riddle_id: usize, answer: &str) -> Result<CheckRiddleResponse> {
        match self.remote.check_riddle(riddle_id, answer).await {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!("Riddle check failed, grading locally: {}", e);
                Ok(self.grade_riddle_locally(riddle_id, answer).await)
            }
        }
    }

    async fn check_animal(&self, animal_id: usize, guess: &str) -> Result<CheckAnimalResponse> {
        match self.remote.check_animal(animal_id, guess).await {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!("Animal check failed, grading locally: {}", e);
                Ok(self.grade_guess_locally(animal_id, guess).await)
            }
        }
    }
}

/// 按配置创建客户端；`base_url` 为空时只用本地后端
pub fn create_backend(config: &ClientConfig) -> Result<Box<dyn PlaygroundBackend>> {
    if config.base_url.trim().is_empty() {
        return Ok(Box::new(LocalBackend::builtin()));
    }
    let remote = HttpBackend::new(&config.base_url, config.timeout_secs)?;
    Ok(Box::new(ResilientBackend::new(remote, LocalBackend::builtin())))
}
