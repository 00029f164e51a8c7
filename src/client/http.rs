//! HTTP 后端客户端

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::api::dto::{
    AnimalsResponse, ChatRequest, CheckAnimalRequest, CheckAnimalResponse,
    CheckRiddleRequest, CheckRiddleResponse, RiddlesResponse,
};
use crate::client::PlaygroundBackend;
use crate::error::{AppError, Result};
use crate::models::catalog::{AnimalClueSet, Riddle};

/// 客户端只读取回复文本，`timestamp` 等其余字段的格式不做要求
#[derive(Deserialize)]
struct ChatReply {
    response: String,
}

/// 调用 JSON 后端的客户端，单次请求、不重试
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs.max(1)))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize + Sync, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "backend returned {}: {}",
                status, error_text
            )));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl PlaygroundBackend for HttpBackend {
    async fn chat(&self, message: &str) -> Result<String> {
        let reply: ChatReply = self.post("/chat", &ChatRequest::new(message)).await?;
        Ok(reply.response)
    }

    async fn riddles(&self) -> Result<Vec<Riddle>> {
        let response: RiddlesResponse = self.get("/riddles").await?;
        Ok(response.riddles)
    }

    async fn animals(&self) -> Result<Vec<AnimalClueSet>> {
        let response: AnimalsResponse = self.get("/animals").await?;
        Ok(response.animals)
    }

    async fn check_riddle(&self, riddle_id: usize, answer: &str) -> Result<CheckRiddleResponse> {
        let request = CheckRiddleRequest {
            riddle_id,
            answer: answer.to_string(),
        };
        self.post("/check_riddle", &request).await
    }

    async fn check_animal(&self, animal_id: usize, guess: &str) -> Result<CheckAnimalResponse> {
        let request = CheckAnimalRequest {
            animal_id,
            guess: guess.to_string(),
        };
        self.post("/check_animal", &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let backend = HttpBackend::new("http://localhost:8000/", 10).unwrap();
        assert_eq!(backend.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_chat_reply_ignores_timestamp_format() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"response": "Hi!", "timestamp": "now"}"#).unwrap();
        assert_eq!(reply.response, "Hi!");

        let reply: ChatReply = serde_json::from_str(r#"{"response": "Hi!"}"#).unwrap();
        assert_eq!(reply.response, "Hi!");
    }
}
