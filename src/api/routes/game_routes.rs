//! Game Routes
//!
//! 题库下发与判分。

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::app_state::AppState;
use crate::api::handlers::game_handler::*;

/// 创建游戏路由器
pub fn create_game_router() -> Router<AppState> {
    Router::new()
        .route("/riddles", get(list_riddles))
        .route("/animals", get(list_animals))
        .route("/check_riddle", post(check_riddle))
        .route("/check_animal", post(check_animal))
}
