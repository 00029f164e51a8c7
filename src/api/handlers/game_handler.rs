use axum::{Json, extract::State, response::IntoResponse};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::game_dto::*},
    error::AppError,
    services::games::{grade_guess, grade_riddle},
};

pub async fn list_riddles(State(state): State<AppState>) -> impl IntoResponse {
    debug!("Listing {} riddles", state.catalog.riddles.len());
    Json(RiddlesResponse {
        riddles: state.catalog.riddles.clone(),
    })
}

pub async fn list_animals(State(state): State<AppState>) -> impl IntoResponse {
    debug!("Listing {} animals", state.catalog.animals.len());
    Json(AnimalsResponse {
        animals: state.catalog.animals.clone(),
    })
}

/// 谜语判分：去首尾空白、忽略大小写后完全相等
pub async fn check_riddle(
    State(state): State<AppState>,
    Json(request): Json<CheckRiddleRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Checking riddle answer: riddle_id={}", request.riddle_id);

    let riddles = &state.catalog.riddles;
    state
        .validator
        .validate_index("riddle ID", request.riddle_id, riddles.len())?;
    state.validator.validate_not_blank("answer", &request.answer)?;

    let riddle = &riddles[request.riddle_id];
    let grade = grade_riddle(riddle, &request.answer);
    state.metrics.record_grading(grade.correct);

    Ok(Json(CheckRiddleResponse {
        correct: grade.correct,
        answer: riddle.answer.clone(),
        points: grade.points,
    }))
}

/// 猜动物判分，规则同谜语
pub async fn check_animal(
    State(state): State<AppState>,
    Json(request): Json<CheckAnimalRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Checking animal guess: animal_id={}", request.animal_id);

    let animals = &state.catalog.animals;
    state
        .validator
        .validate_index("animal ID", request.animal_id, animals.len())?;
    state.validator.validate_not_blank("guess", &request.guess)?;

    let animal = &animals[request.animal_id];
    let grade = grade_guess(animal, &request.guess);
    state.metrics.record_grading(grade.correct);

    Ok(Json(CheckAnimalResponse {
        correct: grade.correct,
        answer: animal.name.clone(),
        emoji: animal.emoji.clone(),
        points: grade.points,
    }))
}
