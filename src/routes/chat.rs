use axum::{Json, extract::State};

use super::Submission;
use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Submission(payload): Submission<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let reply = state.responder.resolve(&payload.message).await?;

    Ok(Json(ChatReply::reply(reply)))
}
