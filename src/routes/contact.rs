use axum::Json;

use super::Submission;
use crate::{
    error::AppError,
    message::{ContactRequest, StatusReply},
};

pub const MISSING_FIELDS: &str = "Name, email, and message are required";
pub const THANK_YOU: &str = "Thank you for your message! I will get back to you soon.";

// Submissions are only logged; nothing is stored or forwarded.
pub async fn contact_handler(
    Submission(contact): Submission<ContactRequest>,
) -> Result<Json<StatusReply>, AppError> {
    if !contact.is_complete() {
        return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
    }

    tracing::info!(
        name = %contact.name,
        email = %contact.email,
        subject = contact.subject.as_deref().unwrap_or(""),
        message = %contact.message,
        "Contact form submission"
    );

    Ok(Json(StatusReply::ok(THANK_YOU)))
}
