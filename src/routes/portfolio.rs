use axum::Json;

use crate::services::portfolio::{PORTFOLIO, Portfolio};

pub async fn portfolio_handler() -> Json<&'static Portfolio> {
    Json(&PORTFOLIO)
}
