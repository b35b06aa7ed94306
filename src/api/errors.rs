use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{api::dtos::ErrorResponse, fetcher::FetchError, sentiment::AnalysisError};

/// Client-visible pipeline failure. Fetch/extraction problems are the
/// caller's fault (bad or unreachable URL) and map to 400; a failing model
/// invocation is ours and maps to 500.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("크롤링 실패: {0}")]
    Crawl(#[from] FetchError),

    #[error("분석 실패: {0}")]
    Analysis(#[from] AnalysisError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Crawl(_) => StatusCode::BAD_REQUEST,
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
