use axum::{Json, extract::State};
use tracing::{info, instrument};

use crate::{
    api::{
        dtos::{AnalyzeRequest, AnalyzeResponse, MessageResponse, SampleUrlsResponse},
        errors::ApiError,
    },
    app_state::AppState,
    extractor, fetcher, sentiment,
};

/// Cap on the content preview returned to the caller. The marker is always
/// appended, even for short content, mirroring the front-end contract.
const PREVIEW_CHARS: usize = 500;

const SAMPLE_URLS: [&str; 2] = [
    "https://n.news.naver.com/mnews/article/008/0005111025",
    "https://n.news.naver.com/mnews/article/023/0003868164",
];

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "News Sentiment Analyzer API".to_string(),
    })
}

/// Full pipeline for one article: fetch, extract, classify.
#[instrument(skip_all, fields(url = %payload.url))]
pub async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let page = fetcher::fetch(&payload.url).await?;
    let article = extractor::extract(&page);

    let text = format!("제목: {}\n내용: {}", article.title, article.content);
    let result = sentiment::analyze(state.model.as_ref(), &text).await?;

    info!(
        title = %article.title,
        sentiment = %result.label,
        score = result.score,
        "article analyzed"
    );

    Ok(Json(AnalyzeResponse {
        title: article.title,
        url: payload.url,
        content: preview(&article.content),
        sentiment: result.label,
        sentiment_score: result.score,
        reason: result.rationale,
    }))
}

pub async fn sample_urls() -> Json<SampleUrlsResponse> {
    Json(SampleUrlsResponse {
        urls: SAMPLE_URLS.iter().map(|s| s.to_string()).collect(),
    })
}

fn preview(content: &str) -> String {
    let mut preview: String = content.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}
