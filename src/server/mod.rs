//! HTTP-интерфейс сервиса.
//!
//! Единственный рабочий маршрут — `POST /analyze` с multipart-формой:
//! необязательное поле `file` (фото состава) и/или `text` (состав
//! строкой). Все ошибки обработки конвертируются в JSON на границе
//! хендлера; частичные результаты не возвращаются.

use crate::classifier::{self, Finding};
use crate::config::Config;
use crate::error::{IngredientAiError, Result};
use crate::ocr;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Вердикт, когда нежелательных ингредиентов не найдено.
pub const RESULT_OK: &str = "Состав отличный!💚";

/// Вердикт при найденных нежелательных ингредиентах.
pub const RESULT_ISSUES: &str = "Некоторые ингредиенты могут не подойти";

#[derive(Serialize)]
struct AnalyzeResponse {
    result: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    issues: Vec<Finding>,
}

/// Собрать маршрутизатор сервиса.
pub fn router(config: Arc<Config>) -> Router {
    let body_limit = config.max_upload_bytes;

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// Запустить сервер и обслуживать запросы до завершения процесса.
pub async fn run(config: Arc<Config>) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("сервер запущен на http://{}", addr);
    axum::serve(listener, router(config)).await?;

    Ok(())
}

async fn analyze(State(config): State<Arc<Config>>, multipart: Multipart) -> Response {
    match handle_analyze(&config, multipart).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => {
            let status = match err {
                IngredientAiError::EmptyInput => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(json!({ "error": err.to_string() }))).into_response()
        }
    }
}

async fn handle_analyze(config: &Config, mut multipart: Multipart) -> Result<AnalyzeResponse> {
    let mut image_bytes: Option<Vec<u8>> = None;
    let mut text_field: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| IngredientAiError::Multipart(e.to_string()))?
    {
        match field.name() {
            Some("file") => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| IngredientAiError::Multipart(e.to_string()))?;
                image_bytes = Some(data.to_vec());
            }
            Some("text") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| IngredientAiError::Multipart(e.to_string()))?;
                text_field = Some(value);
            }
            _ => {}
        }
    }

    let mut raw_text = String::new();

    if let Some(bytes) = image_bytes {
        raw_text = ocr::extract_text(&bytes, config).await?;
    }

    if let Some(text) = text_field {
        raw_text.push('\n');
        raw_text.push_str(&text);
    }

    // Проверка пустоты — до нормализации: текст из одной кириллицы
    // считается непустым и даёт положительный вердикт
    if raw_text.trim().is_empty() {
        return Err(IngredientAiError::EmptyInput);
    }

    let findings = classifier::classify(&raw_text);
    info!(
        text_len = raw_text.len(),
        findings = findings.len(),
        "анализ выполнен"
    );

    if findings.is_empty() {
        Ok(AnalyzeResponse {
            result: RESULT_OK,
            issues: Vec::new(),
        })
    } else {
        Ok(AnalyzeResponse {
            result: RESULT_ISSUES,
            issues: findings,
        })
    }
}
