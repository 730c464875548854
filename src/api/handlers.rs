//! HTTP 处理函数
//!
//! 只做请求解析与响应组装，出题和打包交给编排层

use crate::api::payload::GenerateRequest;
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::utils::logging::{log_request_complete, log_request_start};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::time::Instant;

/// 存活检查
pub async fn home() -> &'static str {
    "MCQ set generator is live! Ready to generate sets."
}

/// 预检请求
pub async fn preflight() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// 生成多套试卷并以 zip 返回
pub async fn generate_sets(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    let started = Instant::now();

    let request = GenerateRequest::from_slice(&body)?.validate(state.config.max_sets)?;
    let num_sets = request.num_sets;
    log_request_start(request.questions.len(), num_sets);

    // 出题、渲染、打包都是同步计算，放到阻塞线程池
    let worker = state.clone();
    let archive = tokio::task::spawn_blocking(move || {
        let mut rng = rand::thread_rng();
        let sets = worker
            .generator
            .generate(&request.questions, request.num_sets, &mut rng)?;
        worker.archive.build(&sets)
    })
    .await
    .map_err(|e| AppError::Other(format!("生成任务异常退出: {}", e)))??;

    log_request_complete(num_sets, archive.len(), started.elapsed().as_millis());

    let headers = [
        (
            header::CONTENT_TYPE,
            state.archive.content_type().to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", state.config.archive_file_name),
        ),
    ];

    Ok((headers, archive).into_response())
}
