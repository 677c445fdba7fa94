use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::future::join_all;
use tracing::{info, warn};

use super::MarkService;
use super::update::apply_mark_update;
use crate::models::marks::requests::SaveMarksRequest;
use crate::models::marks::responses::{SaveMarksResponse, SaveRowError};
use crate::models::{ApiResponse, ErrorCode};

/// 批量保存成绩
///
/// 逐行独立提交，部分失败不回滚已保存的行，失败行附带原因返回。
pub async fn save_marks(
    service: &MarkService,
    request: &HttpRequest,
    save_data: SaveMarksRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(response) = service.entry_closed_response(&storage).await {
        return response;
    }

    if save_data.marks.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "No marks to save",
        )));
    }

    let results = join_all(save_data.marks.iter().map(|row| {
        let storage = storage.clone();
        async move {
            (
                row.mark_id,
                apply_mark_update(&storage, row.mark_id, &row.values).await,
            )
        }
    }))
    .await;

    let mut saved = 0usize;
    let mut failed = Vec::new();
    for (mark_id, result) in results {
        match result {
            Ok(_) => saved += 1,
            Err(failure) => failed.push(SaveRowError {
                mark_id,
                reason: failure.reason(),
            }),
        }
    }

    if failed.is_empty() {
        info!("Saved {} marks", saved);
    } else {
        warn!("Saved {} marks, {} rows failed", saved, failed.len());
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        SaveMarksResponse { saved, failed },
        "Marks saved",
    )))
}
