use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::error;

use super::MarkService;
use crate::grading::{SubjectCategory, aggregate};
use crate::models::marks::entities::Mark;
use crate::models::marks::requests::UpdateMarkRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 单行更新失败的原因，批量保存时逐行收集
pub(super) enum RowFailure {
    NotFound,
    Validation(String),
    Internal(String),
}

impl RowFailure {
    pub(super) fn reason(&self) -> String {
        match self {
            RowFailure::NotFound => "Mark not found".to_string(),
            RowFailure::Validation(msg) => msg.clone(),
            RowFailure::Internal(msg) => msg.clone(),
        }
    }
}

/// 校验并落库一行成绩
///
/// 整行覆盖：缺省评分项写 0。总分只累加该科目细则内的评分项。
pub(super) async fn apply_mark_update(
    storage: &Arc<dyn Storage>,
    mark_id: i64,
    values: &UpdateMarkRequest,
) -> Result<Mark, RowFailure> {
    let mark = storage
        .get_mark_by_id(mark_id)
        .await
        .map_err(|e| RowFailure::Internal(format!("Failed to load mark: {e}")))?
        .ok_or(RowFailure::NotFound)?;

    let subject = storage
        .get_subject_by_id(mark.subject_id)
        .await
        .map_err(|e| RowFailure::Internal(format!("Failed to load subject: {e}")))?
        .ok_or_else(|| RowFailure::Internal(format!("Subject {} missing", mark.subject_id)))?;

    let rubric = SubjectCategory::from_subject_name(&subject.name).rubric();
    let component_map = values.component_map();
    rubric
        .validate_values(&component_map)
        .map_err(|e| RowFailure::Validation(e.message().to_string()))?;

    let total = aggregate(rubric, &component_map).total as i32;

    storage
        .update_mark(mark_id, values, total)
        .await
        .map_err(|e| RowFailure::Internal(format!("Failed to save mark: {e}")))?
        .ok_or(RowFailure::NotFound)
}

pub async fn update_mark(
    service: &MarkService,
    request: &HttpRequest,
    mark_id: i64,
    values: UpdateMarkRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(response) = service.entry_closed_response(&storage).await {
        return response;
    }

    match apply_mark_update(&storage, mark_id, &values).await {
        Ok(mark) => Ok(
            HttpResponse::Ok().json(ApiResponse::success(mark, "Mark updated successfully"))
        ),
        Err(RowFailure::NotFound) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::MarkNotFound, "Mark not found"),
        )),
        Err(RowFailure::Validation(msg)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::MarkValidationFailed, msg),
        )),
        Err(RowFailure::Internal(msg)) => {
            error!("Failed to update mark {}: {}", mark_id, msg);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::MarkSaveFailed,
                "Failed to update mark",
            )))
        }
    }
}
