use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::MarkService;
use crate::models::marks::requests::MarkQueryParams;
use crate::models::{ApiResponse, ErrorCode};

/// 某 (班级, 科目, 教师, 学段) 的成绩花名册，按学生姓名排序
pub async fn list_marks(
    service: &MarkService,
    request: &HttpRequest,
    query: MarkQueryParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_roster_marks(&query).await {
        Ok(marks) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            marks,
            "Marks retrieved successfully",
        ))),
        Err(e) => {
            error!(
                "Failed to list marks for class {} subject {}: {}",
                query.class_id, query.subject_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve marks",
                )),
            )
        }
    }
}
