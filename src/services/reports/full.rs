use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::grading::partition_arabic_last;
use crate::models::reports::responses::FullReportResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 学生叙述性完整报告：各科评语条目，阿拉伯语族科目排在末尾
pub async fn full_report(
    service: &ReportService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to get student {}: {}", student_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve student",
                )),
            );
        }
    };

    let class_name = match storage.get_class_by_id(student.class_id).await {
        Ok(Some(class)) => class.name,
        Ok(None) => String::new(),
        Err(e) => {
            error!("Failed to get class {}: {}", student.class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve class",
                )),
            );
        }
    };

    match storage.list_student_report_entries(student_id).await {
        Ok(entries) => {
            let entries = partition_arabic_last(entries, |entry| entry.subject_name.as_str());
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                FullReportResponse {
                    student,
                    class_name,
                    entries,
                },
                "Full report retrieved successfully",
            )))
        }
        Err(e) => {
            error!("Failed to list report entries for student {}: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve report entries",
                )),
            )
        }
    }
}
