use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ReportService;
use crate::config::AppConfig;
use crate::errors::SamsError;
use crate::middlewares::RequireJWT;
use crate::models::reports::requests::CreateReportRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 创建评语报告，teacher_id 取当前登录用户
///
/// 同一 (学生, 科目, 教师, 学段) 已有报告时拒绝重复创建。
pub async fn create_report(
    service: &ReportService,
    request: &HttpRequest,
    report_data: CreateReportRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_current_user(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    match storage.get_student_by_id(report_data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            error!("Failed to get student {}: {}", report_data.student_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve student",
                )),
            );
        }
    }

    let default_year = &AppConfig::get().school.default_academic_year;
    match storage
        .create_report(current_user.id, default_year, report_data)
        .await
    {
        Ok(report) => {
            info!(
                "Report {} created for student {} by teacher {}",
                report.id, report.student_id, current_user.id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(report, "Report created successfully")))
        }
        Err(SamsError::DuplicateRecord(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::ReportAlreadyExists, msg),
        )),
        Err(e) => {
            error!("Failed to create report: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReportCreationFailed,
                    format!("Failed to create report: {e}"),
                )),
            )
        }
    }
}
