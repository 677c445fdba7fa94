use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SubjectService;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_data: CreateSubjectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if subject_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Subject name must not be empty",
        )));
    }

    // 科目名唯一
    match storage.get_subject_by_name(&subject_data.name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SubjectAlreadyExists,
                "Subject name already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check subject name: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to verify subject name",
                )),
            );
        }
    }

    match storage.create_subject(subject_data).await {
        Ok(subject) => {
            info!("Subject {} ({}) created", subject.id, subject.name);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(subject, "Subject created successfully")))
        }
        Err(e) => {
            error!("Failed to create subject: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubjectCreationFailed,
                    format!("Failed to create subject: {e}"),
                )),
            )
        }
    }
}
