use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::config::AppConfig;
use crate::models::teachers::requests::UpdateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password};

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
    mut update_data: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref email) = update_data.email {
        if let Err(msg) = validate_email(email) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
        if let Ok(Some(other)) = storage.get_teacher_by_email(email).await
            && other.id != teacher_id
        {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::TeacherAlreadyExists,
                "Email already exists",
            )));
        }
    }

    if let Some(ref password) = update_data.password {
        if let Err(msg) = validate_password(password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
        match hash_password(password) {
            Ok(hash) => update_data.password = Some(hash),
            Err(e) => {
                error!("Failed to hash password: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to process password",
                    )),
                );
            }
        }
    }

    let assignments = update_data.assignments.take();

    match storage.update_teacher(teacher_id, update_data).await {
        Ok(Some(teacher)) => {
            // 提供了 assignments 时整组重建任课关联
            if let Some(assignments) = assignments {
                let academic_year = if teacher.academic_year.is_empty() {
                    AppConfig::get().school.default_academic_year.clone()
                } else {
                    teacher.academic_year.clone()
                };
                match storage
                    .sync_teacher_assignments(teacher_id, &academic_year, &assignments)
                    .await
                {
                    Ok(()) => {
                        info!(
                            "Teacher {} assignments rebuilt ({} pairs)",
                            teacher_id,
                            assignments.len()
                        );
                    }
                    Err(e) => {
                        error!(
                            "Teacher {} updated but assignment sync failed: {}",
                            teacher_id, e
                        );
                    }
                }
            }

            match storage.get_teacher_with_assignments(teacher_id).await {
                Ok(Some(full)) => Ok(HttpResponse::Ok()
                    .json(ApiResponse::success(full, "Teacher updated successfully"))),
                _ => Ok(HttpResponse::Ok()
                    .json(ApiResponse::success(teacher, "Teacher updated successfully"))),
            }
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            "Teacher not found",
        ))),
        Err(e) => {
            error!("Failed to update teacher {}: {}", teacher_id, e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::TeacherUpdateFailed,
                format!("Failed to update teacher: {e}"),
            )))
        }
    }
}
