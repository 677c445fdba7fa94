use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::config::AppConfig;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password};

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    mut teacher_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if teacher_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Teacher name must not be empty",
        )));
    }

    if let Err(msg) = validate_email(&teacher_data.email) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            msg,
        )));
    }

    if let Err(msg) = validate_password(&teacher_data.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            msg,
        )));
    }

    // 邮箱唯一
    match storage.get_teacher_by_email(&teacher_data.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::TeacherAlreadyExists,
                "Email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check teacher email: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to verify email",
                )),
            );
        }
    }

    // 任课配对中的班级与科目必须存在
    for pair in &teacher_data.assignments {
        match storage.get_class_by_id(pair.class_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ClassNotFound,
                    format!("Class {} does not exist", pair.class_id),
                )));
            }
            Err(e) => {
                error!("Failed to check class: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to verify class",
                    )),
                );
            }
        }
        match storage.get_subject_by_id(pair.subject_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::SubjectNotFound,
                    format!("Subject {} does not exist", pair.subject_id),
                )));
            }
            Err(e) => {
                error!("Failed to check subject: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to verify subject",
                    )),
                );
            }
        }
    }

    match hash_password(&teacher_data.password) {
        Ok(hash) => teacher_data.password = hash,
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

    let assignments = std::mem::take(&mut teacher_data.assignments);
    match storage.create_teacher(teacher_data).await {
        Ok(teacher) => {
            let academic_year = if teacher.academic_year.is_empty() {
                AppConfig::get().school.default_academic_year.clone()
            } else {
                teacher.academic_year.clone()
            };

            if let Err(e) = storage
                .sync_teacher_assignments(teacher.id, &academic_year, &assignments)
                .await
            {
                error!(
                    "Teacher {} created but assignment sync failed: {}",
                    teacher.id, e
                );
            }

            info!(
                "Teacher {} created with {} assignments",
                teacher.id,
                assignments.len()
            );

            match storage.get_teacher_with_assignments(teacher.id).await {
                Ok(Some(full)) => Ok(HttpResponse::Created()
                    .json(ApiResponse::success(full, "Teacher created successfully"))),
                _ => Ok(HttpResponse::Created()
                    .json(ApiResponse::success(teacher, "Teacher created successfully"))),
            }
        }
        Err(e) => {
            error!("Failed to create teacher: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TeacherCreationFailed,
                    format!("Failed to create teacher: {e}"),
                )),
            )
        }
    }
}
