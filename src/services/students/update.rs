use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::config::AppConfig;
use crate::models::students::requests::UpdateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password;

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    mut update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 当前学生信息，用于识别班级调动
    let existing = match storage.get_student_by_id(student_id).await {
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

    // 目标班级必须存在
    if let Some(class_id) = update_data.class_id {
        match storage.get_class_by_id(class_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ClassNotFound,
                    "Target class does not exist",
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
    }

    if let Some(ref username) = update_data.username
        && let Ok(Some(other)) = storage.get_student_by_username(username).await
        && other.id != student_id
    {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::StudentUsernameAlreadyExists,
            "Username already exists",
        )));
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

    let transfer_target = update_data
        .class_id
        .filter(|class_id| *class_id != existing.class_id);

    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => {
            // 班级调动：成绩行改挂新班级的任课关联
            if let Some(new_class_id) = transfer_target {
                let academic_year = AppConfig::get().school.default_academic_year.clone();
                match storage
                    .transfer_student_marks(student_id, new_class_id, &academic_year)
                    .await
                {
                    Ok(()) => {
                        info!(
                            "Student {} transferred from class {} to class {}",
                            student_id, existing.class_id, new_class_id
                        );
                    }
                    Err(e) => {
                        error!(
                            "Student {} transferred but mark migration failed: {}",
                            student_id, e
                        );
                    }
                }
            }

            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(student, "Student updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => {
            error!("Failed to update student {}: {}", student_id, e);
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::StudentUpdateFailed,
                format!("Failed to update student: {e}"),
            )))
        }
    }
}
