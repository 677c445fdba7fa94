use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::config::AppConfig;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_password, validate_username};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    mut student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if student_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Student name must not be empty",
        )));
    }

    // 班级必须存在
    match storage.get_class_by_id(student_data.class_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ClassNotFound,
                "Class does not exist",
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

    // 可选的登录账号
    if let Some(ref username) = student_data.username {
        if let Err(msg) = validate_username(username) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
        if let Ok(Some(_)) = storage.get_student_by_username(username).await {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::StudentUsernameAlreadyExists,
                "Username already exists",
            )));
        }
    }

    if let Some(ref password) = student_data.password {
        if let Err(msg) = validate_password(password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
        match hash_password(password) {
            Ok(hash) => student_data.password = Some(hash),
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

    let class_id = student_data.class_id;
    match storage.create_student(student_data).await {
        Ok(student) => {
            // 入学即在所属班级的每条有效授课配对下生成三个学段的零分成绩行
            let academic_year = AppConfig::get().school.default_academic_year.clone();
            match storage
                .create_zero_marks_for_student(student.id, class_id, &academic_year)
                .await
            {
                Ok(created) => {
                    info!(
                        "Student {} enrolled in class {}, {} zero mark rows created",
                        student.id, class_id, created
                    );
                }
                Err(e) => {
                    error!(
                        "Student {} created but mark fan-out failed: {}",
                        student.id, e
                    );
                }
            }

            Ok(HttpResponse::Created()
                .json(ApiResponse::success(student, "Student created successfully")))
        }
        Err(e) => {
            error!("Failed to create student: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentCreationFailed,
                    format!("Failed to create student: {e}"),
                )),
            )
        }
    }
}
