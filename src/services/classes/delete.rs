use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use super::ClassService;
use crate::errors::SamsError;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_class(class_id).await {
        Ok(true) => {
            info!("Class {} deleted", class_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::<()>::success_empty("Class deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        // 仍有学生的班级拒绝删除
        Err(SamsError::Validation(msg)) => {
            warn!("Refused to delete class {}: {}", class_id, msg);
            Ok(HttpResponse::Conflict()
                .json(ApiResponse::error_empty(ErrorCode::ClassDeleteFailed, msg)))
        }
        Err(e) => {
            error!("Failed to delete class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassDeleteFailed,
                    format!("Failed to delete class: {e}"),
                )),
            )
        }
    }
}
