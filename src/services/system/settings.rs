use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::SystemService;
use crate::models::system::requests::UpdateSettingsRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 读取全局设置（未配置时返回 404）
pub async fn get_settings(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_settings().await {
        Ok(Some(settings)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            settings,
            "Settings retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotFound,
            "Settings not configured",
        ))),
        Err(e) => {
            error!("Failed to get settings: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve settings",
                )),
            )
        }
    }
}

/// upsert 到固定单行（id = 1）
pub async fn update_settings(
    service: &SystemService,
    request: &HttpRequest,
    settings_data: UpdateSettingsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.upsert_settings(settings_data.target_date).await {
        Ok(settings) => {
            info!("Mark entry deadline set to {}", settings.target_date);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                settings,
                "Settings updated successfully",
            )))
        }
        Err(e) => {
            error!("Failed to update settings: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SettingsUpdateFailed,
                    format!("Failed to update settings: {e}"),
                )),
            )
        }
    }
}
