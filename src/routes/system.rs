use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::Role;
use crate::models::system::requests::UpdateSettingsRequest;
use crate::services::SystemService;

// 懒加载的全局 SYSTEM_SERVICE 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

// HTTP处理程序
pub async fn get_settings(req: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.get_settings(&req).await
}

pub async fn update_settings(
    req: HttpRequest,
    settings_data: web::Json<UpdateSettingsRequest>,
) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE
        .update_settings(&req, settings_data.into_inner())
        .await
}

// 配置路由：录入截止日查询公开，修改仅管理员
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system/settings")
            .service(
                web::resource("")
                    .route(web::get().to(get_settings))
                    .route(
                        web::put()
                            .to(update_settings)
                            .wrap(middlewares::RequireRole::new_any(Role::admin_roles()))
                            .wrap(middlewares::RequireJWT),
                    ),
            ),
    );
}
