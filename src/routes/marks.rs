use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::Role;
use crate::models::marks::requests::{MarkQueryParams, SaveMarksRequest, UpdateMarkRequest};
use crate::services::MarkService;
use crate::utils::SafeMarkIdI64;

// 懒加载的全局 MARK_SERVICE 实例
static MARK_SERVICE: Lazy<MarkService> = Lazy::new(MarkService::new_lazy);

// HTTP处理程序
pub async fn list_marks(
    req: HttpRequest,
    query: web::Query<MarkQueryParams>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.list_marks(&req, query.into_inner()).await
}

pub async fn update_mark(
    req: HttpRequest,
    mark_id: SafeMarkIdI64,
    values: web::Json<UpdateMarkRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE
        .update_mark(&req, mark_id.0, values.into_inner())
        .await
}

pub async fn save_marks(
    req: HttpRequest,
    save_data: web::Json<SaveMarksRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.save_marks(&req, save_data.into_inner()).await
}

// 配置路由：成绩录入对教师与管理员开放
pub fn configure_marks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/marks")
            .wrap(middlewares::RequireRole::new_any(Role::teacher_roles()))
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::get().to(list_marks)))
            .service(web::resource("/save").route(web::post().to(save_marks)))
            .service(web::resource("/{mark_id}").route(web::put().to(update_mark))),
    );
}
