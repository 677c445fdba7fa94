use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::Role;
use crate::models::progress::requests::{StudentsProgressQuery, TeachersProgressQuery};
use crate::services::ProgressService;

// 懒加载的全局 PROGRESS_SERVICE 实例
static PROGRESS_SERVICE: Lazy<ProgressService> = Lazy::new(ProgressService::new_lazy);

// HTTP处理程序
pub async fn teachers_progress(
    req: HttpRequest,
    query: web::Query<TeachersProgressQuery>,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE
        .teachers_progress(&req, query.into_inner())
        .await
}

pub async fn students_progress(
    req: HttpRequest,
    query: web::Query<StudentsProgressQuery>,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE
        .students_progress(&req, query.into_inner())
        .await
}

// 配置路由：进度看板
pub fn configure_progress_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/progress")
            .wrap(middlewares::RequireJWT)
            .service(
                // 全校教师录入进度，仅管理员
                web::resource("/teachers").route(
                    web::get()
                        .to(teachers_progress)
                        .wrap(middlewares::RequireRole::new_any(Role::admin_roles())),
                ),
            )
            .service(
                // 教师查看自己花名册的报告进度
                web::resource("/students").route(
                    web::get()
                        .to(students_progress)
                        .wrap(middlewares::RequireRole::new_any(Role::teacher_roles())),
                ),
            ),
    );
}
