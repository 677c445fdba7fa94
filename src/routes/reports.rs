use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::Role;
use crate::models::reports::requests::{CreateReportRequest, ResultsQuery};
use crate::services::ReportService;
use crate::utils::SafeStudentIdI64;

// 懒加载的全局 REPORT_SERVICE 实例
static REPORT_SERVICE: Lazy<ReportService> = Lazy::new(ReportService::new_lazy);

// HTTP处理程序
pub async fn create_report(
    req: HttpRequest,
    report_data: web::Json<CreateReportRequest>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .create_report(&req, report_data.into_inner())
        .await
}

pub async fn full_report(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE.full_report(&req, student_id.0).await
}

pub async fn student_results(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<ResultsQuery>,
) -> ActixResult<HttpResponse> {
    REPORT_SERVICE
        .student_results(&req, student_id.0, query.into_inner().trimester)
        .await
}

// 配置路由
pub fn configure_reports_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reports")
            .wrap(middlewares::RequireRole::new_any(Role::teacher_roles()))
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::post().to(create_report)))
            .service(
                web::resource("/student/{student_id}/results")
                    .route(web::get().to(student_results)),
            )
            .service(web::resource("/student/{student_id}").route(web::get().to(full_report))),
    );
}
