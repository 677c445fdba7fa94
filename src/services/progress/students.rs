use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProgressService;
use crate::models::marks::requests::MarkQueryParams;
use crate::models::progress::requests::StudentsProgressQuery;
use crate::models::progress::responses::StudentProgressRow;
use crate::models::{ApiResponse, ErrorCode};

/// 某 (班级, 科目, 教师, 学段) 花名册的报告进度
///
/// 已创建评语报告的学生为 "Done"，否则 "Not Yet"。
pub async fn students_progress(
    service: &ProgressService,
    request: &HttpRequest,
    query: StudentsProgressQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let roster = match storage
        .list_roster_marks(&MarkQueryParams {
            class_id: query.class_id,
            subject_id: query.subject_id,
            teacher_id: query.teacher_id,
            trimester: query.trimester,
        })
        .await
    {
        Ok(roster) => roster,
        Err(e) => {
            error!("Failed to load roster for class {}: {}", query.class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve roster",
                )),
            );
        }
    };

    let mut rows = Vec::with_capacity(roster.len());
    for entry in roster {
        let done = match storage
            .report_exists(
                entry.mark.student_id,
                query.subject_id,
                query.teacher_id,
                query.trimester,
            )
            .await
        {
            Ok(done) => done,
            Err(e) => {
                error!(
                    "Failed to check report for student {}: {}",
                    entry.mark.student_id, e
                );
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to check report status",
                    )),
                );
            }
        };

        rows.push(StudentProgressRow {
            student_id: entry.mark.student_id,
            student_name: entry.student_name,
            student_arabic_name: entry.student_arabic_name,
            status: if done { "Done" } else { "Not Yet" }.to_string(),
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        rows,
        "Student progress retrieved successfully",
    )))
}
