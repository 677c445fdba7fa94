use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReportService;
use crate::grading::assemble::SubjectMark;
use crate::grading::{SubjectCategory, assemble, partition_arabic_last};
use crate::models::marks::entities::Trimester;
use crate::models::reports::responses::StudentResultsResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 学生数值成绩单：某学段全科成绩按细则形状分组汇总
pub async fn student_results(
    service: &ReportService,
    request: &HttpRequest,
    student_id: i64,
    trimester: Trimester,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
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

    let class_name = match storage.get_class_by_id(student.class_id).await {
        Ok(Some(class)) => class.name,
        Ok(None) => String::new(),
        Err(e) => {
            error!("Failed to get class {}: {}", student.class_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve class",
                )),
            );
        }
    };

    match storage.list_student_marks(student_id, trimester).await {
        Ok(rows) => {
            let subject_marks: Vec<SubjectMark> = rows
                .into_iter()
                .map(|(mark, subject)| SubjectMark {
                    category: SubjectCategory::from_subject_name(&subject.name),
                    values: mark.component_map(),
                    subject_name: subject.name,
                    subject_arabic_name: subject.arabic_name,
                })
                .collect();
            let subject_marks =
                partition_arabic_last(subject_marks, |mark| mark.subject_name.as_str());

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentResultsResponse {
                    student,
                    class_name,
                    trimester,
                    report: assemble(&subject_marks),
                },
                "Student results retrieved successfully",
            )))
        }
        Err(e) => {
            error!("Failed to list marks for student {}: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve student marks",
                )),
            )
        }
    }
}
