use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProgressService;
use crate::errors::Result as SamsResult;
use crate::grading::{ClassAssignment, SubjectCategory, TrimesterMark, classify_assignments};
use crate::models::marks::entities::Trimester;
use crate::models::progress::requests::TeachersProgressQuery;
use crate::models::progress::responses::TeacherProgress;
use crate::models::teachers::entities::Teacher;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 汇总单个教师在某学段的录入进度
///
/// 同一班级的多个科目合并成一条任课记录，任一科目缺项即视为该班未完成。
async fn teacher_progress(
    storage: &dyn Storage,
    teacher: &Teacher,
    trimester: Trimester,
) -> SamsResult<TeacherProgress> {
    let pairs = storage.list_teacher_assignments(teacher.id).await?;

    let mut subjects: Vec<String> = Vec::new();
    let mut assignments: Vec<ClassAssignment> = Vec::new();

    for (class, subject) in &pairs {
        if !subjects.contains(&subject.name) {
            subjects.push(subject.name.clone());
        }

        let marks = storage
            .list_assignment_marks(class.id, teacher.id, subject.id, trimester)
            .await?;
        let category = SubjectCategory::from_subject_name(&subject.name);
        let trimester_marks = marks.iter().map(|mark| TrimesterMark {
            category,
            values: mark.component_map(),
        });

        match assignments
            .iter_mut()
            .find(|assignment| assignment.class_name == class.name)
        {
            Some(assignment) => assignment.marks.extend(trimester_marks),
            None => assignments.push(ClassAssignment {
                class_name: class.name.clone(),
                marks: trimester_marks.collect(),
            }),
        }
    }

    let classes: Vec<String> = assignments
        .iter()
        .map(|assignment| assignment.class_name.clone())
        .collect();
    let split = classify_assignments(&assignments);

    Ok(TeacherProgress {
        teacher_id: teacher.id,
        teacher_name: teacher.name.clone(),
        subjects,
        classes,
        completed_classes: split.completed,
        incomplete_classes: split.incomplete,
    })
}

pub async fn teachers_progress(
    service: &ProgressService,
    request: &HttpRequest,
    query: TeachersProgressQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teachers = match storage.list_teachers().await {
        Ok(teachers) => teachers,
        Err(e) => {
            error!("Failed to list teachers: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to retrieve teachers",
                )),
            );
        }
    };

    let mut progress = Vec::with_capacity(teachers.len());
    for teacher in &teachers {
        match teacher_progress(storage.as_ref(), teacher, query.trimester).await {
            Ok(row) => progress.push(row),
            Err(e) => {
                error!("Failed to compute progress for teacher {}: {}", teacher.id, e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to compute teacher progress",
                    )),
                );
            }
        }
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        progress,
        "Teacher progress retrieved successfully",
    )))
}
