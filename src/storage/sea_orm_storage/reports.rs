use super::SeaOrmStorage;
use crate::entity::prelude::{Subjects, Teachers};
use crate::entity::student_reports::{ActiveModel, Column, Entity as StudentReports};
use crate::errors::{Result, SamsError};
use crate::models::marks::entities::Trimester;
use crate::models::reports::{
    entities::{ReportStatus, StudentReport},
    requests::CreateReportRequest,
    responses::FullReportEntry,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 创建评语报告，(学生, 科目, 教师, 学段) 重复时拒绝
    pub async fn create_report_impl(
        &self,
        teacher_id: i64,
        academic_year: &str,
        req: CreateReportRequest,
    ) -> Result<StudentReport> {
        let exists = self
            .report_exists_impl(req.student_id, req.subject_id, teacher_id, req.trimester)
            .await?;
        if exists {
            return Err(SamsError::duplicate_record(format!(
                "Report already exists for student {}, subject {}, teacher {teacher_id}, {}",
                req.student_id, req.subject_id, req.trimester
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let recommendations = serde_json::to_string(&req.recommendations)?;

        let model = ActiveModel {
            student_id: Set(req.student_id),
            class_id: Set(req.class_id),
            teacher_id: Set(teacher_id),
            subject_id: Set(req.subject_id),
            academic_year: Set(req
                .academic_year
                .unwrap_or_else(|| academic_year.to_string())),
            trimester: Set(req.trimester.label().to_string()),
            status: Set(req
                .status
                .unwrap_or(ReportStatus::NotStarted)
                .label()
                .to_string()),
            comment: Set(req.comment.unwrap_or_default()),
            recommendations: Set(recommendations),
            quiz_score: Set(req.quiz_score),
            project_score: Set(req.project_score),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("创建评语报告失败: {e}")))?;

        Ok(result.into_student_report())
    }

    /// 某 (学生, 科目, 教师, 学段) 是否已有报告
    pub async fn report_exists_impl(
        &self,
        student_id: i64,
        subject_id: i64,
        teacher_id: i64,
        trimester: Trimester,
    ) -> Result<bool> {
        let existing = StudentReports::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::Trimester.eq(trimester.label()))
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询评语报告失败: {e}")))?;

        Ok(existing.is_some())
    }

    /// 列出学生全部评语报告，附科目与教师展示名
    pub async fn list_student_report_entries_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<FullReportEntry>> {
        let rows = StudentReports::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::SubjectId)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询评语报告失败: {e}")))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let subject_ids: Vec<i64> = rows.iter().map(|r| r.subject_id).collect();
        let teacher_ids: Vec<i64> = rows.iter().map(|r| r.teacher_id).collect();

        let subjects: HashMap<i64, (String, Option<String>)> = Subjects::find()
            .filter(crate::entity::subjects::Column::Id.is_in(subject_ids))
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询科目失败: {e}")))?
            .into_iter()
            .map(|s| (s.id, (s.name, s.arabic_name)))
            .collect();

        let teachers: HashMap<i64, String> = Teachers::find()
            .filter(crate::entity::teachers::Column::Id.is_in(teacher_ids))
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询教师失败: {e}")))?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let (subject_name, subject_arabic_name) = subjects
                    .get(&row.subject_id)
                    .cloned()
                    .unwrap_or_default();
                let teacher_name = teachers.get(&row.teacher_id).cloned().unwrap_or_default();
                FullReportEntry {
                    subject_name,
                    subject_arabic_name,
                    teacher_name,
                    report: row.into_student_report(),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_class_with_subjects};
    use crate::entity::student_reports::{Column, Entity as StudentReports};
    use crate::errors::SamsError;
    use crate::models::marks::entities::Trimester;
    use crate::models::reports::requests::CreateReportRequest;
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    fn report_request(seeded: &super::super::test_support::Seeded) -> CreateReportRequest {
        CreateReportRequest {
            student_id: seeded.student_id,
            class_id: seeded.class_id,
            subject_id: seeded.subject_ids[0],
            academic_year: None,
            trimester: Trimester::First,
            status: None,
            comment: Some("Consistent effort".to_string()),
            recommendations: vec!["Read daily".to_string()],
            quiz_score: Some(18),
            project_score: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_report_is_rejected() {
        let storage = memory_storage().await;
        let seeded = seed_class_with_subjects(&storage, &["Math"]).await;

        let created = storage
            .create_report_impl(seeded.teacher_id, "2024/2025", report_request(&seeded))
            .await
            .unwrap();
        assert_eq!(created.academic_year, "2024/2025");

        let second = storage
            .create_report_impl(seeded.teacher_id, "2024/2025", report_request(&seeded))
            .await;
        assert!(matches!(second, Err(SamsError::DuplicateRecord(_))));

        let count = StudentReports::find()
            .filter(Column::StudentId.eq(seeded.student_id))
            .count(&storage.db)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_report_exists_scopes_to_trimester() {
        let storage = memory_storage().await;
        let seeded = seed_class_with_subjects(&storage, &["Math"]).await;

        storage
            .create_report_impl(seeded.teacher_id, "2024/2025", report_request(&seeded))
            .await
            .unwrap();

        let mut other = report_request(&seeded);
        other.trimester = Trimester::Second;
        storage
            .create_report_impl(seeded.teacher_id, "2024/2025", other)
            .await
            .unwrap();

        assert!(
            storage
                .report_exists_impl(
                    seeded.student_id,
                    seeded.subject_ids[0],
                    seeded.teacher_id,
                    Trimester::First,
                )
                .await
                .unwrap()
        );
        assert!(
            !storage
                .report_exists_impl(
                    seeded.student_id,
                    seeded.subject_ids[0],
                    seeded.teacher_id,
                    Trimester::Third,
                )
                .await
                .unwrap()
        );
    }
}
