//! 学生评语报告实体
//!
//! recommendations 列存放 JSON 字符串数组。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub academic_year: String,
    pub trimester: String,
    pub status: String,
    pub comment: String,
    pub recommendations: String,
    pub quiz_score: Option<i32>,
    pub project_score: Option<i32>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::teachers::Entity",
        from = "Column::TeacherId",
        to = "super::teachers::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student_report(self) -> crate::models::reports::entities::StudentReport {
        use crate::models::reports::entities::{ReportStatus, StudentReport};
        use chrono::{DateTime, Utc};

        StudentReport {
            id: self.id,
            student_id: self.student_id,
            class_id: self.class_id,
            teacher_id: self.teacher_id,
            subject_id: self.subject_id,
            academic_year: self.academic_year,
            trimester: self
                .trimester
                .parse::<crate::models::marks::entities::Trimester>()
                .unwrap_or(crate::models::marks::entities::Trimester::First),
            status: self
                .status
                .parse::<ReportStatus>()
                .unwrap_or(ReportStatus::NotStarted),
            comment: self.comment,
            recommendations: serde_json::from_str(&self.recommendations).unwrap_or_default(),
            quiz_score: self.quiz_score,
            project_score: self.project_score,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
