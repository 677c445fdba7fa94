//! 成绩实体
//!
//! 九个评分项列覆盖全部细则；不属于该科目细则的列恒为 0。
//! total_marks 为派生列，由编辑入口按细则求和后写入。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "marks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub class_teacher_id: i64,
    pub academic_year: String,
    pub trimester: String,
    pub participation: i32,
    pub behavior: i32,
    pub reading: i32,
    pub memorizing: i32,
    pub oral_test: i32,
    pub working_quiz: i32,
    pub project: i32,
    pub class_activities: i32,
    pub final_exam: i32,
    pub total_marks: i32,
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
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(
        belongs_to = "super::class_teachers::Entity",
        from = "Column::ClassTeacherId",
        to = "super::class_teachers::Column::Id"
    )]
    ClassTeacher,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::class_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassTeacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_mark(self) -> crate::models::marks::entities::Mark {
        use crate::models::marks::entities::{Mark, Trimester};
        use chrono::{DateTime, Utc};

        Mark {
            id: self.id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            class_teacher_id: self.class_teacher_id,
            academic_year: self.academic_year,
            trimester: self
                .trimester
                .parse::<Trimester>()
                .unwrap_or(Trimester::First),
            participation: self.participation,
            behavior: self.behavior,
            reading: self.reading,
            memorizing: self.memorizing,
            oral_test: self.oral_test,
            working_quiz: self.working_quiz,
            project: self.project,
            class_activities: self.class_activities,
            final_exam: self.final_exam,
            total_marks: self.total_marks,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
