//! 教师实体
//!
//! 管理员也存放在本表，通过 role 列区分。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub arabic_name: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub academic_year: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::class_teachers::Entity")]
    ClassTeachers,
    #[sea_orm(has_many = "super::subject_teachers::Entity")]
    SubjectTeachers,
    #[sea_orm(has_many = "super::student_reports::Entity")]
    StudentReports,
}

impl Related<super::class_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassTeachers.def()
    }
}

impl Related<super::subject_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubjectTeachers.def()
    }
}

impl Related<super::student_reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentReports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_teacher(self) -> crate::models::teachers::entities::Teacher {
        use crate::models::teachers::entities::{Teacher, TeacherRole};
        use chrono::{DateTime, Utc};

        Teacher {
            id: self.id,
            name: self.name,
            arabic_name: self.arabic_name,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role.parse::<TeacherRole>().unwrap_or(TeacherRole::Teacher),
            academic_year: self.academic_year,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
