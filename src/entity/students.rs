//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub arabic_name: Option<String>,
    pub date_of_birth: Date,
    pub school: Option<String>,
    pub nationality: Option<String>,
    pub iqama_no: Option<String>,
    pub passport_no: Option<String>,
    pub expenses: String,
    #[sea_orm(unique)]
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub class_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(has_many = "super::marks::Entity")]
    Marks,
    #[sea_orm(has_many = "super::student_reports::Entity")]
    StudentReports,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marks.def()
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
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::{ExpensesStatus, Student};
        use chrono::{DateTime, Utc};

        Student {
            id: self.id,
            name: self.name,
            arabic_name: self.arabic_name,
            date_of_birth: self.date_of_birth,
            school: self.school,
            nationality: self.nationality,
            iqama_no: self.iqama_no,
            passport_no: self.passport_no,
            expenses: self
                .expenses
                .parse::<ExpensesStatus>()
                .unwrap_or(ExpensesStatus::Paid),
            username: self.username,
            password_hash: self.password_hash,
            class_id: self.class_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
