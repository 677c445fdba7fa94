//! 全局设置实体
//!
//! 单行表，固定 id = 1，upsert 维护。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "global_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub target_date: Date,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_settings(self) -> crate::models::system::entities::GlobalSettings {
        use crate::models::system::entities::GlobalSettings;
        use chrono::{DateTime, Utc};

        GlobalSettings {
            id: self.id,
            target_date: self.target_date,
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
