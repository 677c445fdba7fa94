use super::SeaOrmStorage;
use crate::entity::global_settings::{ActiveModel, Entity as GlobalSettingsEntity};
use crate::errors::{Result, SamsError};
use crate::models::system::entities::GlobalSettings;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

// 单行表固定主键
const SETTINGS_ROW_ID: i64 = 1;

impl SeaOrmStorage {
    /// 获取全局设置
    pub async fn get_settings_impl(&self) -> Result<Option<GlobalSettings>> {
        let result = GlobalSettingsEntity::find_by_id(SETTINGS_ROW_ID)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询全局设置失败: {e}")))?;

        Ok(result.map(|m| m.into_settings()))
    }

    /// 写入成绩录入截止日（不存在则插入）
    pub async fn upsert_settings_impl(
        &self,
        target_date: chrono::NaiveDate,
    ) -> Result<GlobalSettings> {
        let now = chrono::Utc::now().timestamp();
        let existing = self.get_settings_impl().await?;

        let model = ActiveModel {
            id: Set(SETTINGS_ROW_ID),
            target_date: Set(target_date),
            updated_at: Set(now),
        };

        let result = if existing.is_some() {
            model
                .update(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("更新全局设置失败: {e}")))?
        } else {
            model
                .insert(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("创建全局设置失败: {e}")))?
        };

        Ok(result.into_settings())
    }
}
