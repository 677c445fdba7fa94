use serde::Deserialize;
use ts_rs::TS;

// 更新全局设置请求（upsert 到单行）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct UpdateSettingsRequest {
    #[ts(type = "string")]
    pub target_date: chrono::NaiveDate,
}
