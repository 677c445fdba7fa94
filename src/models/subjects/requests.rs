use serde::Deserialize;
use ts_rs::TS;

// 创建科目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct CreateSubjectRequest {
    pub name: String,
    pub arabic_name: Option<String>,
}
