use serde::Serialize;
use ts_rs::TS;

use crate::models::marks::entities::Mark;

// 花名册中的一行：成绩 + 学生姓名
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct MarkWithStudent {
    #[serde(flatten)]
    #[ts(flatten)]
    pub mark: Mark,
    pub student_name: String,
    pub student_arabic_name: Option<String>,
}

// 批量保存中失败的行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct SaveRowError {
    pub mark_id: i64,
    pub reason: String,
}

// 批量保存结果：部分失败时逐行列出，不整体回滚
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct SaveMarksResponse {
    pub saved: usize,
    pub failed: Vec<SaveRowError>,
}
