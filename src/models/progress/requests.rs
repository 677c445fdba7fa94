use serde::Deserialize;
use ts_rs::TS;

use crate::models::marks::entities::Trimester;

// 教师进度查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct TeachersProgressQuery {
    #[ts(type = "string")]
    pub trimester: Trimester,
}

// 学生报告进度查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct StudentsProgressQuery {
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    #[ts(type = "string")]
    pub trimester: Trimester,
}
