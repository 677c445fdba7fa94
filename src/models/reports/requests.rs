use serde::Deserialize;
use ts_rs::TS;

use crate::models::marks::entities::Trimester;
use crate::models::reports::entities::ReportStatus;

// 创建评语报告请求；teacher_id 取当前登录教师
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct CreateReportRequest {
    pub student_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub academic_year: Option<String>,
    #[ts(type = "string")]
    pub trimester: Trimester,
    pub status: Option<ReportStatus>,
    pub comment: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub quiz_score: Option<i32>,
    pub project_score: Option<i32>,
}

// 数值成绩单查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ResultsQuery {
    #[ts(type = "string")]
    pub trimester: Trimester,
}
