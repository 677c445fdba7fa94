use serde::Serialize;
use ts_rs::TS;

use crate::grading::AssembledReport;
use crate::models::marks::entities::Trimester;
use crate::models::reports::entities::StudentReport;
use crate::models::students::entities::Student;

// 叙述性完整报告中的一条：评语报告及其科目/教师展示名
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct FullReportEntry {
    pub subject_name: String,
    pub subject_arabic_name: Option<String>,
    pub teacher_name: String,
    #[serde(flatten)]
    #[ts(flatten)]
    pub report: StudentReport,
}

// 学生叙述性完整报告，阿拉伯语族科目排在末尾
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct FullReportResponse {
    pub student: Student,
    pub class_name: String,
    pub entries: Vec<FullReportEntry>,
}

// 学生数值成绩单：分组表格、总分、等级、平均百分比
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct StudentResultsResponse {
    pub student: Student,
    pub class_name: String,
    pub trimester: Trimester,
    #[serde(flatten)]
    #[ts(flatten)]
    pub report: AssembledReport,
}
