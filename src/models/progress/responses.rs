use serde::Serialize;
use ts_rs::TS;

// 单个教师的成绩录入进度
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct TeacherProgress {
    pub teacher_id: i64,
    pub teacher_name: String,
    pub subjects: Vec<String>,
    pub classes: Vec<String>,
    pub completed_classes: Vec<String>,
    pub incomplete_classes: Vec<String>,
}

// 花名册中单个学生的报告进度
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct StudentProgressRow {
    pub student_id: i64,
    pub student_name: String,
    pub student_arabic_name: Option<String>,
    // "Done" / "Not Yet"
    pub status: String,
}
