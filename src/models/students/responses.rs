use serde::Serialize;
use ts_rs::TS;

// CSV 导入中被拒绝的行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct ImportRowError {
    // 1 起始的数据行号（不含表头）
    pub line: usize,
    pub reason: String,
}

// CSV 导入结果
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct ImportStudentsResponse {
    pub imported: usize,
    pub failed: Vec<ImportRowError>,
}
