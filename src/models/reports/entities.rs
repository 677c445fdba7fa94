use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::marks::entities::Trimester;

// 评语报告状态，序列化为展示名
#[derive(Debug, Clone, Copy, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub enum ReportStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::NotStarted => "Not Started",
            ReportStatus::InProgress => "In Progress",
            ReportStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ReportStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(ReportStatus::NotStarted),
            "In Progress" => Ok(ReportStatus::InProgress),
            "Completed" => Ok(ReportStatus::Completed),
            _ => Err(format!("Invalid report status: {s}")),
        }
    }
}

impl Serialize for ReportStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ReportStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的报告状态: '{s}'. 支持: Not Started, In Progress, Completed"
            ))
        })
    }
}

// 学生评语报告实体
//
// 每个 (学生, 科目, 教师, 学段) 至多一条，重复创建会被拒绝。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct StudentReport {
    pub id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub academic_year: String,
    pub trimester: Trimester,
    pub status: ReportStatus,
    pub comment: String,
    pub recommendations: Vec<String>,
    pub quiz_score: Option<i32>,
    pub project_score: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
