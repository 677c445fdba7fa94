use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 科目实体
//
// 评分细则类别不落库，由名称经 SubjectCategory::from_subject_name 解析。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub arabic_name: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Subject {
    pub fn category(&self) -> crate::grading::SubjectCategory {
        crate::grading::SubjectCategory::from_subject_name(&self.name)
    }
}
