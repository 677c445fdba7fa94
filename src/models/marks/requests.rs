use serde::Deserialize;
use ts_rs::TS;

use crate::models::marks::entities::Trimester;

// 成绩花名册查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct MarkQueryParams {
    pub class_id: i64,
    pub subject_id: i64,
    pub teacher_id: i64,
    #[ts(type = "string")]
    pub trimester: Trimester,
}

// 单条成绩更新请求
//
// 整行覆盖语义：未出现的评分项写为 0，而不是保留旧值。
// 不属于该科目细则的评分项只接受 0。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct UpdateMarkRequest {
    pub participation: Option<i32>,
    pub behavior: Option<i32>,
    pub reading: Option<i32>,
    pub memorizing: Option<i32>,
    pub oral_test: Option<i32>,
    pub working_quiz: Option<i32>,
    pub project: Option<i32>,
    pub class_activities: Option<i32>,
    pub final_exam: Option<i32>,
}

impl UpdateMarkRequest {
    /// 展开为九列的完整取值（缺省 0）
    pub fn column_values(&self) -> [(crate::grading::Component, i32); 9] {
        use crate::grading::Component;
        [
            (Component::Participation, self.participation.unwrap_or(0)),
            (Component::Behavior, self.behavior.unwrap_or(0)),
            (Component::Reading, self.reading.unwrap_or(0)),
            (Component::Memorizing, self.memorizing.unwrap_or(0)),
            (Component::OralTest, self.oral_test.unwrap_or(0)),
            (Component::WorkingQuiz, self.working_quiz.unwrap_or(0)),
            (Component::Project, self.project.unwrap_or(0)),
            (
                Component::ClassActivities,
                self.class_activities.unwrap_or(0),
            ),
            (Component::FinalExam, self.final_exam.unwrap_or(0)),
        ]
    }

    pub fn component_map(&self) -> crate::grading::ComponentMap {
        self.column_values()
            .into_iter()
            .map(|(component, value)| (component, value as f64))
            .collect()
    }
}

// 批量保存中的一行
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct SaveMarkRow {
    pub mark_id: i64,
    #[serde(flatten)]
    #[ts(flatten)]
    pub values: UpdateMarkRequest,
}

// 批量保存请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct SaveMarksRequest {
    pub marks: Vec<SaveMarkRow>,
}
