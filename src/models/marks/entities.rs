use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::grading::{Component, ComponentMap};

// 学段，序列化为 "First Trimester" 样式的展示名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    pub const ALL: [Trimester; 3] = [Trimester::First, Trimester::Second, Trimester::Third];

    /// 数据库与前端均使用的展示名
    pub fn label(&self) -> &'static str {
        match self {
            Trimester::First => "First Trimester",
            Trimester::Second => "Second Trimester",
            Trimester::Third => "Third Trimester",
        }
    }
}

impl std::fmt::Display for Trimester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Trimester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "First Trimester" => Ok(Trimester::First),
            "Second Trimester" => Ok(Trimester::Second),
            "Third Trimester" => Ok(Trimester::Third),
            _ => Err(format!("Invalid trimester: {s}")),
        }
    }
}

impl Serialize for Trimester {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Trimester {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的学段: '{s}'. 支持: First Trimester, Second Trimester, Third Trimester"
            ))
        })
    }
}

// 成绩实体
//
// 九个评分项列覆盖全部细则，不属于该科目细则的列恒为 0。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/mark.ts")]
pub struct Mark {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub class_teacher_id: i64,
    pub academic_year: String,
    pub trimester: Trimester,
    pub participation: i32,
    pub behavior: i32,
    pub reading: i32,
    pub memorizing: i32,
    pub oral_test: i32,
    pub working_quiz: i32,
    pub project: i32,
    pub class_activities: i32,
    pub final_exam: i32,
    pub total_marks: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Mark {
    /// 按评分项枚举展开九列，供成绩核心模块使用
    pub fn component_map(&self) -> ComponentMap {
        let mut values = ComponentMap::new();
        values.insert(Component::Participation, self.participation as f64);
        values.insert(Component::Behavior, self.behavior as f64);
        values.insert(Component::Reading, self.reading as f64);
        values.insert(Component::Memorizing, self.memorizing as f64);
        values.insert(Component::OralTest, self.oral_test as f64);
        values.insert(Component::WorkingQuiz, self.working_quiz as f64);
        values.insert(Component::Project, self.project as f64);
        values.insert(Component::ClassActivities, self.class_activities as f64);
        values.insert(Component::FinalExam, self.final_exam as f64);
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimester_labels_round_trip() {
        for trimester in Trimester::ALL {
            assert_eq!(trimester.label().parse::<Trimester>(), Ok(trimester));
        }
        assert!("Fourth Trimester".parse::<Trimester>().is_err());
    }
}
