//! 总分与等级汇总
//!
//! 纯函数：输入细则与分值映射，输出总分和等级。边界校验在编辑入口完成，
//! 这里假定输入已通过校验，缺失的评分项按 0 计。

use serde::Serialize;
use ts_rs::TS;

use super::rubric::{ComponentMap, Rubric};

/// 等级阈值表（总分按 100 分制）
///
/// 注意：低于 60 的保底标签沿用现行成绩单上的 "Below B-"，与其上方的
/// D-/D/D+ 档位并不一致。在产品方确认前保持原样，不要自行修正。
const GRADE_TABLE: [(f64, &str); 12] = [
    (96.0, "A+"),
    (93.0, "A"),
    (89.0, "A-"),
    (86.0, "B+"),
    (83.0, "B"),
    (79.0, "B-"),
    (76.0, "C+"),
    (73.0, "C"),
    (69.0, "C-"),
    (66.0, "D+"),
    (63.0, "D"),
    (60.0, "D-"),
];

const FALLBACK_GRADE: &str = "Below B-";

/// 按总分求等级
pub fn grade_for(total: f64) -> &'static str {
    for (threshold, grade) in GRADE_TABLE {
        if total >= threshold {
            return grade;
        }
    }
    FALLBACK_GRADE
}

// 汇总结果
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub struct ScoreSummary {
    pub total: f64,
    pub grade: String,
}

/// 汇总一条成绩：总分 = 细则内各评分项之和（缺失按 0），等级按阈值表
pub fn aggregate(rubric: &Rubric, values: &ComponentMap) -> ScoreSummary {
    let total: f64 = rubric
        .components()
        .map(|component| values.get(&component).copied().unwrap_or(0.0))
        .sum();

    ScoreSummary {
        total,
        grade: grade_for(total).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::rubric::{Component, SubjectCategory};

    fn standard_values() -> ComponentMap {
        let mut values = ComponentMap::new();
        values.insert(Component::Participation, 12.0);
        values.insert(Component::Behavior, 10.0);
        values.insert(Component::WorkingQuiz, 11.0);
        values.insert(Component::FinalExam, 30.0);
        values.insert(Component::Project, 17.0);
        values
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let rubric = SubjectCategory::Standard.rubric();
        let summary = aggregate(rubric, &standard_values());
        assert_eq!(summary.total, 80.0);
    }

    #[test]
    fn test_missing_components_count_as_zero() {
        let rubric = SubjectCategory::Standard.rubric();
        let mut values = ComponentMap::new();
        values.insert(Component::FinalExam, 20.0);
        assert_eq!(aggregate(rubric, &values).total, 20.0);

        let empty = ComponentMap::new();
        let summary = aggregate(rubric, &empty);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.grade, "Below B-");
    }

    #[test]
    fn test_components_outside_rubric_are_ignored() {
        let rubric = SubjectCategory::Standard.rubric();
        let mut values = standard_values();
        // Memorizing 不在默认细则中，不应计入总分
        values.insert(Component::Memorizing, 10.0);
        assert_eq!(aggregate(rubric, &values).total, 80.0);
    }

    #[test]
    fn test_deterministic() {
        let rubric = SubjectCategory::Islamic.rubric();
        let mut values = ComponentMap::new();
        values.insert(Component::Reading, 8.0);
        values.insert(Component::Memorizing, 9.0);
        values.insert(Component::FinalExam, 33.0);

        let first = aggregate(rubric, &values);
        let second = aggregate(rubric, &values);
        assert_eq!(first, second);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_for(100.0), "A+");
        assert_eq!(grade_for(96.0), "A+");
        assert_eq!(grade_for(95.999), "A");
        assert_eq!(grade_for(93.0), "A");
        assert_eq!(grade_for(89.0), "A-");
        assert_eq!(grade_for(86.0), "B+");
        assert_eq!(grade_for(83.0), "B");
        assert_eq!(grade_for(79.0), "B-");
        assert_eq!(grade_for(76.0), "C+");
        assert_eq!(grade_for(73.0), "C");
        assert_eq!(grade_for(69.0), "C-");
        assert_eq!(grade_for(66.0), "D+");
        assert_eq!(grade_for(63.0), "D");
        assert_eq!(grade_for(60.0), "D-");
        assert_eq!(grade_for(59.999), "Below B-");
        assert_eq!(grade_for(0.0), "Below B-");
    }
}
