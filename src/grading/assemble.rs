//! 学生成绩单组装
//!
//! 按细则签名把各科成绩分成若干组（同形状的科目共用一张表），
//! 计算每科总分与等级，以及全科平均百分比。渲染本身不在这里做。

use serde::Serialize;
use ts_rs::TS;

use super::aggregate::aggregate;
use super::rubric::{ComponentMap, SubjectCategory, is_arabic_family};

/// 组装输入：一条科目成绩
#[derive(Debug, Clone)]
pub struct SubjectMark {
    pub subject_name: String,
    pub subject_arabic_name: Option<String>,
    pub category: SubjectCategory,
    pub values: ComponentMap,
}

// 成绩单中的一行
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportRow {
    pub subject_name: String,
    pub subject_arabic_name: Option<String>,
    // 与所在分组的 components 顺序对齐
    pub scores: Vec<f64>,
    pub total: f64,
    pub grade: String,
}

// 共享同一细则形状的一组科目
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct ReportGroup {
    pub signature: String,
    pub components: Vec<String>,
    pub headers: Vec<String>,
    pub rows: Vec<ReportRow>,
}

// 组装结果
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/report.ts")]
pub struct AssembledReport {
    pub groups: Vec<ReportGroup>,
    pub total_sum: f64,
    pub average_percentage: f64,
}

/// 全科平均百分比
///
/// 假定每个细则满分恰好为 100（startup 校验保证），否则该公式会失真。
pub fn average_percentage(totals: &[f64]) -> f64 {
    if totals.is_empty() {
        return 0.0;
    }
    let sum: f64 = totals.iter().sum();
    sum / (totals.len() as f64 * 100.0) * 100.0
}

/// 把各科成绩按细则签名分组并汇总
///
/// 分组保持首次出现顺序；同组内科目保持输入顺序。
pub fn assemble(marks: &[SubjectMark]) -> AssembledReport {
    let mut groups: Vec<ReportGroup> = Vec::new();
    let mut totals = Vec::with_capacity(marks.len());

    for mark in marks {
        let rubric = mark.category.rubric();
        let summary = aggregate(rubric, &mark.values);
        totals.push(summary.total);

        let row = ReportRow {
            subject_name: mark.subject_name.clone(),
            subject_arabic_name: mark.subject_arabic_name.clone(),
            scores: rubric
                .components()
                .map(|c| mark.values.get(&c).copied().unwrap_or(0.0))
                .collect(),
            total: summary.total,
            grade: summary.grade,
        };

        let signature = rubric.signature();
        match groups.iter_mut().find(|g| g.signature == signature) {
            Some(group) => group.rows.push(row),
            None => groups.push(ReportGroup {
                signature,
                components: rubric.components().map(|c| c.key().to_string()).collect(),
                headers: rubric
                    .components()
                    .map(|c| c.display_label().to_string())
                    .collect(),
                rows: vec![row],
            }),
        }
    }

    AssembledReport {
        total_sum: totals.iter().sum(),
        average_percentage: average_percentage(&totals),
        groups,
    }
}

/// 稳定分割：阿拉伯语族科目移到末尾，其余科目保持相对顺序
pub fn partition_arabic_last<T>(items: Vec<T>, subject_name: impl Fn(&T) -> &str) -> Vec<T> {
    let (arabic, other): (Vec<T>, Vec<T>) = items
        .into_iter()
        .partition(|item| is_arabic_family(subject_name(item)));

    let mut result = other;
    result.extend(arabic);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::rubric::Component;

    fn subject_mark(name: &str, final_exam: f64) -> SubjectMark {
        let mut values = ComponentMap::new();
        values.insert(Component::Participation, 10.0);
        values.insert(Component::FinalExam, final_exam);
        SubjectMark {
            subject_name: name.to_string(),
            subject_arabic_name: None,
            category: SubjectCategory::from_subject_name(name),
            values,
        }
    }

    #[test]
    fn test_same_signature_shares_a_group() {
        let report = assemble(&[subject_mark("Math", 30.0), subject_mark("Science", 28.0)]);
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].rows.len(), 2);
    }

    #[test]
    fn test_different_signatures_split_groups() {
        let report = assemble(&[
            subject_mark("Math", 30.0),
            subject_mark("Islamic", 30.0),
            subject_mark("Arabic", 30.0),
            subject_mark("Science", 25.0),
        ]);
        // 默认、伊斯兰教育、阿拉伯语三种细则形状
        assert_eq!(report.groups.len(), 3);

        let standard_group = report
            .groups
            .iter()
            .find(|g| g.rows.iter().any(|r| r.subject_name == "Math"))
            .unwrap();
        assert!(standard_group.rows.iter().any(|r| r.subject_name == "Science"));
    }

    #[test]
    fn test_group_order_is_first_seen() {
        let report = assemble(&[subject_mark("Islamic", 30.0), subject_mark("Math", 30.0)]);
        assert_eq!(report.groups[0].rows[0].subject_name, "Islamic");
        assert_eq!(report.groups[1].rows[0].subject_name, "Math");
    }

    #[test]
    fn test_scores_align_with_components() {
        let report = assemble(&[subject_mark("Math", 30.0)]);
        let group = &report.groups[0];
        assert_eq!(group.components.len(), group.rows[0].scores.len());

        let exam_idx = group
            .components
            .iter()
            .position(|c| c == "final_exam")
            .unwrap();
        assert_eq!(group.rows[0].scores[exam_idx], 30.0);
    }

    #[test]
    fn test_average_single_mark_out_of_100() {
        assert_eq!(average_percentage(&[80.0]), 80.0);
    }

    #[test]
    fn test_average_multiple_marks() {
        assert_eq!(average_percentage(&[80.0, 60.0]), 70.0);
        assert_eq!(average_percentage(&[]), 0.0);
    }

    #[test]
    fn test_assembled_totals() {
        let mut values = ComponentMap::new();
        values.insert(Component::Participation, 15.0);
        values.insert(Component::Behavior, 15.0);
        values.insert(Component::WorkingQuiz, 15.0);
        values.insert(Component::FinalExam, 35.0);
        values.insert(Component::Project, 0.0);
        let report = assemble(&[SubjectMark {
            subject_name: "Math".to_string(),
            subject_arabic_name: None,
            category: SubjectCategory::Standard,
            values,
        }]);
        assert_eq!(report.total_sum, 80.0);
        assert_eq!(report.average_percentage, 80.0);
        assert_eq!(report.groups[0].rows[0].grade, "B-");
    }

    #[test]
    fn test_partition_arabic_last_is_stable() {
        let subjects = vec!["Arabic", "Math", "Islamic", "Science", "English"];
        let sorted = partition_arabic_last(subjects, |s| s);
        assert_eq!(sorted, vec!["Math", "Science", "English", "Arabic", "Islamic"]);
    }
}
