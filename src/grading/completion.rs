//! 教师成绩录入进度分类
//!
//! 对教师的每个班级任课记录，按某一学段的全部成绩行分类为“已完成”或“未完成”。
//! 0 与未填写一律视为未录入（与现行系统口径一致，见 DESIGN.md）。
//! “未完成”判定是权威口径，“已完成”只是乐观升级，两者各自独立计算。

use super::rubric::{ComponentMap, Rubric, SubjectCategory};

/// 某学段内的一条成绩（已附带科目类别以便解析细则）
#[derive(Debug, Clone)]
pub struct TrimesterMark {
    pub category: SubjectCategory,
    pub values: ComponentMap,
}

impl TrimesterMark {
    pub fn rubric(&self) -> &'static Rubric {
        self.category.rubric()
    }
}

/// 教师在一个班级的任课记录及该学段全部成绩行
#[derive(Debug, Clone)]
pub struct ClassAssignment {
    pub class_name: String,
    pub marks: Vec<TrimesterMark>,
}

/// 分类结果：完成 / 未完成班级名单
#[derive(Debug, Clone, Default)]
pub struct ClassSplit {
    pub completed: Vec<String>,
    pub incomplete: Vec<String>,
}

/// 一条成绩是否完整：细则要求的每个评分项都严格非零
pub fn is_mark_complete(rubric: &Rubric, values: &ComponentMap) -> bool {
    rubric
        .components()
        .all(|component| values.get(&component).copied().unwrap_or(0.0) != 0.0)
}

/// 一条成绩是否缺项：任一细则评分项为零或未填写
pub fn has_unset_component(rubric: &Rubric, values: &ComponentMap) -> bool {
    rubric
        .components()
        .any(|component| values.get(&component).copied().unwrap_or(0.0) == 0.0)
}

/// 对一组班级任课记录做完成度分类
pub fn classify_assignments(assignments: &[ClassAssignment]) -> ClassSplit {
    let mut split = ClassSplit::default();

    for assignment in assignments {
        // 已完成：至少一条成绩且每条成绩的所有评分项均非零
        let completed = !assignment.marks.is_empty()
            && assignment
                .marks
                .iter()
                .all(|mark| is_mark_complete(mark.rubric(), &mark.values));

        // 未完成（权威口径）：没有任何成绩，或任一成绩存在缺项
        let incomplete = assignment.marks.is_empty()
            || assignment
                .marks
                .iter()
                .any(|mark| has_unset_component(mark.rubric(), &mark.values));

        if completed {
            split.completed.push(assignment.class_name.clone());
        }
        if incomplete {
            split.incomplete.push(assignment.class_name.clone());
        }
    }

    split
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::rubric::Component;

    fn full_standard_mark() -> TrimesterMark {
        let mut values = ComponentMap::new();
        values.insert(Component::Participation, 14.0);
        values.insert(Component::Behavior, 13.0);
        values.insert(Component::WorkingQuiz, 12.0);
        values.insert(Component::FinalExam, 30.0);
        values.insert(Component::Project, 18.0);
        TrimesterMark {
            category: SubjectCategory::Standard,
            values,
        }
    }

    #[test]
    fn test_empty_class_is_incomplete() {
        let split = classify_assignments(&[ClassAssignment {
            class_name: "Grade 5A".to_string(),
            marks: vec![],
        }]);
        assert_eq!(split.incomplete, vec!["Grade 5A"]);
        assert!(split.completed.is_empty());
    }

    #[test]
    fn test_all_nonzero_is_completed() {
        let split = classify_assignments(&[ClassAssignment {
            class_name: "Grade 5A".to_string(),
            marks: vec![full_standard_mark(), full_standard_mark()],
        }]);
        assert_eq!(split.completed, vec!["Grade 5A"]);
        assert!(split.incomplete.is_empty());
    }

    #[test]
    fn test_any_zero_component_is_incomplete_and_not_completed() {
        let mut mark = full_standard_mark();
        mark.values.insert(Component::Project, 0.0);

        let split = classify_assignments(&[ClassAssignment {
            class_name: "Grade 5A".to_string(),
            marks: vec![full_standard_mark(), mark],
        }]);
        assert_eq!(split.incomplete, vec!["Grade 5A"]);
        assert!(split.completed.is_empty());
    }

    #[test]
    fn test_missing_component_counts_as_unset() {
        let mut mark = full_standard_mark();
        mark.values.remove(&Component::FinalExam);
        assert!(has_unset_component(mark.rubric(), &mark.values));
        assert!(!is_mark_complete(mark.rubric(), &mark.values));
    }

    #[test]
    fn test_rubric_aware_completion() {
        // 伊斯兰教育细则要求 reading/memorizing/oral_test，默认细则不要求
        let mut values = ComponentMap::new();
        values.insert(Component::Participation, 9.0);
        values.insert(Component::Behavior, 8.0);
        values.insert(Component::WorkingQuiz, 10.0);
        values.insert(Component::FinalExam, 35.0);
        values.insert(Component::Project, 15.0);

        let standard = TrimesterMark {
            category: SubjectCategory::Standard,
            values: values.clone(),
        };
        assert!(is_mark_complete(standard.rubric(), &standard.values));

        let islamic = TrimesterMark {
            category: SubjectCategory::Islamic,
            values,
        };
        assert!(!is_mark_complete(islamic.rubric(), &islamic.values));
    }

    #[test]
    fn test_mixed_assignments() {
        let split = classify_assignments(&[
            ClassAssignment {
                class_name: "Grade 5A".to_string(),
                marks: vec![full_standard_mark()],
            },
            ClassAssignment {
                class_name: "Grade 6B".to_string(),
                marks: vec![],
            },
        ]);
        assert_eq!(split.completed, vec!["Grade 5A"]);
        assert_eq!(split.incomplete, vec!["Grade 6B"]);
    }
}
