//! 评分细则注册表
//!
//! 每个科目类别对应一组固定的评分项及其满分。类别在边界处由科目名称解析一次，
//! 之后全部走显式的注册表查询，不在各调用点散落字符串比较。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{Result, SamsError};

// 评分项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum Component {
    Participation,
    Behavior,
    Reading,
    Memorizing,
    OralTest,
    WorkingQuiz,
    Project,
    ClassActivities,
    FinalExam,
}

impl Component {
    /// 数据库列名 / 分组签名使用的键
    pub fn key(&self) -> &'static str {
        match self {
            Component::Participation => "participation",
            Component::Behavior => "behavior",
            Component::Reading => "reading",
            Component::Memorizing => "memorizing",
            Component::OralTest => "oral_test",
            Component::WorkingQuiz => "working_quiz",
            Component::Project => "project",
            Component::ClassActivities => "class_activities",
            Component::FinalExam => "final_exam",
        }
    }

    /// 成绩单表头显示名
    pub fn display_label(&self) -> &'static str {
        match self {
            Component::Participation => "Participation",
            Component::Behavior => "Homework",
            Component::Reading => "Reading",
            Component::Memorizing => "Memorizing",
            Component::OralTest => "Oral Test",
            Component::WorkingQuiz => "Quiz",
            Component::Project => "Project",
            Component::ClassActivities => "Class Activities",
            Component::FinalExam => "Exam",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// 评分项 -> 分值
pub type ComponentMap = HashMap<Component, f64>;

// 科目类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/grading.ts")]
pub enum SubjectCategory {
    Arabic,   // Arabic / Social Arabic
    Islamic,  // Islamic
    Standard, // 其余科目
}

impl SubjectCategory {
    /// 由科目名称解析类别（仅在边界处调用一次）
    pub fn from_subject_name(name: &str) -> Self {
        match name {
            "Arabic" | "Social Arabic" => SubjectCategory::Arabic,
            "Islamic" => SubjectCategory::Islamic,
            _ => SubjectCategory::Standard,
        }
    }

    pub fn rubric(&self) -> &'static Rubric {
        match self {
            SubjectCategory::Arabic => &ARABIC_RUBRIC,
            SubjectCategory::Islamic => &ISLAMIC_RUBRIC,
            SubjectCategory::Standard => &STANDARD_RUBRIC,
        }
    }
}

/// 完整成绩单视图中排在末尾的阿拉伯语族科目
pub fn is_arabic_family(subject_name: &str) -> bool {
    matches!(subject_name, "Arabic" | "Social Arabic" | "Islamic")
}

/// 评分细则：有序的评分项及各自满分
#[derive(Debug, Clone, PartialEq)]
pub struct Rubric {
    pub category: SubjectCategory,
    pub components: &'static [(Component, f64)],
}

/// 所有细则的满分总和固定为 100，startup 时校验
pub const RUBRIC_CEILING: f64 = 100.0;

static ARABIC_RUBRIC: Rubric = Rubric {
    category: SubjectCategory::Arabic,
    components: &[
        (Component::Participation, 10.0),
        (Component::Behavior, 5.0),
        (Component::Project, 10.0),
        (Component::ClassActivities, 15.0),
        (Component::WorkingQuiz, 20.0),
        (Component::FinalExam, 40.0),
    ],
};

static ISLAMIC_RUBRIC: Rubric = Rubric {
    category: SubjectCategory::Islamic,
    components: &[
        (Component::Participation, 10.0),
        (Component::Behavior, 10.0),
        (Component::Reading, 10.0),
        (Component::Memorizing, 10.0),
        (Component::OralTest, 5.0),
        (Component::WorkingQuiz, 15.0),
        (Component::FinalExam, 40.0),
    ],
};

static STANDARD_RUBRIC: Rubric = Rubric {
    category: SubjectCategory::Standard,
    components: &[
        (Component::Participation, 15.0),
        (Component::Behavior, 15.0),
        (Component::WorkingQuiz, 15.0),
        (Component::FinalExam, 35.0),
        (Component::Project, 20.0),
    ],
};

static ALL_RUBRICS: [&Rubric; 3] = [&ARABIC_RUBRIC, &ISLAMIC_RUBRIC, &STANDARD_RUBRIC];

impl Rubric {
    /// 有序评分项
    pub fn components(&self) -> impl Iterator<Item = Component> + '_ {
        self.components.iter().map(|(c, _)| *c)
    }

    /// 某评分项的满分，不属于本细则时返回 None
    pub fn max_of(&self, component: Component) -> Option<f64> {
        self.components
            .iter()
            .find(|(c, _)| *c == component)
            .map(|(_, max)| *max)
    }

    pub fn contains(&self, component: Component) -> bool {
        self.max_of(component).is_some()
    }

    /// 满分总和
    pub fn ceiling(&self) -> f64 {
        self.components.iter().map(|(_, max)| max).sum()
    }

    /// 分组签名：有序评分项键的拼接。细则形状相同的科目会被分到同一张成绩表。
    pub fn signature(&self) -> String {
        self.components()
            .map(|c| c.key())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// 校验编辑边界提交的分值：必须属于本细则且落在 [0, max] 区间
    pub fn validate_values(&self, values: &ComponentMap) -> Result<()> {
        for (component, value) in values {
            let Some(max) = self.max_of(*component) else {
                // 细则外的评分项只有在非零时才算错误提交
                if *value != 0.0 {
                    return Err(SamsError::validation(format!(
                        "Component '{component}' is not part of this rubric"
                    )));
                }
                continue;
            };
            if *value < 0.0 || *value > max {
                return Err(SamsError::validation(format!(
                    "Component '{component}' must be between 0 and {max}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// 启动时校验注册表：每个细则满分总和为 100、评分项不重复、签名互不相同
pub fn validate_rubrics() -> Result<()> {
    let mut signatures = Vec::new();

    for rubric in ALL_RUBRICS {
        let ceiling = rubric.ceiling();
        if (ceiling - RUBRIC_CEILING).abs() > f64::EPSILON {
            return Err(SamsError::rubric_config(format!(
                "Rubric {:?} maxima sum to {ceiling}, expected {RUBRIC_CEILING}",
                rubric.category
            )));
        }

        let mut seen = Vec::new();
        for component in rubric.components() {
            if seen.contains(&component) {
                return Err(SamsError::rubric_config(format!(
                    "Rubric {:?} lists component '{component}' twice",
                    rubric.category
                )));
            }
            seen.push(component);
        }

        let signature = rubric.signature();
        if signatures.contains(&signature) {
            return Err(SamsError::rubric_config(format!(
                "Duplicate rubric signature: {signature}"
            )));
        }
        signatures.push(signature);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_valid() {
        assert!(validate_rubrics().is_ok());
    }

    #[test]
    fn test_every_rubric_sums_to_ceiling() {
        for category in [
            SubjectCategory::Arabic,
            SubjectCategory::Islamic,
            SubjectCategory::Standard,
        ] {
            assert_eq!(category.rubric().ceiling(), RUBRIC_CEILING);
        }
    }

    #[test]
    fn test_category_resolution() {
        assert_eq!(
            SubjectCategory::from_subject_name("Arabic"),
            SubjectCategory::Arabic
        );
        assert_eq!(
            SubjectCategory::from_subject_name("Social Arabic"),
            SubjectCategory::Arabic
        );
        assert_eq!(
            SubjectCategory::from_subject_name("Islamic"),
            SubjectCategory::Islamic
        );
        assert_eq!(
            SubjectCategory::from_subject_name("Math"),
            SubjectCategory::Standard
        );
        assert_eq!(
            SubjectCategory::from_subject_name("Science"),
            SubjectCategory::Standard
        );
    }

    #[test]
    fn test_arabic_family() {
        assert!(is_arabic_family("Arabic"));
        assert!(is_arabic_family("Social Arabic"));
        assert!(is_arabic_family("Islamic"));
        assert!(!is_arabic_family("Math"));
    }

    #[test]
    fn test_signatures_are_distinct() {
        let arabic = SubjectCategory::Arabic.rubric().signature();
        let islamic = SubjectCategory::Islamic.rubric().signature();
        let standard = SubjectCategory::Standard.rubric().signature();
        assert_ne!(arabic, islamic);
        assert_ne!(arabic, standard);
        assert_ne!(islamic, standard);
    }

    #[test]
    fn test_validate_values_bounds() {
        let rubric = SubjectCategory::Standard.rubric();

        let mut values = ComponentMap::new();
        values.insert(Component::Participation, 15.0);
        values.insert(Component::FinalExam, 35.0);
        assert!(rubric.validate_values(&values).is_ok());

        values.insert(Component::FinalExam, 35.5);
        assert!(rubric.validate_values(&values).is_err());

        values.insert(Component::FinalExam, -1.0);
        assert!(rubric.validate_values(&values).is_err());
    }

    #[test]
    fn test_validate_values_rejects_foreign_component() {
        let rubric = SubjectCategory::Standard.rubric();

        let mut values = ComponentMap::new();
        values.insert(Component::Memorizing, 5.0);
        assert!(rubric.validate_values(&values).is_err());

        // 零值的细则外评分项视为未填写，不报错
        values.insert(Component::Memorizing, 0.0);
        assert!(rubric.validate_values(&values).is_ok());
    }
}
