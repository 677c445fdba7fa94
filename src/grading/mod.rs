//! 成绩核心模块
//!
//! 纯计算逻辑，不做任何 I/O：
//! - `rubric`: 评分细则注册表（科目类别 -> 评分项与满分）
//! - `aggregate`: 总分与等级汇总
//! - `completion`: 教师成绩录入进度分类
//! - `assemble`: 学生成绩单组装（按细则签名分组）

pub mod aggregate;
pub mod assemble;
pub mod completion;
pub mod rubric;

pub use aggregate::{ScoreSummary, aggregate, grade_for};
pub use assemble::{AssembledReport, ReportGroup, assemble, partition_arabic_last};
pub use completion::{ClassAssignment, ClassSplit, TrimesterMark, classify_assignments};
pub use rubric::{Component, ComponentMap, Rubric, SubjectCategory, validate_rubrics};
