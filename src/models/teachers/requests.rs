use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;
use crate::models::teachers::entities::TeacherRole;

// 教师列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 任课分配：一个班级配一个科目
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct AssignmentPair {
    pub class_id: i64,
    pub subject_id: i64,
}

// 创建教师请求
//
// assignments 中的每一对都会补齐三张关联表，并为对应班级的
// 现有学生批量生成三个学段的零分成绩行。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub name: String,
    pub arabic_name: Option<String>,
    pub email: String,
    pub password: String,
    pub role: Option<TeacherRole>,
    pub academic_year: Option<String>,
    #[serde(default)]
    pub assignments: Vec<AssignmentPair>,
}

// 更新教师请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct UpdateTeacherRequest {
    pub name: Option<String>,
    pub arabic_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub academic_year: Option<String>,
    pub assignments: Option<Vec<AssignmentPair>>,
}
