use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;
use crate::models::students::entities::ExpensesStatus;

// 学生列表查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    pub search: Option<String>,
}

// 创建学生请求（入学登记）
//
// 创建成功后会为该生在所属班级的每个科目、每条班级任课关联、
// 三个学段各生成一条零分成绩行。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub arabic_name: Option<String>,
    #[ts(type = "string")]
    pub date_of_birth: chrono::NaiveDate,
    pub school: Option<String>,
    pub nationality: Option<String>,
    pub iqama_no: Option<String>,
    pub passport_no: Option<String>,
    pub expenses: Option<ExpensesStatus>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub class_id: i64,
}

// 更新学生请求
//
// class_id 变化视为班级调动，该生的成绩行会改挂到新班级的任课关联上。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub arabic_name: Option<String>,
    #[ts(type = "string")]
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub school: Option<String>,
    pub nationality: Option<String>,
    pub iqama_no: Option<String>,
    pub passport_no: Option<String>,
    pub expenses: Option<ExpensesStatus>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub class_id: Option<i64>,
}
