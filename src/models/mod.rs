//! 业务模型定义
//!
//! 按领域拆分为 entities / requests / responses 三类，
//! 与 entity 模块中的数据库实体分离。

pub mod auth;
pub mod classes;
pub mod common;
pub mod marks;
pub mod progress;
pub mod reports;
pub mod students;
pub mod subjects;
pub mod system;
pub mod teachers;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 程序启动时间，注入 app_data 供运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 业务错误码，随 ApiResponse 返回给前端
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 4000,
    Unauthorized = 4010,
    Forbidden = 4030,
    NotFound = 4040,
    InternalServerError = 5000,

    // 认证
    AuthFailed = 1001,

    // 学生
    StudentNotFound = 2001,
    StudentCreationFailed = 2002,
    StudentUpdateFailed = 2003,
    StudentDeleteFailed = 2004,
    StudentUsernameAlreadyExists = 2005,
    ImportFileParseFailed = 2006,
    ImportFileDataInvalid = 2007,

    // 教师
    TeacherNotFound = 2101,
    TeacherAlreadyExists = 2102,
    TeacherCreationFailed = 2103,
    TeacherUpdateFailed = 2104,
    TeacherDeleteFailed = 2105,

    // 班级
    ClassNotFound = 2201,
    ClassAlreadyExists = 2202,
    ClassCreationFailed = 2203,
    ClassDeleteFailed = 2204,
    ClassUpdateFailed = 2205,

    // 科目
    SubjectNotFound = 2301,
    SubjectAlreadyExists = 2302,
    SubjectCreationFailed = 2303,

    // 成绩
    MarkNotFound = 2401,
    MarkValidationFailed = 2402,
    MarkSaveFailed = 2403,
    MarkEntryClosed = 2404,

    // 报告
    ReportNotFound = 2501,
    ReportAlreadyExists = 2502,
    ReportCreationFailed = 2503,

    // 系统设置
    SettingsUpdateFailed = 2601,
}
