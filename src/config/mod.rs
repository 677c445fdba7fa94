//! 应用配置
//!
//! config 文件 + SAMS_ 前缀环境变量分层加载，全局 OnceLock 单例。

mod r#impl;
mod structs;

pub use structs::*;
