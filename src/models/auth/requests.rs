use serde::Deserialize;
use ts_rs::TS;

// 登录请求：教师/管理员填邮箱，学生填用户名
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}
