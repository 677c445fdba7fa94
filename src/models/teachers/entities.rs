use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师角色（管理员同表存放）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub enum TeacherRole {
    Admin,
    Teacher,
}

impl<'de> Deserialize<'de> for TeacherRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "admin" => Ok(TeacherRole::Admin),
            "teacher" => Ok(TeacherRole::Teacher),
            _ => Err(serde::de::Error::custom(format!(
                "无效的教师角色: '{s}'. 支持的角色: admin, teacher"
            ))),
        }
    }
}

impl std::fmt::Display for TeacherRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeacherRole::Admin => write!(f, "admin"),
            TeacherRole::Teacher => write!(f, "teacher"),
        }
    }
}

impl std::str::FromStr for TeacherRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(TeacherRole::Admin),
            "teacher" => Ok(TeacherRole::Teacher),
            _ => Err(format!("Invalid teacher role: {s}")),
        }
    }
}

impl TeacherRole {
    pub fn as_role(&self) -> crate::models::auth::entities::Role {
        use crate::models::auth::entities::Role;
        match self {
            TeacherRole::Admin => Role::Admin,
            TeacherRole::Teacher => Role::Teacher,
        }
    }
}

// 教师实体
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub arabic_name: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    #[ts(skip)]
    pub password_hash: String,
    pub role: TeacherRole,
    pub academic_year: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
