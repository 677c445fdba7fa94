use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 登录主体角色
//
// 管理员与教师存放在 teachers 表（role 列区分），学生存放在 students 表。
// JWT claims 中的角色字符串决定中间件去哪张表水合用户。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    pub const ADMIN: &'static str = "admin";
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";

    pub fn admin_roles() -> &'static [&'static Role] {
        &[&Self::Admin]
    }
    pub fn teacher_roles() -> &'static [&'static Role] {
        &[&Self::Teacher, &Self::Admin]
    }
    pub fn all_roles() -> &'static [&'static Role] {
        &[&Self::Admin, &Self::Teacher, &Self::Student]
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            Role::ADMIN => Ok(Role::Admin),
            Role::TEACHER => Ok(Role::Teacher),
            Role::STUDENT => Ok(Role::Student),
            _ => Err(serde::de::Error::custom(format!(
                "无效的角色: '{s}'. 支持的角色: admin, teacher, student"
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", Role::ADMIN),
            Role::Teacher => write!(f, "{}", Role::TEACHER),
            Role::Student => write!(f, "{}", Role::STUDENT),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

// 已认证的登录主体，由 JWT 中间件水合后注入请求扩展
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
    pub role: Role,
    // 教师/管理员填 email，学生填 username
    pub identifier: String,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [Role::Admin, Role::Teacher, Role::Student] {
            assert_eq!(role.to_string().parse::<Role>(), Ok(role));
        }
        assert!("principal".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_sets() {
        assert!(Role::teacher_roles().contains(&&Role::Admin));
        assert!(Role::teacher_roles().contains(&&Role::Teacher));
        assert!(!Role::teacher_roles().contains(&&Role::Student));
        assert_eq!(Role::admin_roles(), &[&Role::Admin]);
    }
}
