use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学费缴纳状态
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub enum ExpensesStatus {
    Paid,
    Unpaid,
}

impl<'de> Deserialize<'de> for ExpensesStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "paid" => Ok(ExpensesStatus::Paid),
            "unpaid" => Ok(ExpensesStatus::Unpaid),
            _ => Err(serde::de::Error::custom(format!(
                "无效的缴费状态: '{s}'. 支持的状态: paid, unpaid"
            ))),
        }
    }
}

impl std::fmt::Display for ExpensesStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpensesStatus::Paid => write!(f, "paid"),
            ExpensesStatus::Unpaid => write!(f, "unpaid"),
        }
    }
}

impl std::str::FromStr for ExpensesStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(ExpensesStatus::Paid),
            "unpaid" => Ok(ExpensesStatus::Unpaid),
            _ => Err(format!("Invalid expenses status: {s}")),
        }
    }
}

// 学生实体
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub arabic_name: Option<String>,
    #[ts(type = "string")]
    pub date_of_birth: chrono::NaiveDate,
    pub school: Option<String>,
    pub nationality: Option<String>,
    pub iqama_no: Option<String>,
    pub passport_no: Option<String>,
    pub expenses: ExpensesStatus,
    pub username: Option<String>,
    #[serde(skip_serializing)]
    #[ts(skip)]
    pub password_hash: Option<String>,
    pub class_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
