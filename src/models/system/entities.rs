use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 全局设置（单行，固定 id = 1）
//
// target_date 是成绩录入截止日：过期后后端拒绝一切成绩写入。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct GlobalSettings {
    pub id: i64,
    #[ts(type = "string")]
    pub target_date: chrono::NaiveDate,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl GlobalSettings {
    /// 成绩录入是否已截止（按 UTC 日期判断）
    pub fn entry_closed(&self, today: chrono::NaiveDate) -> bool {
        today > self.target_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_closed_boundary() {
        let settings = GlobalSettings {
            id: 1,
            target_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            updated_at: chrono::Utc::now(),
        };
        let on_day = chrono::NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let after = chrono::NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert!(!settings.entry_closed(on_day));
        assert!(settings.entry_closed(after));
    }
}
