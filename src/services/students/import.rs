//! 学生 CSV 批量导入
//!
//! 固定十一列：name, arabicName, dob, school, classId, nationality,
//! iqamaNo, passportNo, expenses, username, password。
//! 列数不符或必填字段为空的行逐行拒绝，不影响其余行。

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::StreamExt;
use std::io::Cursor;
use tracing::{error, info};

use super::StudentService;
use crate::config::AppConfig;
use crate::models::students::entities::ExpensesStatus;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::students::responses::{ImportRowError, ImportStudentsResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;

const EXPECTED_COLUMNS: usize = 11;

// 校验通过的一行
#[derive(Debug, Clone)]
struct ImportRow {
    line: usize,
    name: String,
    arabic_name: Option<String>,
    date_of_birth: chrono::NaiveDate,
    school: Option<String>,
    class_id: i64,
    nationality: Option<String>,
    iqama_no: String,
    passport_no: String,
    expenses: ExpensesStatus,
    username: Option<String>,
    password: Option<String>,
}

pub async fn import_students(
    service: &StudentService,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 读取上传文件
    let file_bytes = match read_file_from_multipart(&mut payload).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ImportFileParseFailed,
                format!("Failed to read uploaded file: {e}"),
            )));
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(&file_bytes));

    let mut failed: Vec<ImportRowError> = Vec::new();
    let mut rows: Vec<ImportRow> = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let line = index + 1; // 1 起始的数据行号，不含表头
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                failed.push(ImportRowError {
                    line,
                    reason: format!("Malformed CSV row: {e}"),
                });
                continue;
            }
        };

        match parse_row(line, &record) {
            Ok(row) => rows.push(row),
            Err(reason) => failed.push(ImportRowError { line, reason }),
        }
    }

    if rows.is_empty() && failed.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileDataInvalid,
            "File contains no data rows",
        )));
    }

    let academic_year = AppConfig::get().school.default_academic_year.clone();
    let mut imported = 0;

    for row in rows {
        // 班级必须存在
        match storage.get_class_by_id(row.class_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                failed.push(ImportRowError {
                    line: row.line,
                    reason: format!("Class {} does not exist", row.class_id),
                });
                continue;
            }
            Err(e) => {
                failed.push(ImportRowError {
                    line: row.line,
                    reason: format!("Failed to verify class: {e}"),
                });
                continue;
            }
        }

        let password_hash = match row.password {
            Some(ref password) => match hash_password(password) {
                Ok(hash) => Some(hash),
                Err(e) => {
                    failed.push(ImportRowError {
                        line: row.line,
                        reason: format!("Failed to hash password: {e}"),
                    });
                    continue;
                }
            },
            None => None,
        };

        let create_req = CreateStudentRequest {
            name: row.name,
            arabic_name: row.arabic_name,
            date_of_birth: row.date_of_birth,
            school: row.school,
            nationality: row.nationality,
            iqama_no: Some(row.iqama_no),
            passport_no: Some(row.passport_no),
            expenses: Some(row.expenses),
            username: row.username,
            password: password_hash,
            class_id: row.class_id,
        };

        match storage.create_student(create_req).await {
            Ok(student) => {
                imported += 1;
                if let Err(e) = storage
                    .create_zero_marks_for_student(student.id, row.class_id, &academic_year)
                    .await
                {
                    error!(
                        "Imported student {} but mark fan-out failed: {}",
                        student.id, e
                    );
                }
            }
            Err(e) => {
                failed.push(ImportRowError {
                    line: row.line,
                    reason: format!("Failed to create student: {e}"),
                });
            }
        }
    }

    info!(
        "Student import finished: {} imported, {} rejected",
        imported,
        failed.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ImportStudentsResponse { imported, failed },
        "Import finished",
    )))
}

async fn read_file_from_multipart(payload: &mut Multipart) -> Result<Vec<u8>, String> {
    let mut file_bytes = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| format!("Failed to read field: {e}"))?;

        if field.name().map(|n| n == "file").unwrap_or(false) {
            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| format!("Failed to read chunk: {e}"))?;
                file_bytes.extend_from_slice(&data);
            }
        }
    }

    if file_bytes.is_empty() {
        return Err("No file field found".to_string());
    }

    Ok(file_bytes)
}

fn parse_row(line: usize, record: &csv::StringRecord) -> Result<ImportRow, String> {
    if record.len() != EXPECTED_COLUMNS {
        return Err(format!(
            "Expected {EXPECTED_COLUMNS} columns, got {}",
            record.len()
        ));
    }

    let cell = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
    let optional = |idx: usize| Some(cell(idx)).filter(|s| !s.is_empty());

    let name = cell(0);
    if name.is_empty() {
        return Err("Column 'name' must not be empty".to_string());
    }

    let dob_raw = cell(2);
    if dob_raw.is_empty() {
        return Err("Column 'dob' must not be empty".to_string());
    }
    let date_of_birth = dob_raw
        .parse::<chrono::NaiveDate>()
        .map_err(|_| format!("Invalid date of birth: '{dob_raw}'"))?;

    let class_raw = cell(4);
    if class_raw.is_empty() {
        return Err("Column 'classId' must not be empty".to_string());
    }
    let class_id = class_raw
        .parse::<i64>()
        .map_err(|_| format!("Invalid class id: '{class_raw}'"))?;

    let iqama_no = cell(6);
    if iqama_no.is_empty() {
        return Err("Column 'iqamaNo' must not be empty".to_string());
    }

    let passport_no = cell(7);
    if passport_no.is_empty() {
        return Err("Column 'passportNo' must not be empty".to_string());
    }

    let expenses = match cell(8).to_lowercase().as_str() {
        "" | "paid" => ExpensesStatus::Paid,
        "unpaid" => ExpensesStatus::Unpaid,
        other => return Err(format!("Invalid expenses status: '{other}'")),
    };

    Ok(ImportRow {
        line,
        name,
        arabic_name: optional(1),
        date_of_birth,
        school: optional(3),
        class_id,
        nationality: optional(5),
        iqama_no,
        passport_no,
        expenses,
        username: optional(9),
        password: optional(10),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str]) -> csv::StringRecord {
        csv::StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_parse_row_accepts_full_row() {
        let row = parse_row(
            1,
            &record(&[
                "Ahmed Ali",
                "أحمد علي",
                "2015-09-01",
                "Previous School",
                "3",
                "Saudi",
                "1234567890",
                "P998877",
                "paid",
                "ahmed.ali",
                "Secret123",
            ]),
        )
        .unwrap();

        assert_eq!(row.name, "Ahmed Ali");
        assert_eq!(row.class_id, 3);
        assert_eq!(row.expenses, ExpensesStatus::Paid);
        assert_eq!(row.username.as_deref(), Some("ahmed.ali"));
    }

    #[test]
    fn test_parse_row_rejects_wrong_column_count() {
        let err = parse_row(1, &record(&["Ahmed", "2015-09-01", "3"])).unwrap_err();
        assert!(err.contains("Expected 11 columns"));
    }

    #[test]
    fn test_parse_row_rejects_empty_required_fields() {
        for (idx, column) in [(0, "name"), (2, "dob"), (4, "classId"), (6, "iqamaNo"), (7, "passportNo")]
        {
            let mut fields = vec![
                "Ahmed Ali",
                "",
                "2015-09-01",
                "",
                "3",
                "",
                "1234567890",
                "P998877",
                "paid",
                "",
                "",
            ];
            fields[idx] = "";
            let err = parse_row(1, &record(&fields)).unwrap_err();
            assert!(err.contains(column), "expected error about {column}: {err}");
        }
    }

    #[test]
    fn test_parse_row_defaults_empty_expenses_to_paid() {
        let row = parse_row(
            1,
            &record(&[
                "Ahmed Ali",
                "",
                "2015-09-01",
                "",
                "3",
                "",
                "1234567890",
                "P998877",
                "",
                "",
                "",
            ]),
        )
        .unwrap();
        assert_eq!(row.expenses, ExpensesStatus::Paid);
        assert!(row.username.is_none());
        assert!(row.password.is_none());
    }
}
