//! 路径参数安全提取器
//!
//! 直接用 web::Path<i64> 时解析失败会返回 actix 默认错误页，
//! 这里统一换成 ApiResponse 格式的 400 响应。

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

fn invalid_id_error(param: &str) -> Error {
    InternalError::from_response(
        format!("invalid path parameter: {param}"),
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Path parameter '{param}' must be a positive integer"),
        )),
    )
    .into()
}

macro_rules! safe_i64_path_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(invalid_id_error($param)),
                })
            }
        }
    };
}

safe_i64_path_extractor!(SafeStudentIdI64, "student_id");
safe_i64_path_extractor!(SafeTeacherIdI64, "teacher_id");
safe_i64_path_extractor!(SafeClassIdI64, "class_id");
safe_i64_path_extractor!(SafeMarkIdI64, "mark_id");
