use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{
        entities::{CurrentUser, Role},
        requests::LoginRequest,
        responses::LoginResponse,
    },
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

use super::AuthService;

// 登录主体解析结果
struct Principal {
    user: CurrentUser,
    password_hash: String,
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 教师/管理员用邮箱登录，学生用用户名登录
    let principal = match storage.get_teacher_by_email(&login_request.username).await {
        Ok(Some(teacher)) => Some(Principal {
            user: CurrentUser {
                id: teacher.id,
                name: teacher.name.clone(),
                role: teacher.role.as_role(),
                identifier: teacher.email.clone(),
            },
            password_hash: teacher.password_hash,
        }),
        Ok(None) => match storage
            .get_student_by_username(&login_request.username)
            .await
        {
            Ok(Some(student)) => student.password_hash.clone().map(|hash| Principal {
                user: CurrentUser {
                    id: student.id,
                    name: student.name.clone(),
                    role: Role::Student,
                    identifier: student.username.clone().unwrap_or_default(),
                },
                password_hash: hash,
            }),
            Ok(None) => None,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Login failed: {e}"),
                    )),
                );
            }
        },
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    let Some(principal) = principal else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Username or password is incorrect",
        )));
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &principal.password_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Username or password is incorrect",
        )));
    }

    // 3. 生成令牌对
    let refresh_expiry = login_request
        .remember_me
        .then(|| chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry));
    match JwtUtils::generate_token_pair(
        principal.user.id,
        &principal.user.role.to_string(),
        refresh_expiry,
    ) {
        Ok(token_pair) => {
            tracing::info!(
                "{} {} logged in successfully",
                principal.user.role,
                principal.user.identifier
            );

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                user: principal.user,
                created_at: chrono::Utc::now(),
            };

            // 4. refresh token 走 HttpOnly cookie
            let refresh_cookie = JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
