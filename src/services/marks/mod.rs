//! 成绩服务
//!
//! 花名册查询、单条更新与批量保存。所有写操作受全局截止日管控。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::models::marks::requests::{MarkQueryParams, SaveMarksRequest, UpdateMarkRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

mod list;
mod save;
mod update;

pub struct MarkService {
    storage: Option<Arc<dyn Storage>>,
}

impl MarkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 截止日已过则返回拒绝响应，否则 None
    async fn entry_closed_response(
        &self,
        storage: &Arc<dyn Storage>,
    ) -> Option<ActixResult<HttpResponse>> {
        match storage.get_settings().await {
            Ok(Some(settings)) => {
                let today = chrono::Utc::now().date_naive();
                if settings.entry_closed(today) {
                    return Some(Ok(HttpResponse::Forbidden().json(
                        ApiResponse::error_empty(
                            ErrorCode::MarkEntryClosed,
                            format!(
                                "Mark entry closed since {}",
                                settings.target_date
                            ),
                        ),
                    )));
                }
                None
            }
            // 未配置截止日时不限制录入
            Ok(None) => None,
            Err(e) => {
                tracing::error!("Failed to load global settings: {}", e);
                Some(Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to check entry deadline",
                    ),
                )))
            }
        }
    }

    pub async fn list_marks(
        &self,
        request: &HttpRequest,
        query: MarkQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_marks(self, request, query).await
    }

    pub async fn update_mark(
        &self,
        request: &HttpRequest,
        mark_id: i64,
        values: UpdateMarkRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_mark(self, request, mark_id, values).await
    }

    pub async fn save_marks(
        &self,
        request: &HttpRequest,
        save_data: SaveMarksRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_marks(self, request, save_data).await
    }
}
