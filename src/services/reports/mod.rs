//! 报告服务
//!
//! 评语报告创建、叙述性完整报告与数值成绩单组装。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::models::marks::entities::Trimester;
use crate::models::reports::requests::CreateReportRequest;
use crate::storage::Storage;

mod create;
mod full;
mod results;

pub struct ReportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReportService {
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

    pub async fn create_report(
        &self,
        request: &HttpRequest,
        report_data: CreateReportRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_report(self, request, report_data).await
    }

    pub async fn full_report(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        full::full_report(self, request, student_id).await
    }

    pub async fn student_results(
        &self,
        request: &HttpRequest,
        student_id: i64,
        trimester: Trimester,
    ) -> ActixResult<HttpResponse> {
        results::student_results(self, request, student_id, trimester).await
    }
}
