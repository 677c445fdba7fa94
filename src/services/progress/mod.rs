//! 进度服务
//!
//! 管理端视图：教师成绩录入进度、班级学生报告进度。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::models::progress::requests::{StudentsProgressQuery, TeachersProgressQuery};
use crate::storage::Storage;

mod students;
mod teachers;

pub struct ProgressService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProgressService {
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

    pub async fn teachers_progress(
        &self,
        request: &HttpRequest,
        query: TeachersProgressQuery,
    ) -> ActixResult<HttpResponse> {
        teachers::teachers_progress(self, request, query).await
    }

    pub async fn students_progress(
        &self,
        request: &HttpRequest,
        query: StudentsProgressQuery,
    ) -> ActixResult<HttpResponse> {
        students::students_progress(self, request, query).await
    }
}
