use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SamsError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    students::{
        entities::{ExpensesStatus, Student},
        requests::{CreateStudentRequest, StudentQueryParams, UpdateStudentRequest},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学生（入学登记，password 字段须已哈希）
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            arabic_name: Set(req.arabic_name),
            date_of_birth: Set(req.date_of_birth),
            school: Set(req.school),
            nationality: Set(req.nationality),
            iqama_no: Set(req.iqama_no),
            passport_no: Set(req.passport_no),
            expenses: Set(req.expenses.unwrap_or(ExpensesStatus::Paid).to_string()),
            username: Set(req.username),
            password_hash: Set(req.password),
            class_id: Set(req.class_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过用户名获取学生
    pub async fn get_student_by_username_impl(&self, username: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentQueryParams,
    ) -> Result<PaginatedResponse<Student>> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Students::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::ArabicName.contains(&escaped))
                    .add(Column::IqamaNo.contains(&escaped)),
            );
        }

        // 班级筛选
        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }

        // 排序
        select = select.order_by_asc(Column::Name);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出班级全部学生（花名册按姓名排序）
    pub async fn list_class_students_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生信息（password 字段须已哈希；班级调动由服务层另行处理成绩行）
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(arabic_name) = update.arabic_name {
            model.arabic_name = Set(Some(arabic_name));
        }

        if let Some(date_of_birth) = update.date_of_birth {
            model.date_of_birth = Set(date_of_birth);
        }

        if let Some(school) = update.school {
            model.school = Set(Some(school));
        }

        if let Some(nationality) = update.nationality {
            model.nationality = Set(Some(nationality));
        }

        if let Some(iqama_no) = update.iqama_no {
            model.iqama_no = Set(Some(iqama_no));
        }

        if let Some(passport_no) = update.passport_no {
            model.passport_no = Set(Some(passport_no));
        }

        if let Some(expenses) = update.expenses {
            model.expenses = Set(expenses.to_string());
        }

        if let Some(username) = update.username {
            model.username = Set(Some(username));
        }

        if let Some(password) = update.password {
            model.password_hash = Set(Some(password));
        }

        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
