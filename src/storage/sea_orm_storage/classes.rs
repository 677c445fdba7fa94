use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::prelude::{ClassSubjects, ClassTeachers, Marks, Students};
use crate::entity::{class_subjects, class_teachers, marks, students};
use crate::errors::{Result, SamsError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    classes::{
        entities::Class,
        requests::{ClassQueryParams, CreateClassRequest, UpdateClassRequest},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 通过名称获取班级
    pub async fn get_class_by_name_impl(&self, name: &str) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 分页列出班级
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassQueryParams,
    ) -> Result<PaginatedResponse<Class>> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Classes::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        // 排序
        select = select.order_by_asc(Column::Name);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级页数失败: {e}")))?;

        let classes = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(PaginatedResponse {
            items: classes.into_iter().map(|m| m.into_class()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        let existing = self.get_class_by_id_impl(class_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(class_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("更新班级失败: {e}")))?;

        self.get_class_by_id_impl(class_id).await
    }

    /// 删除班级，拒绝仍有学生的班级，连带清理任课关联与成绩行
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let student_count = Students::find()
            .filter(students::Column::ClassId.eq(class_id))
            .count(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("统计班级学生失败: {e}")))?;
        if student_count > 0 {
            return Err(SamsError::validation(format!(
                "Class {class_id} still has {student_count} students"
            )));
        }

        let class_teacher_rows = ClassTeachers::find()
            .filter(class_teachers::Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询任课关联失败: {e}")))?;

        let class_teacher_ids: Vec<i64> = class_teacher_rows.iter().map(|ct| ct.id).collect();
        if !class_teacher_ids.is_empty() {
            Marks::delete_many()
                .filter(marks::Column::ClassTeacherId.is_in(class_teacher_ids))
                .exec(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("删除班级成绩行失败: {e}")))?;
        }

        ClassTeachers::delete_many()
            .filter(class_teachers::Column::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除班级任课关联失败: {e}")))?;

        ClassSubjects::delete_many()
            .filter(class_subjects::Column::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除班级科目关联失败: {e}")))?;

        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
