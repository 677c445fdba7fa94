use super::SeaOrmStorage;
use crate::entity::prelude::{
    ClassSubjectActiveModel, ClassSubjects, ClassTeacherActiveModel, ClassTeachers, Classes, Marks,
    SubjectTeacherActiveModel, SubjectTeachers, Subjects,
};
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::{class_subjects, class_teachers, marks, subject_teachers};
use crate::errors::{Result, SamsError};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    classes::entities::Class,
    subjects::entities::Subject,
    teachers::{
        entities::{Teacher, TeacherRole},
        requests::{AssignmentPair, CreateTeacherRequest, TeacherQueryParams, UpdateTeacherRequest},
        responses::TeacherWithAssignments,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建教师（password 字段须已哈希）
    pub async fn create_teacher_impl(&self, req: CreateTeacherRequest) -> Result<Teacher> {
        let now = chrono::Utc::now().timestamp();
        let config = crate::config::AppConfig::get();

        let model = ActiveModel {
            name: Set(req.name),
            arabic_name: Set(req.arabic_name),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.unwrap_or(TeacherRole::Teacher).to_string()),
            academic_year: Set(req
                .academic_year
                .unwrap_or_else(|| config.school.default_academic_year.clone())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_teacher())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过邮箱获取教师
    pub async fn get_teacher_by_email_impl(&self, email: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 获取教师及其任教班级与科目
    pub async fn get_teacher_with_assignments_impl(
        &self,
        id: i64,
    ) -> Result<Option<TeacherWithAssignments>> {
        let Some(teacher) = self.get_teacher_by_id_impl(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.attach_assignments(teacher).await?))
    }

    /// 分页列出教师（含任课信息）
    pub async fn list_teachers_with_pagination_impl(
        &self,
        query: TeacherQueryParams,
    ) -> Result<PaginatedResponse<TeacherWithAssignments>> {
        let page = query.pagination.page.max(1) as u64;
        let size = query.pagination.size.clamp(1, 100) as u64;

        let mut select = Teachers::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Email.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_asc(Column::Name);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SamsError::database_operation(format!("查询教师总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SamsError::database_operation(format!("查询教师页数失败: {e}")))?;

        let teachers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询教师列表失败: {e}")))?;

        let mut items = Vec::with_capacity(teachers.len());
        for teacher in teachers {
            items.push(self.attach_assignments(teacher.into_teacher()).await?);
        }

        Ok(PaginatedResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出全部教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let teachers = Teachers::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(teachers.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 更新教师信息（password 字段须已哈希；任课变更走 sync_teacher_assignments）
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        // 先检查教师是否存在
        let existing = self.get_teacher_by_id_impl(id).await?;
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

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }

        if let Some(academic_year) = update.academic_year {
            model.academic_year = Set(academic_year);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("更新教师失败: {e}")))?;

        self.get_teacher_by_id_impl(id).await
    }

    /// 删除教师（连带删除任课关联与其成绩行）
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let class_teacher_rows = ClassTeachers::find()
            .filter(class_teachers::Column::TeacherId.eq(id))
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询任课关联失败: {e}")))?;

        let class_teacher_ids: Vec<i64> = class_teacher_rows.iter().map(|ct| ct.id).collect();
        if !class_teacher_ids.is_empty() {
            Marks::delete_many()
                .filter(marks::Column::ClassTeacherId.is_in(class_teacher_ids))
                .exec(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("删除教师成绩行失败: {e}")))?;
        }

        ClassTeachers::delete_many()
            .filter(class_teachers::Column::TeacherId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除班级任课关联失败: {e}")))?;

        SubjectTeachers::delete_many()
            .filter(subject_teachers::Column::TeacherId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除科目任课关联失败: {e}")))?;

        let result = Teachers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计教师数量
    pub async fn count_teachers_impl(&self) -> Result<u64> {
        let count = Teachers::find()
            .count(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("统计教师数量失败: {e}")))?;

        Ok(count)
    }

    /// 重建教师任课关联
    ///
    /// 新配对补齐三张关联表并生成零分成绩行；被移除的配对删除其成绩行，
    /// 班级/科目关联只有在该教师不再使用时才删除。
    pub async fn sync_teacher_assignments_impl(
        &self,
        teacher_id: i64,
        academic_year: &str,
        assignments: &[AssignmentPair],
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let existing = self.list_teacher_assignments_impl(teacher_id).await?;
        let existing_pairs: Vec<(i64, i64)> =
            existing.iter().map(|(c, s)| (c.id, s.id)).collect();
        let wanted_pairs: Vec<(i64, i64)> = assignments
            .iter()
            .map(|pair| (pair.class_id, pair.subject_id))
            .collect();

        // 移除不再保留的配对
        for (class_id, subject_id) in &existing_pairs {
            if wanted_pairs.contains(&(*class_id, *subject_id)) {
                continue;
            }

            let Some(ct) = ClassTeachers::find()
                .filter(class_teachers::Column::ClassId.eq(*class_id))
                .filter(class_teachers::Column::TeacherId.eq(teacher_id))
                .one(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("查询任课关联失败: {e}")))?
            else {
                continue;
            };

            Marks::delete_many()
                .filter(marks::Column::ClassTeacherId.eq(ct.id))
                .filter(marks::Column::SubjectId.eq(*subject_id))
                .exec(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("删除配对成绩行失败: {e}")))?;

            // 该班级不再保留任何科目时删除班级任课关联
            let class_still_used = wanted_pairs.iter().any(|(c, _)| c == class_id);
            if !class_still_used {
                ClassTeachers::delete_many()
                    .filter(class_teachers::Column::Id.eq(ct.id))
                    .exec(&self.db)
                    .await
                    .map_err(|e| {
                        SamsError::database_operation(format!("删除班级任课关联失败: {e}"))
                    })?;
            }

            // 该科目不再出现在任何配对时删除科目任课关联
            let subject_still_used = wanted_pairs.iter().any(|(_, s)| s == subject_id);
            if !subject_still_used {
                SubjectTeachers::delete_many()
                    .filter(subject_teachers::Column::TeacherId.eq(teacher_id))
                    .filter(subject_teachers::Column::SubjectId.eq(*subject_id))
                    .exec(&self.db)
                    .await
                    .map_err(|e| {
                        SamsError::database_operation(format!("删除科目任课关联失败: {e}"))
                    })?;
            }
        }

        // 补齐新配对
        for (class_id, subject_id) in &wanted_pairs {
            let ct_exists = ClassTeachers::find()
                .filter(class_teachers::Column::ClassId.eq(*class_id))
                .filter(class_teachers::Column::TeacherId.eq(teacher_id))
                .one(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("查询任课关联失败: {e}")))?;
            if ct_exists.is_none() {
                ClassTeacherActiveModel {
                    class_id: Set(*class_id),
                    teacher_id: Set(teacher_id),
                    created_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("创建班级任课关联失败: {e}")))?;
            }

            let cs_exists = ClassSubjects::find()
                .filter(class_subjects::Column::ClassId.eq(*class_id))
                .filter(class_subjects::Column::SubjectId.eq(*subject_id))
                .one(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("查询班级科目关联失败: {e}")))?;
            if cs_exists.is_none() {
                ClassSubjectActiveModel {
                    class_id: Set(*class_id),
                    subject_id: Set(*subject_id),
                    created_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("创建班级科目关联失败: {e}")))?;
            }

            let st_exists = SubjectTeachers::find()
                .filter(subject_teachers::Column::SubjectId.eq(*subject_id))
                .filter(subject_teachers::Column::TeacherId.eq(teacher_id))
                .one(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("查询科目任课关联失败: {e}")))?;
            if st_exists.is_none() {
                SubjectTeacherActiveModel {
                    subject_id: Set(*subject_id),
                    teacher_id: Set(teacher_id),
                    created_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
                .map_err(|e| SamsError::database_operation(format!("创建科目任课关联失败: {e}")))?;
            }

            if !existing_pairs.contains(&(*class_id, *subject_id)) {
                self.create_zero_marks_for_assignment_impl(
                    *class_id,
                    teacher_id,
                    *subject_id,
                    academic_year,
                )
                .await?;
            }
        }

        Ok(())
    }

    /// 列出教师任课配对（班级 + 科目）
    ///
    /// 配对 = 教师任教的班级 × 教师任教的科目，且该科目确实在该班级开设。
    pub async fn list_teacher_assignments_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<(Class, Subject)>> {
        let classes = ClassTeachers::find()
            .filter(class_teachers::Column::TeacherId.eq(teacher_id))
            .find_also_related(Classes)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询任教班级失败: {e}")))?;

        let subjects = SubjectTeachers::find()
            .filter(subject_teachers::Column::TeacherId.eq(teacher_id))
            .find_also_related(Subjects)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询任教科目失败: {e}")))?;

        let classes: Vec<Class> = classes
            .into_iter()
            .filter_map(|(_, class)| class.map(|c| c.into_class()))
            .collect();
        let subjects: Vec<Subject> = subjects
            .into_iter()
            .filter_map(|(_, subject)| subject.map(|s| s.into_subject()))
            .collect();

        if classes.is_empty() || subjects.is_empty() {
            return Ok(Vec::new());
        }

        let class_ids: Vec<i64> = classes.iter().map(|c| c.id).collect();
        let offered = ClassSubjects::find()
            .filter(class_subjects::Column::ClassId.is_in(class_ids))
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级科目关联失败: {e}")))?;

        let mut pairs = Vec::new();
        for class in &classes {
            for subject in &subjects {
                let in_class = offered
                    .iter()
                    .any(|cs| cs.class_id == class.id && cs.subject_id == subject.id);
                if in_class {
                    pairs.push((class.clone(), subject.clone()));
                }
            }
        }

        Ok(pairs)
    }

    /// 为教师实体附加任教班级与科目（去重）
    async fn attach_assignments(&self, teacher: Teacher) -> Result<TeacherWithAssignments> {
        let pairs = self.list_teacher_assignments_impl(teacher.id).await?;

        let mut classes: Vec<Class> = Vec::new();
        let mut subjects: Vec<Subject> = Vec::new();
        for (class, subject) in pairs {
            if !classes.iter().any(|c| c.id == class.id) {
                classes.push(class);
            }
            if !subjects.iter().any(|s| s.id == subject.id) {
                subjects.push(subject);
            }
        }

        Ok(TeacherWithAssignments {
            teacher,
            subjects,
            classes,
        })
    }
}
