use std::sync::Arc;

use crate::models::{
    PaginatedResponse,
    classes::{
        entities::Class,
        requests::{ClassQueryParams, CreateClassRequest, UpdateClassRequest},
    },
    marks::{
        entities::{Mark, Trimester},
        requests::{MarkQueryParams, UpdateMarkRequest},
        responses::MarkWithStudent,
    },
    reports::{entities::StudentReport, requests::CreateReportRequest, responses::FullReportEntry},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentQueryParams, UpdateStudentRequest},
    },
    subjects::{entities::Subject, requests::CreateSubjectRequest},
    system::entities::GlobalSettings,
    teachers::{
        entities::Teacher,
        requests::{AssignmentPair, CreateTeacherRequest, TeacherQueryParams, UpdateTeacherRequest},
        responses::TeacherWithAssignments,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生（password 字段须已哈希）
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过用户名获取学生信息
    async fn get_student_by_username(&self, username: &str) -> Result<Option<Student>>;
    // 分页列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentQueryParams,
    ) -> Result<PaginatedResponse<Student>>;
    // 列出班级全部学生（花名册，不分页）
    async fn list_class_students(&self, class_id: i64) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    // 创建教师（password 字段须已哈希）
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过邮箱获取教师信息
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;
    // 获取教师及其任教班级与科目
    async fn get_teacher_with_assignments(
        &self,
        id: i64,
    ) -> Result<Option<TeacherWithAssignments>>;
    // 分页列出教师（含任课信息）
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherQueryParams,
    ) -> Result<PaginatedResponse<TeacherWithAssignments>>;
    // 列出全部教师（进度总览用，不分页）
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    // 更新教师信息
    async fn update_teacher(&self, id: i64, update: UpdateTeacherRequest)
    -> Result<Option<Teacher>>;
    // 删除教师
    async fn delete_teacher(&self, id: i64) -> Result<bool>;
    // 统计教师数量（空库初始化判断）
    async fn count_teachers(&self) -> Result<u64>;
    // 重建教师任课关联并为新配对补齐零分成绩行
    async fn sync_teacher_assignments(
        &self,
        teacher_id: i64,
        academic_year: &str,
        assignments: &[AssignmentPair],
    ) -> Result<()>;
    // 列出教师任课配对（班级 + 科目）
    async fn list_teacher_assignments(&self, teacher_id: i64) -> Result<Vec<(Class, Subject)>>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过名称获取班级信息
    async fn get_class_by_name(&self, name: &str) -> Result<Option<Class>>;
    // 分页列出班级
    async fn list_classes_with_pagination(
        &self,
        query: ClassQueryParams,
    ) -> Result<PaginatedResponse<Class>>;
    // 更新班级信息
    async fn update_class(&self, class_id: i64, update: UpdateClassRequest)
    -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取科目信息
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    // 通过名称获取科目信息
    async fn get_subject_by_name(&self, name: &str) -> Result<Option<Subject>>;
    // 列出全部科目
    async fn list_subjects(&self) -> Result<Vec<Subject>>;

    /// 成绩管理方法
    // 列出某 (班级, 科目, 教师, 学段) 花名册的成绩行（含学生姓名）
    async fn list_roster_marks(&self, query: &MarkQueryParams) -> Result<Vec<MarkWithStudent>>;
    // 通过ID获取成绩行
    async fn get_mark_by_id(&self, mark_id: i64) -> Result<Option<Mark>>;
    // 整行覆盖更新成绩（total_marks 由调用方按细则求和）
    async fn update_mark(
        &self,
        mark_id: i64,
        values: &UpdateMarkRequest,
        total_marks: i32,
    ) -> Result<Option<Mark>>;
    // 为新入学学生按班级任课关联生成三个学段的零分成绩行
    async fn create_zero_marks_for_student(
        &self,
        student_id: i64,
        class_id: i64,
        academic_year: &str,
    ) -> Result<u64>;
    // 为新任课配对按班级现有学生生成三个学段的零分成绩行
    async fn create_zero_marks_for_assignment(
        &self,
        class_id: i64,
        teacher_id: i64,
        subject_id: i64,
        academic_year: &str,
    ) -> Result<u64>;
    // 班级调动：成绩行改挂新班级任课关联，无对应关联的删除并补齐零分行
    async fn transfer_student_marks(
        &self,
        student_id: i64,
        new_class_id: i64,
        academic_year: &str,
    ) -> Result<()>;
    // 列出学生某学段的全部成绩（附科目，成绩单组装用）
    async fn list_student_marks(
        &self,
        student_id: i64,
        trimester: Trimester,
    ) -> Result<Vec<(Mark, Subject)>>;
    // 列出某任课配对某学段的全部成绩行（进度判定用）
    async fn list_assignment_marks(
        &self,
        class_id: i64,
        teacher_id: i64,
        subject_id: i64,
        trimester: Trimester,
    ) -> Result<Vec<Mark>>;

    /// 评语报告管理方法
    // 创建评语报告，(学生, 科目, 教师, 学段) 重复时返回 DuplicateRecord
    async fn create_report(
        &self,
        teacher_id: i64,
        academic_year: &str,
        report: CreateReportRequest,
    ) -> Result<StudentReport>;
    // 某 (学生, 科目, 教师, 学段) 是否已有报告
    async fn report_exists(
        &self,
        student_id: i64,
        subject_id: i64,
        teacher_id: i64,
        trimester: Trimester,
    ) -> Result<bool>;
    // 列出学生全部评语报告（附科目与教师展示名）
    async fn list_student_report_entries(&self, student_id: i64) -> Result<Vec<FullReportEntry>>;

    /// 全局设置方法
    // 获取全局设置（单行）
    async fn get_settings(&self) -> Result<Option<GlobalSettings>>;
    // 写入成绩录入截止日（不存在则插入）
    async fn upsert_settings(&self, target_date: chrono::NaiveDate) -> Result<GlobalSettings>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
