//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classes;
mod marks;
mod reports;
mod settings;
mod students;
mod subjects;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{Result, SamsError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SamsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SamsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SamsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SamsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SamsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_username(&self, username: &str) -> Result<Option<Student>> {
        self.get_student_by_username_impl(username).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentQueryParams,
    ) -> Result<PaginatedResponse<Student>> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn list_class_students(&self, class_id: i64) -> Result<Vec<Student>> {
        self.list_class_students_impl(class_id).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_email_impl(email).await
    }

    async fn get_teacher_with_assignments(
        &self,
        id: i64,
    ) -> Result<Option<TeacherWithAssignments>> {
        self.get_teacher_with_assignments_impl(id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherQueryParams,
    ) -> Result<PaginatedResponse<TeacherWithAssignments>> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    async fn count_teachers(&self) -> Result<u64> {
        self.count_teachers_impl().await
    }

    async fn sync_teacher_assignments(
        &self,
        teacher_id: i64,
        academic_year: &str,
        assignments: &[AssignmentPair],
    ) -> Result<()> {
        self.sync_teacher_assignments_impl(teacher_id, academic_year, assignments)
            .await
    }

    async fn list_teacher_assignments(&self, teacher_id: i64) -> Result<Vec<(Class, Subject)>> {
        self.list_teacher_assignments_impl(teacher_id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_class_by_name(&self, name: &str) -> Result<Option<Class>> {
        self.get_class_by_name_impl(name).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassQueryParams,
    ) -> Result<PaginatedResponse<Class>> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(subject_id).await
    }

    async fn get_subject_by_name(&self, name: &str) -> Result<Option<Subject>> {
        self.get_subject_by_name_impl(name).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    // 成绩模块
    async fn list_roster_marks(&self, query: &MarkQueryParams) -> Result<Vec<MarkWithStudent>> {
        self.list_roster_marks_impl(query).await
    }

    async fn get_mark_by_id(&self, mark_id: i64) -> Result<Option<Mark>> {
        self.get_mark_by_id_impl(mark_id).await
    }

    async fn update_mark(
        &self,
        mark_id: i64,
        values: &UpdateMarkRequest,
        total_marks: i32,
    ) -> Result<Option<Mark>> {
        self.update_mark_impl(mark_id, values, total_marks).await
    }

    async fn create_zero_marks_for_student(
        &self,
        student_id: i64,
        class_id: i64,
        academic_year: &str,
    ) -> Result<u64> {
        self.create_zero_marks_for_student_impl(student_id, class_id, academic_year)
            .await
    }

    async fn create_zero_marks_for_assignment(
        &self,
        class_id: i64,
        teacher_id: i64,
        subject_id: i64,
        academic_year: &str,
    ) -> Result<u64> {
        self.create_zero_marks_for_assignment_impl(class_id, teacher_id, subject_id, academic_year)
            .await
    }

    async fn transfer_student_marks(
        &self,
        student_id: i64,
        new_class_id: i64,
        academic_year: &str,
    ) -> Result<()> {
        self.transfer_student_marks_impl(student_id, new_class_id, academic_year)
            .await
    }

    async fn list_student_marks(
        &self,
        student_id: i64,
        trimester: Trimester,
    ) -> Result<Vec<(Mark, Subject)>> {
        self.list_student_marks_impl(student_id, trimester).await
    }

    async fn list_assignment_marks(
        &self,
        class_id: i64,
        teacher_id: i64,
        subject_id: i64,
        trimester: Trimester,
    ) -> Result<Vec<Mark>> {
        self.list_assignment_marks_impl(class_id, teacher_id, subject_id, trimester)
            .await
    }

    // 评语报告模块
    async fn create_report(
        &self,
        teacher_id: i64,
        academic_year: &str,
        report: CreateReportRequest,
    ) -> Result<StudentReport> {
        self.create_report_impl(teacher_id, academic_year, report)
            .await
    }

    async fn report_exists(
        &self,
        student_id: i64,
        subject_id: i64,
        teacher_id: i64,
        trimester: Trimester,
    ) -> Result<bool> {
        self.report_exists_impl(student_id, subject_id, teacher_id, trimester)
            .await
    }

    async fn list_student_report_entries(&self, student_id: i64) -> Result<Vec<FullReportEntry>> {
        self.list_student_report_entries_impl(student_id).await
    }

    // 全局设置模块
    async fn get_settings(&self) -> Result<Option<GlobalSettings>> {
        self.get_settings_impl().await
    }

    async fn upsert_settings(&self, target_date: chrono::NaiveDate) -> Result<GlobalSettings> {
        self.upsert_settings_impl(target_date).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! 内存 SQLite 测试基建：建库跑迁移，再按外键顺序播种基础数据

    use super::SeaOrmStorage;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Set};

    use crate::entity::{
        class_subjects, class_teachers, classes, students, subject_teachers, subjects, teachers,
    };

    pub async fn memory_storage() -> SeaOrmStorage {
        let db = sea_orm::Database::connect("sqlite::memory:")
            .await
            .unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    /// 播种后的基础数据 ID
    pub struct Seeded {
        pub class_id: i64,
        pub teacher_id: i64,
        pub subject_ids: Vec<i64>,
        pub student_id: i64,
    }

    /// 一个班级、一名任课教师、若干在班开设且由其讲授的科目、一名学生
    pub async fn seed_class_with_subjects(
        storage: &SeaOrmStorage,
        subject_names: &[&str],
    ) -> Seeded {
        let now = chrono::Utc::now().timestamp();
        let db = &storage.db;

        let class = classes::ActiveModel {
            name: Set("Grade 5A".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();

        let teacher = teachers::ActiveModel {
            name: Set("Huda".to_string()),
            arabic_name: Set(None),
            email: Set("huda@school.test".to_string()),
            password_hash: Set("x".to_string()),
            role: Set("teacher".to_string()),
            academic_year: Set("2024/2025".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();

        class_teachers::ActiveModel {
            class_id: Set(class.id),
            teacher_id: Set(teacher.id),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();

        let mut subject_ids = Vec::new();
        for name in subject_names {
            let subject = subjects::ActiveModel {
                name: Set(name.to_string()),
                arabic_name: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await
            .unwrap();

            class_subjects::ActiveModel {
                class_id: Set(class.id),
                subject_id: Set(subject.id),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await
            .unwrap();

            subject_teachers::ActiveModel {
                subject_id: Set(subject.id),
                teacher_id: Set(teacher.id),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await
            .unwrap();

            subject_ids.push(subject.id);
        }

        let student = students::ActiveModel {
            name: Set("Omar".to_string()),
            arabic_name: Set(None),
            date_of_birth: Set(chrono::NaiveDate::from_ymd_opt(2015, 9, 1).unwrap()),
            school: Set(None),
            nationality: Set(None),
            iqama_no: Set(None),
            passport_no: Set(None),
            expenses: Set("paid".to_string()),
            username: Set(None),
            password_hash: Set(None),
            class_id: Set(class.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();

        Seeded {
            class_id: class.id,
            teacher_id: teacher.id,
            subject_ids,
            student_id: student.id,
        }
    }
}
