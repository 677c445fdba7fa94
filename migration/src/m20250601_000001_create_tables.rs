use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Classes::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subjects::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::ArabicName).string().null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表（含管理员，role 列区分）
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(ColumnDef::new(Teachers::ArabicName).string().null())
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Teachers::Role).string().not_null())
                    .col(ColumnDef::new(Teachers::AcademicYear).string().not_null())
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::ArabicName).string().null())
                    .col(ColumnDef::new(Students::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Students::School).string().null())
                    .col(ColumnDef::new(Students::Nationality).string().null())
                    .col(ColumnDef::new(Students::IqamaNo).string().null())
                    .col(ColumnDef::new(Students::PassportNo).string().null())
                    .col(ColumnDef::new(Students::Expenses).string().not_null())
                    .col(ColumnDef::new(Students::Username).string().null().unique_key())
                    .col(ColumnDef::new(Students::PasswordHash).string().null())
                    .col(ColumnDef::new(Students::ClassId).big_integer().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级-教师关联表（成绩行的挂靠点）
        manager
            .create_table(
                Table::create()
                    .table(ClassTeachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassTeachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassTeachers::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassTeachers::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassTeachers::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassTeachers::Table, ClassTeachers::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassTeachers::Table, ClassTeachers::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_teachers_pair")
                    .table(ClassTeachers::Table)
                    .col(ClassTeachers::ClassId)
                    .col(ClassTeachers::TeacherId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建班级-科目关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassSubjects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassSubjects::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassSubjects::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassSubjects::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassSubjects::Table, ClassSubjects::ClassId)
                            .to(Classes::Table, Classes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassSubjects::Table, ClassSubjects::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_subjects_pair")
                    .table(ClassSubjects::Table)
                    .col(ClassSubjects::ClassId)
                    .col(ClassSubjects::SubjectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建科目-教师关联表
        manager
            .create_table(
                Table::create()
                    .table(SubjectTeachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SubjectTeachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SubjectTeachers::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubjectTeachers::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SubjectTeachers::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubjectTeachers::Table, SubjectTeachers::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SubjectTeachers::Table, SubjectTeachers::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subject_teachers_pair")
                    .table(SubjectTeachers::Table)
                    .col(SubjectTeachers::SubjectId)
                    .col(SubjectTeachers::TeacherId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建成绩表（九个评分项列 + 总分）
        manager
            .create_table(
                Table::create()
                    .table(Marks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Marks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Marks::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Marks::SubjectId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Marks::ClassTeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Marks::AcademicYear).string().not_null())
                    .col(ColumnDef::new(Marks::Trimester).string().not_null())
                    .col(ColumnDef::new(Marks::Participation).integer().not_null())
                    .col(ColumnDef::new(Marks::Behavior).integer().not_null())
                    .col(ColumnDef::new(Marks::Reading).integer().not_null())
                    .col(ColumnDef::new(Marks::Memorizing).integer().not_null())
                    .col(ColumnDef::new(Marks::OralTest).integer().not_null())
                    .col(ColumnDef::new(Marks::WorkingQuiz).integer().not_null())
                    .col(ColumnDef::new(Marks::Project).integer().not_null())
                    .col(ColumnDef::new(Marks::ClassActivities).integer().not_null())
                    .col(ColumnDef::new(Marks::FinalExam).integer().not_null())
                    .col(ColumnDef::new(Marks::TotalMarks).integer().not_null())
                    .col(ColumnDef::new(Marks::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Marks::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Marks::Table, Marks::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Marks::Table, Marks::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Marks::Table, Marks::ClassTeacherId)
                            .to(ClassTeachers::Table, ClassTeachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_marks_row")
                    .table(Marks::Table)
                    .col(Marks::StudentId)
                    .col(Marks::SubjectId)
                    .col(Marks::ClassTeacherId)
                    .col(Marks::Trimester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建学生评语报告表
        manager
            .create_table(
                Table::create()
                    .table(StudentReports::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudentReports::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudentReports::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentReports::ClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentReports::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentReports::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentReports::AcademicYear)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentReports::Trimester).string().not_null())
                    .col(ColumnDef::new(StudentReports::Status).string().not_null())
                    .col(ColumnDef::new(StudentReports::Comment).text().not_null())
                    .col(
                        ColumnDef::new(StudentReports::Recommendations)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StudentReports::QuizScore).integer().null())
                    .col(
                        ColumnDef::new(StudentReports::ProjectScore)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(StudentReports::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudentReports::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentReports::Table, StudentReports::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentReports::Table, StudentReports::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudentReports::Table, StudentReports::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_student_reports_row")
                    .table(StudentReports::Table)
                    .col(StudentReports::StudentId)
                    .col(StudentReports::SubjectId)
                    .col(StudentReports::TeacherId)
                    .col(StudentReports::Trimester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 创建全局设置表（固定单行）
        manager
            .create_table(
                Table::create()
                    .table(GlobalSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GlobalSettings::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GlobalSettings::TargetDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GlobalSettings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GlobalSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentReports::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Marks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SubjectTeachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassTeachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    ArabicName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    Name,
    ArabicName,
    Email,
    PasswordHash,
    Role,
    AcademicYear,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    ArabicName,
    DateOfBirth,
    School,
    Nationality,
    IqamaNo,
    PassportNo,
    Expenses,
    Username,
    PasswordHash,
    ClassId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClassTeachers {
    #[sea_orm(iden = "class_teachers")]
    Table,
    Id,
    ClassId,
    TeacherId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClassSubjects {
    #[sea_orm(iden = "class_subjects")]
    Table,
    Id,
    ClassId,
    SubjectId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SubjectTeachers {
    #[sea_orm(iden = "subject_teachers")]
    Table,
    Id,
    SubjectId,
    TeacherId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Marks {
    #[sea_orm(iden = "marks")]
    Table,
    Id,
    StudentId,
    SubjectId,
    ClassTeacherId,
    AcademicYear,
    Trimester,
    Participation,
    Behavior,
    Reading,
    Memorizing,
    OralTest,
    WorkingQuiz,
    Project,
    ClassActivities,
    FinalExam,
    TotalMarks,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum StudentReports {
    #[sea_orm(iden = "student_reports")]
    Table,
    Id,
    StudentId,
    ClassId,
    TeacherId,
    SubjectId,
    AcademicYear,
    Trimester,
    Status,
    Comment,
    Recommendations,
    QuizScore,
    ProjectScore,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GlobalSettings {
    #[sea_orm(iden = "global_settings")]
    Table,
    Id,
    TargetDate,
    UpdatedAt,
}
