//! 预导入模块，方便使用

pub use super::class_subjects::{
    ActiveModel as ClassSubjectActiveModel, Entity as ClassSubjects, Model as ClassSubjectModel,
};
pub use super::class_teachers::{
    ActiveModel as ClassTeacherActiveModel, Entity as ClassTeachers, Model as ClassTeacherModel,
};
pub use super::classes::{ActiveModel as ClassActiveModel, Entity as Classes, Model as ClassModel};
pub use super::global_settings::{
    ActiveModel as GlobalSettingsActiveModel, Entity as GlobalSettings,
    Model as GlobalSettingsModel,
};
pub use super::marks::{ActiveModel as MarkActiveModel, Entity as Marks, Model as MarkModel};
pub use super::student_reports::{
    ActiveModel as StudentReportActiveModel, Entity as StudentReports, Model as StudentReportModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subject_teachers::{
    ActiveModel as SubjectTeacherActiveModel, Entity as SubjectTeachers,
    Model as SubjectTeacherModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
