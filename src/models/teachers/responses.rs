use serde::Serialize;
use ts_rs::TS;

use crate::models::classes::entities::Class;
use crate::models::subjects::entities::Subject;
use crate::models::teachers::entities::Teacher;

// 教师及其任教科目与班级
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherWithAssignments {
    #[serde(flatten)]
    #[ts(flatten)]
    pub teacher: Teacher,
    pub subjects: Vec<Subject>,
    pub classes: Vec<Class>,
}
