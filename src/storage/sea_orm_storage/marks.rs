use super::SeaOrmStorage;
use crate::entity::marks::{ActiveModel, Column, Entity as Marks};
use crate::entity::prelude::{ClassSubjects, ClassTeachers, Students, Subjects};
use crate::entity::{class_subjects, class_teachers, students};
use crate::errors::{Result, SamsError};
use crate::models::marks::{
    entities::{Mark, Trimester},
    requests::{MarkQueryParams, UpdateMarkRequest},
    responses::MarkWithStudent,
};
use crate::models::subjects::entities::Subject;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 列出某 (班级, 科目, 教师, 学段) 花名册的成绩行，按学生姓名排序
    pub async fn list_roster_marks_impl(
        &self,
        query: &MarkQueryParams,
    ) -> Result<Vec<MarkWithStudent>> {
        let Some(ct) = self
            .find_class_teacher(query.class_id, query.teacher_id)
            .await?
        else {
            return Ok(Vec::new());
        };

        let rows = Marks::find()
            .filter(Column::ClassTeacherId.eq(ct.id))
            .filter(Column::SubjectId.eq(query.subject_id))
            .filter(Column::Trimester.eq(query.trimester.label()))
            .find_also_related(Students)
            .order_by_asc(students::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询花名册成绩失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(mark, student)| {
                student.map(|s| MarkWithStudent {
                    mark: mark.into_mark(),
                    student_name: s.name.clone(),
                    student_arabic_name: s.arabic_name,
                })
            })
            .collect())
    }

    /// 通过 ID 获取成绩行
    pub async fn get_mark_by_id_impl(&self, mark_id: i64) -> Result<Option<Mark>> {
        let result = Marks::find_by_id(mark_id)
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_mark()))
    }

    /// 整行覆盖更新成绩，未出现的评分项写 0
    pub async fn update_mark_impl(
        &self,
        mark_id: i64,
        values: &UpdateMarkRequest,
        total_marks: i32,
    ) -> Result<Option<Mark>> {
        let existing = self.get_mark_by_id_impl(mark_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(mark_id),
            participation: Set(values.participation.unwrap_or(0)),
            behavior: Set(values.behavior.unwrap_or(0)),
            reading: Set(values.reading.unwrap_or(0)),
            memorizing: Set(values.memorizing.unwrap_or(0)),
            oral_test: Set(values.oral_test.unwrap_or(0)),
            working_quiz: Set(values.working_quiz.unwrap_or(0)),
            project: Set(values.project.unwrap_or(0)),
            class_activities: Set(values.class_activities.unwrap_or(0)),
            final_exam: Set(values.final_exam.unwrap_or(0)),
            total_marks: Set(total_marks),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("更新成绩失败: {e}")))?;

        self.get_mark_by_id_impl(mark_id).await
    }

    /// 为新入学学生按班级任课关联生成三个学段的零分成绩行
    pub async fn create_zero_marks_for_student_impl(
        &self,
        student_id: i64,
        class_id: i64,
        academic_year: &str,
    ) -> Result<u64> {
        let mut created = 0;

        for (ct_id, subject_id) in self.class_teaching_pairs(class_id).await? {
            for trimester in Trimester::ALL {
                if self
                    .insert_zero_mark_if_missing(
                        student_id,
                        subject_id,
                        ct_id,
                        academic_year,
                        trimester,
                    )
                    .await?
                {
                    created += 1;
                }
            }
        }

        Ok(created)
    }

    /// 为新任课配对按班级现有学生生成三个学段的零分成绩行
    pub async fn create_zero_marks_for_assignment_impl(
        &self,
        class_id: i64,
        teacher_id: i64,
        subject_id: i64,
        academic_year: &str,
    ) -> Result<u64> {
        let Some(ct) = self.find_class_teacher(class_id, teacher_id).await? else {
            return Err(SamsError::not_found(format!(
                "No class-teacher association for class {class_id} and teacher {teacher_id}"
            )));
        };

        let student_rows = Students::find()
            .filter(students::Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级学生失败: {e}")))?;

        let mut created = 0;
        for student in &student_rows {
            for trimester in Trimester::ALL {
                if self
                    .insert_zero_mark_if_missing(
                        student.id,
                        subject_id,
                        ct.id,
                        academic_year,
                        trimester,
                    )
                    .await?
                {
                    created += 1;
                }
            }
        }

        Ok(created)
    }

    /// 班级调动：成绩行改挂新班级的同教师任课关联，
    /// 无法改挂的删除，再按新班级任课补齐零分行
    pub async fn transfer_student_marks_impl(
        &self,
        student_id: i64,
        new_class_id: i64,
        academic_year: &str,
    ) -> Result<()> {
        let rows = Marks::find()
            .filter(Column::StudentId.eq(student_id))
            .find_also_related(ClassTeachers)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生成绩失败: {e}")))?;

        let new_pairs = self.class_teaching_pairs(new_class_id).await?;

        for (mark, old_ct) in rows {
            let Some(old_ct) = old_ct else {
                continue;
            };
            if old_ct.class_id == new_class_id {
                continue;
            }

            let new_ct = self
                .find_class_teacher(new_class_id, old_ct.teacher_id)
                .await?;
            let target = new_ct.filter(|ct| {
                new_pairs
                    .iter()
                    .any(|(ct_id, subject_id)| *ct_id == ct.id && *subject_id == mark.subject_id)
            });

            match target {
                Some(ct) => {
                    let model = ActiveModel {
                        id: Set(mark.id),
                        class_teacher_id: Set(ct.id),
                        updated_at: Set(chrono::Utc::now().timestamp()),
                        ..Default::default()
                    };
                    model.update(&self.db).await.map_err(|e| {
                        SamsError::database_operation(format!("改挂成绩行失败: {e}"))
                    })?;
                }
                None => {
                    Marks::delete_by_id(mark.id).exec(&self.db).await.map_err(|e| {
                        SamsError::database_operation(format!("删除成绩行失败: {e}"))
                    })?;
                }
            }
        }

        // 新班级有而旧班级没有的任课配对补零分行
        self.create_zero_marks_for_student_impl(student_id, new_class_id, academic_year)
            .await?;

        Ok(())
    }

    /// 列出学生某学段的全部成绩（附科目）
    pub async fn list_student_marks_impl(
        &self,
        student_id: i64,
        trimester: Trimester,
    ) -> Result<Vec<(Mark, Subject)>> {
        let rows = Marks::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::Trimester.eq(trimester.label()))
            .find_also_related(Subjects)
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询学生成绩失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(mark, subject)| {
                subject.map(|s| (mark.into_mark(), s.into_subject()))
            })
            .collect())
    }

    /// 列出某任课配对某学段的全部成绩行
    pub async fn list_assignment_marks_impl(
        &self,
        class_id: i64,
        teacher_id: i64,
        subject_id: i64,
        trimester: Trimester,
    ) -> Result<Vec<Mark>> {
        let Some(ct) = self.find_class_teacher(class_id, teacher_id).await? else {
            return Ok(Vec::new());
        };

        let rows = Marks::find()
            .filter(Column::ClassTeacherId.eq(ct.id))
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::Trimester.eq(trimester.label()))
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询配对成绩失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_mark()).collect())
    }

    /// 查找班级-教师关联行
    async fn find_class_teacher(
        &self,
        class_id: i64,
        teacher_id: i64,
    ) -> Result<Option<class_teachers::Model>> {
        ClassTeachers::find()
            .filter(class_teachers::Column::ClassId.eq(class_id))
            .filter(class_teachers::Column::TeacherId.eq(teacher_id))
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询任课关联失败: {e}")))
    }

    /// 某班级的有效授课配对：(class_teacher_id, subject_id)
    ///
    /// 科目须在该班级开设，且由该任课教师讲授。
    async fn class_teaching_pairs(&self, class_id: i64) -> Result<Vec<(i64, i64)>> {
        use crate::entity::prelude::SubjectTeachers;
        use crate::entity::subject_teachers;

        let class_teacher_rows = ClassTeachers::find()
            .filter(class_teachers::Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询任课关联失败: {e}")))?;

        let offered = ClassSubjects::find()
            .filter(class_subjects::Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询班级科目关联失败: {e}")))?;

        if class_teacher_rows.is_empty() || offered.is_empty() {
            return Ok(Vec::new());
        }

        let teacher_ids: Vec<i64> = class_teacher_rows.iter().map(|ct| ct.teacher_id).collect();
        let taught = SubjectTeachers::find()
            .filter(subject_teachers::Column::TeacherId.is_in(teacher_ids))
            .all(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询科目任课关联失败: {e}")))?;

        let mut pairs = Vec::new();
        for ct in &class_teacher_rows {
            for cs in &offered {
                let teaches = taught
                    .iter()
                    .any(|st| st.teacher_id == ct.teacher_id && st.subject_id == cs.subject_id);
                if teaches {
                    pairs.push((ct.id, cs.subject_id));
                }
            }
        }

        Ok(pairs)
    }

    /// 不存在时插入一条零分成绩行，返回是否插入
    async fn insert_zero_mark_if_missing(
        &self,
        student_id: i64,
        subject_id: i64,
        class_teacher_id: i64,
        academic_year: &str,
        trimester: Trimester,
    ) -> Result<bool> {
        let existing = Marks::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SubjectId.eq(subject_id))
            .filter(Column::ClassTeacherId.eq(class_teacher_id))
            .filter(Column::Trimester.eq(trimester.label()))
            .one(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("查询成绩失败: {e}")))?;
        if existing.is_some() {
            return Ok(false);
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            student_id: Set(student_id),
            subject_id: Set(subject_id),
            class_teacher_id: Set(class_teacher_id),
            academic_year: Set(academic_year.to_string()),
            trimester: Set(trimester.label().to_string()),
            participation: Set(0),
            behavior: Set(0),
            reading: Set(0),
            memorizing: Set(0),
            oral_test: Set(0),
            working_quiz: Set(0),
            project: Set(0),
            class_activities: Set(0),
            final_exam: Set(0),
            total_marks: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| SamsError::database_operation(format!("创建零分成绩行失败: {e}")))?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{memory_storage, seed_class_with_subjects};
    use crate::entity::marks::{Column, Entity as Marks};
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

    #[tokio::test]
    async fn test_enrollment_creates_zero_marks_per_pair_and_trimester() {
        let storage = memory_storage().await;
        let seeded = seed_class_with_subjects(&storage, &["Math", "Science"]).await;

        let created = storage
            .create_zero_marks_for_student_impl(seeded.student_id, seeded.class_id, "2024/2025")
            .await
            .unwrap();

        // 2 个科目 × 1 条任课关联 × 3 个学段
        assert_eq!(created, 6);

        let rows = Marks::find()
            .filter(Column::StudentId.eq(seeded.student_id))
            .all(&storage.db)
            .await
            .unwrap();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|m| m.total_marks == 0));
        for subject_id in &seeded.subject_ids {
            assert_eq!(rows.iter().filter(|m| m.subject_id == *subject_id).count(), 3);
        }
    }

    #[tokio::test]
    async fn test_enrollment_fanout_is_idempotent() {
        let storage = memory_storage().await;
        let seeded = seed_class_with_subjects(&storage, &["Math"]).await;

        let first = storage
            .create_zero_marks_for_student_impl(seeded.student_id, seeded.class_id, "2024/2025")
            .await
            .unwrap();
        let second = storage
            .create_zero_marks_for_student_impl(seeded.student_id, seeded.class_id, "2024/2025")
            .await
            .unwrap();

        assert_eq!(first, 3);
        assert_eq!(second, 0);
    }
}
