use super::{
    repository::AdminRepository,
    utils::{
        class_fields, class_teacher_fields, department_fields, required, student_fields,
        teacher_fields,
    },
};
use crate::{
    api::{
        ApiClient, ApiError, AuditEntityType, AuditLogEntry, ClassRecord, ClassRequest,
        ClassTeacher, ClassTeacherRequest, Department, DepartmentRequest, Student, Teacher,
    },
    components::{
        list::{FieldsFn, ListControls, Page},
        messages::MessageState,
    },
    state::StoreHandle,
};
use std::rc::Rc;

/// A loaded master-data collection with its own search and pagination.
#[derive(Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    controls: ListControls<T>,
}

impl<T: Clone> Collection<T> {
    fn new(fields: FieldsFn<T>, page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            controls: ListControls::new(fields, page_size),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.controls.set_query(query);
    }

    pub fn set_page(&mut self, page: usize) {
        self.controls.set_page(page, &self.items);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.controls.set_items_per_page(page_size);
    }

    pub fn page(&mut self) -> Page<T> {
        self.controls.apply(&self.items)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Departments,
    Classes,
    Teachers,
    Students,
    ClassTeachers,
}

/// Admin screens for departments, classes, teachers, students and class
/// teacher assignments. Every successful mutation reloads the collection it
/// touched.
pub struct AdminViewModel {
    repository: AdminRepository,
    store: StoreHandle,
    pub departments: Collection<Department>,
    pub classes: Collection<ClassRecord>,
    pub teachers: Collection<Teacher>,
    pub students: Collection<Student>,
    pub class_teachers: Collection<ClassTeacher>,
    /// History of the record last opened with `load_audit_logs`.
    pub audit_logs: Vec<AuditLogEntry>,
    pub messages: MessageState,
}

impl AdminViewModel {
    pub fn new(api: Rc<ApiClient>, store: StoreHandle, page_size: usize) -> Self {
        Self {
            repository: AdminRepository::new_with_client(api),
            store,
            departments: Collection::new(department_fields, page_size),
            classes: Collection::new(class_fields, page_size),
            teachers: Collection::new(teacher_fields, page_size),
            students: Collection::new(student_fields, page_size),
            class_teachers: Collection::new(class_teacher_fields, page_size),
            audit_logs: Vec::new(),
            messages: MessageState::default(),
        }
    }

    /// Loads every collection concurrently; the first failure is returned
    /// after all reads settled, and collections that loaded are kept.
    pub async fn refresh_all(&mut self) -> Result<(), ApiError> {
        let repo = self.repository.clone();
        let (departments, classes, teachers, students, class_teachers) = futures::join!(
            repo.list_departments(),
            repo.list_classes(),
            repo.list_teachers(),
            repo.list_students(),
            repo.list_class_teachers(),
        );
        let results = [
            self.loaded(departments).map(|items| self.departments.items = items),
            self.loaded(classes).map(|items| self.classes.items = items),
            self.loaded(teachers).map(|items| self.teachers.items = items),
            self.loaded(students).map(|items| self.students.items = items),
            self.loaded(class_teachers).map(|items| self.class_teachers.items = items),
        ];
        results.into_iter().collect()
    }

    pub async fn refresh(&mut self, section: Section) -> Result<(), ApiError> {
        match section {
            Section::Departments => self.refresh_departments().await,
            Section::Classes => self.refresh_classes().await,
            Section::Teachers => self.refresh_teachers().await,
            Section::Students => self.refresh_students().await,
            Section::ClassTeachers => self.refresh_class_teachers().await,
        }
    }

    pub async fn refresh_departments(&mut self) -> Result<(), ApiError> {
        let result = self.repository.list_departments().await;
        self.departments.items = self.loaded(result)?;
        Ok(())
    }

    pub async fn refresh_classes(&mut self) -> Result<(), ApiError> {
        let result = self.repository.list_classes().await;
        self.classes.items = self.loaded(result)?;
        Ok(())
    }

    pub async fn refresh_teachers(&mut self) -> Result<(), ApiError> {
        let result = self.repository.list_teachers().await;
        self.teachers.items = self.loaded(result)?;
        Ok(())
    }

    pub async fn refresh_students(&mut self) -> Result<(), ApiError> {
        let result = self.repository.list_students().await;
        self.students.items = self.loaded(result)?;
        Ok(())
    }

    pub async fn refresh_class_teachers(&mut self) -> Result<(), ApiError> {
        let result = self.repository.list_class_teachers().await;
        self.class_teachers.items = self.loaded(result)?;
        Ok(())
    }

    /// Creates a department, or renames `id` when given.
    pub async fn save_department(
        &mut self,
        id: Option<&str>,
        name: &str,
    ) -> Result<Department, ApiError> {
        self.messages.clear();
        let request = DepartmentRequest {
            department_name: self.validated(required(name, "Department name"))?,
        };
        let result = self.repository.save_department(id, &request).await;
        let success = if id.is_some() {
            "Department updated successfully"
        } else {
            "Department created successfully"
        };
        let department = self.settle(result, success)?;
        self.refresh_after_mutation(Section::Departments).await;
        Ok(department)
    }

    pub async fn delete_department(&mut self, id: &str) -> Result<(), ApiError> {
        self.messages.clear();
        let result = self.repository.delete_department(id).await;
        self.settle(result, "Department deleted successfully")?;
        self.refresh_after_mutation(Section::Departments).await;
        Ok(())
    }

    pub async fn save_class(
        &mut self,
        id: Option<&str>,
        name: &str,
        department_id: &str,
    ) -> Result<ClassRecord, ApiError> {
        self.messages.clear();
        let class_name = self.validated(required(name, "Class name"))?;
        let department_id = self.validated(required(department_id, "Department"))?;
        let request = ClassRequest {
            class_name,
            department_id,
        };
        let result = self.repository.save_class(id, &request).await;
        let success = if id.is_some() {
            "Class updated successfully"
        } else {
            "Class created successfully"
        };
        let class = self.settle(result, success)?;
        self.refresh_after_mutation(Section::Classes).await;
        Ok(class)
    }

    pub async fn delete_class(&mut self, id: &str) -> Result<(), ApiError> {
        self.messages.clear();
        let result = self.repository.delete_class(id).await;
        self.settle(result, "Class deleted successfully")?;
        self.refresh_after_mutation(Section::Classes).await;
        Ok(())
    }

    pub async fn delete_teacher(&mut self, id: &str) -> Result<(), ApiError> {
        self.messages.clear();
        let result = self.repository.delete_teacher(id).await;
        self.settle(result, "Teacher deleted successfully")?;
        self.refresh_after_mutation(Section::Teachers).await;
        Ok(())
    }

    pub async fn delete_student(&mut self, id: &str) -> Result<(), ApiError> {
        self.messages.clear();
        let result = self.repository.delete_student(id).await;
        self.settle(result, "Student deleted successfully")?;
        self.refresh_after_mutation(Section::Students).await;
        Ok(())
    }

    /// Assigns a teacher to a class, or changes assignment `id` when given.
    pub async fn save_class_teacher(
        &mut self,
        id: Option<&str>,
        class_id: &str,
        teacher_id: &str,
    ) -> Result<ClassTeacher, ApiError> {
        self.messages.clear();
        let class_id = self.validated(required(class_id, "Class"))?;
        let teacher_id = self.validated(required(teacher_id, "Teacher"))?;
        let request = ClassTeacherRequest {
            class_id,
            teacher_id,
        };
        let result = self.repository.save_class_teacher(id, &request).await;
        let success = if id.is_some() {
            "Class teacher updated successfully"
        } else {
            "Class teacher assigned successfully"
        };
        let assignment = self.settle(result, success)?;
        self.refresh_after_mutation(Section::ClassTeachers).await;
        Ok(assignment)
    }

    pub async fn delete_class_teacher(&mut self, id: &str) -> Result<(), ApiError> {
        self.messages.clear();
        let result = self.repository.delete_class_teacher(id).await;
        self.settle(result, "Class teacher assignment deleted successfully")?;
        self.refresh_after_mutation(Section::ClassTeachers).await;
        Ok(())
    }

    /// Loads the change history shown next to a student or teacher. A failed
    /// read leaves the history empty and sets no message.
    pub async fn load_audit_logs(
        &mut self,
        entity_type: AuditEntityType,
        entity_id: &str,
    ) -> &[AuditLogEntry] {
        self.audit_logs = match self.repository.audit_logs(entity_type, entity_id).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(?entity_type, entity_id, error = %err, "audit log unavailable");
                Vec::new()
            }
        };
        &self.audit_logs
    }

    fn loaded<T>(&mut self, result: Result<Vec<T>, ApiError>) -> Result<Vec<T>, ApiError> {
        result.map_err(|err| {
            self.store.handle_api_error(&err);
            self.messages.set_api_error(&err);
            err
        })
    }

    fn validated(&mut self, value: Result<String, ApiError>) -> Result<String, ApiError> {
        value.map_err(|err| {
            self.messages.set_api_error(&err);
            err
        })
    }

    fn settle<T>(&mut self, result: Result<T, ApiError>, success: &str) -> Result<T, ApiError> {
        match result {
            Ok(value) => {
                tracing::info!(success, "admin change applied");
                self.messages.set_success(success);
                Ok(value)
            }
            Err(err) => {
                self.store.handle_api_error(&err);
                self.messages.set_api_error(&err);
                Err(err)
            }
        }
    }

    async fn refresh_after_mutation(&mut self, section: Section) {
        let success = self.messages.success.clone();
        if let Err(err) = self.refresh(section).await {
            tracing::warn!(?section, error = %err, "reload after admin change failed");
        }
        // The mutation itself succeeded; keep saying so.
        if let Some(success) = success {
            self.messages.set_success(success);
        }
    }
}
