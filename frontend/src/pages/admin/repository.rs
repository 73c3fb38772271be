use crate::api::{
    ApiClient, ApiError, AuditEntityType, AuditLogEntry, ClassRecord, ClassRequest, ClassTeacher,
    ClassTeacherRequest, Department, DepartmentRequest, Student, Teacher,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new(api: ApiClient) -> Self {
        Self::new_with_client(Rc::new(api))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.client.list_departments().await
    }

    pub async fn save_department(
        &self,
        id: Option<&str>,
        request: &DepartmentRequest,
    ) -> Result<Department, ApiError> {
        match id {
            Some(id) => self.client.update_department(id, request).await,
            None => self.client.create_department(request).await,
        }
    }

    pub async fn delete_department(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_department(id).await
    }

    pub async fn list_classes(&self) -> Result<Vec<ClassRecord>, ApiError> {
        self.client.list_classes().await
    }

    pub async fn save_class(
        &self,
        id: Option<&str>,
        request: &ClassRequest,
    ) -> Result<ClassRecord, ApiError> {
        match id {
            Some(id) => self.client.update_class(id, request).await,
            None => self.client.create_class(request).await,
        }
    }

    pub async fn delete_class(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_class(id).await
    }

    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.client.list_teachers().await
    }

    pub async fn delete_teacher(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_teacher(id).await
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.client.list_students().await
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_student(id).await
    }

    pub async fn audit_logs(
        &self,
        entity_type: AuditEntityType,
        entity_id: &str,
    ) -> Result<Vec<AuditLogEntry>, ApiError> {
        self.client.list_audit_logs(entity_type, entity_id).await
    }

    pub async fn list_class_teachers(&self) -> Result<Vec<ClassTeacher>, ApiError> {
        self.client.list_class_teachers().await
    }

    pub async fn save_class_teacher(
        &self,
        id: Option<&str>,
        request: &ClassTeacherRequest,
    ) -> Result<ClassTeacher, ApiError> {
        match id {
            Some(id) => self.client.update_class_teacher(id, request).await,
            None => self.client.assign_class_teacher(request).await,
        }
    }

    pub async fn delete_class_teacher(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_class_teacher(id).await
    }
}
