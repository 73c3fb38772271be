use super::{
    client::ApiClient,
    types::{
        ApiError, AuditEntityType, AuditLogEntry, ClassRecord, ClassRequest, ClassTeacher,
        ClassTeacherRequest, Department, DepartmentRequest, Student, Teacher,
    },
};

const DEPARTMENTS: &str = "/admin/departments";
const CLASSES: &str = "/admin/classes";
const TEACHERS: &str = "/admin/teachers";
const STUDENTS: &str = "/admin/students";
const CLASS_TEACHERS: &str = "/admin/class-teachers";
const AUDIT_LOGS: &str = "/admin/audit-logs";

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get_json(self.endpoint(DEPARTMENTS)).await
    }

    pub async fn create_department(
        &self,
        request: &DepartmentRequest,
    ) -> Result<Department, ApiError> {
        self.post_json(self.endpoint(DEPARTMENTS), request).await
    }

    pub async fn update_department(
        &self,
        id: &str,
        request: &DepartmentRequest,
    ) -> Result<Department, ApiError> {
        self.put_json(self.endpoint_with_id(DEPARTMENTS, id), request)
            .await
    }

    pub async fn delete_department(&self, id: &str) -> Result<(), ApiError> {
        self.delete(self.endpoint_with_id(DEPARTMENTS, id)).await
    }

    pub async fn list_classes(&self) -> Result<Vec<ClassRecord>, ApiError> {
        self.get_json(self.endpoint(CLASSES)).await
    }

    pub async fn create_class(&self, request: &ClassRequest) -> Result<ClassRecord, ApiError> {
        self.post_json(self.endpoint(CLASSES), request).await
    }

    pub async fn update_class(
        &self,
        id: &str,
        request: &ClassRequest,
    ) -> Result<ClassRecord, ApiError> {
        self.put_json(self.endpoint_with_id(CLASSES, id), request)
            .await
    }

    pub async fn delete_class(&self, id: &str) -> Result<(), ApiError> {
        self.delete(self.endpoint_with_id(CLASSES, id)).await
    }

    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.get_json(self.endpoint(TEACHERS)).await
    }

    pub async fn delete_teacher(&self, id: &str) -> Result<(), ApiError> {
        self.delete(self.endpoint_with_id(TEACHERS, id)).await
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get_json(self.endpoint(STUDENTS)).await
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        self.delete(self.endpoint_with_id(STUDENTS, id)).await
    }

    pub async fn list_class_teachers(&self) -> Result<Vec<ClassTeacher>, ApiError> {
        self.get_json(self.endpoint(CLASS_TEACHERS)).await
    }

    pub async fn assign_class_teacher(
        &self,
        request: &ClassTeacherRequest,
    ) -> Result<ClassTeacher, ApiError> {
        self.post_json(self.endpoint(CLASS_TEACHERS), request)
            .await
    }

    pub async fn update_class_teacher(
        &self,
        id: &str,
        request: &ClassTeacherRequest,
    ) -> Result<ClassTeacher, ApiError> {
        self.put_json(self.endpoint_with_id(CLASS_TEACHERS, id), request)
            .await
    }

    pub async fn delete_class_teacher(&self, id: &str) -> Result<(), ApiError> {
        self.delete(self.endpoint_with_id(CLASS_TEACHERS, id))
            .await
    }

    /// Change history of one student or teacher record.
    pub async fn list_audit_logs(
        &self,
        entity_type: AuditEntityType,
        entity_id: &str,
    ) -> Result<Vec<AuditLogEntry>, ApiError> {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'a> {
            entity_type: AuditEntityType,
            entity_id: &'a str,
        }

        self.get_json_with_query(
            self.endpoint(AUDIT_LOGS),
            &Query {
                entity_type,
                entity_id,
            },
        )
        .await
    }
}
