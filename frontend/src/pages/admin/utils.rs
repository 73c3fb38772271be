use crate::api::{ApiError, ClassRecord, ClassTeacher, Department, Student, Teacher};

pub fn department_fields(department: &Department) -> Vec<String> {
    vec![department.department_name.clone()]
}

pub fn class_fields(class: &ClassRecord) -> Vec<String> {
    vec![class.class_name.clone(), department_name(class.department.as_ref())]
}

pub fn teacher_fields(teacher: &Teacher) -> Vec<String> {
    vec![
        teacher.name.clone(),
        teacher.email.clone(),
        department_name(teacher.department.as_ref()),
    ]
}

pub fn student_fields(student: &Student) -> Vec<String> {
    vec![
        student.name.clone(),
        student.email.clone(),
        student
            .class_entity
            .as_ref()
            .map(|class| class.class_name.clone())
            .unwrap_or_default(),
        department_name(student.department.as_ref()),
    ]
}

pub fn class_teacher_fields(assignment: &ClassTeacher) -> Vec<String> {
    let (teacher_name, teacher_email) = assignment
        .teacher
        .as_ref()
        .map(|teacher| (teacher.name.clone(), teacher.email.clone()))
        .unwrap_or_default();
    vec![
        assignment
            .class_entity
            .as_ref()
            .map(|class| class.class_name.clone())
            .unwrap_or_default(),
        teacher_name,
        teacher_email,
    ]
}

fn department_name(department: Option<&Department>) -> String {
    department
        .map(|d| d.department_name.clone())
        .unwrap_or_default()
}

/// Trimmed value of a required text field.
pub fn required(value: &str, label: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation(format!("{label} is required")))
    } else {
        Ok(trimmed.to_string())
    }
}
