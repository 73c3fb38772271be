use super::{
    client::ApiClient,
    types::{ApiError, Department, PublicClass},
};

impl ApiClient {
    /// Active departments, readable without a session.
    pub async fn list_public_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get_json(self.endpoint("/public/departments")).await
    }

    /// Active classes, optionally narrowed to one department.
    pub async fn list_public_classes(
        &self,
        department_id: Option<&str>,
    ) -> Result<Vec<PublicClass>, ApiError> {
        let url = self.endpoint("/public/classes");
        match department_id {
            Some(id) => {
                self.get_json_with_query(url, &[("departmentId", id)])
                    .await
            }
            None => self.get_json(url).await,
        }
    }
}
