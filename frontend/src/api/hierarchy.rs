use super::{
    client::ApiClient,
    types::{ApiError, HierarchyNode},
};

impl ApiClient {
    pub async fn get_hierarchy_tree(&self) -> Result<HierarchyNode, ApiError> {
        self.get_json(self.endpoint("/hierarchy/tree")).await
    }
}
