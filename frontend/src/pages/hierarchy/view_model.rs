use super::utils::{count_by_type, flatten, TreeRow};
use crate::{
    api::{ApiClient, ApiError, HierarchyNode, Role},
    components::messages::MessageState,
    state::StoreHandle,
};
use std::collections::BTreeMap;
use std::rc::Rc;

pub struct HierarchyViewModel {
    client: Rc<ApiClient>,
    store: StoreHandle,
    tree: Option<HierarchyNode>,
    pub messages: MessageState,
}

impl HierarchyViewModel {
    pub fn new(client: Rc<ApiClient>, store: StoreHandle) -> Self {
        Self {
            client,
            store,
            tree: None,
            messages: MessageState::default(),
        }
    }

    pub async fn load(&mut self) -> Result<(), ApiError> {
        match self.client.get_hierarchy_tree().await {
            Ok(tree) => {
                self.tree = Some(tree);
                Ok(())
            }
            Err(err) => {
                self.store.handle_api_error(&err);
                self.messages.set_error("Failed to load hierarchy");
                Err(err)
            }
        }
    }

    pub fn tree(&self) -> Option<&HierarchyNode> {
        self.tree.as_ref()
    }

    /// Teachers see the chart without students, with their own node marked.
    pub fn rows(&self) -> Vec<TreeRow> {
        let Some(tree) = self.tree.as_ref() else {
            return Vec::new();
        };
        let user = self.store.read(|state| state.auth.user.clone());
        let include_students = !matches!(user.as_ref().map(|u| u.role), Some(Role::Teacher));
        let highlight = user.as_ref().map(|u| u.user_id.as_str());
        flatten(tree, include_students, highlight)
    }

    pub fn counts(&self) -> BTreeMap<String, usize> {
        self.tree.as_ref().map(count_by_type).unwrap_or_default()
    }
}
