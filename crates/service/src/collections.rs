#![forbid(unsafe_code)]

use crate::TaskService;
use nd_core::ids::CollectionId;
use nd_core::model::{Collection, CollectionSummary};
use nd_storage::{CollectionCreateRequest, StoreError};

impl TaskService {
    pub fn create_collection(
        &mut self,
        request: CollectionCreateRequest,
    ) -> Result<Collection, StoreError> {
        self.store.create_collection(request)
    }

    pub fn list_collections(&self) -> Result<Vec<CollectionSummary>, StoreError> {
        self.store.list_collections()
    }

    pub fn toggle_favorite(&mut self, id: CollectionId) -> Result<Collection, StoreError> {
        self.store.toggle_collection_favorite(id)
    }

    pub fn seed_demo_collections(&mut self) -> Result<usize, StoreError> {
        self.store.seed_demo_collections()
    }
}
