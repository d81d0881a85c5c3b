use crate::modules::employees::adapters::outbound::in_memory_store::InMemoryEmployeeStore;
use crate::modules::employees::core::ports::EmployeeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore + Send + Sync>,
}

impl AppState {
    pub fn new(store: Arc<dyn EmployeeStore + Send + Sync>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryEmployeeStore::new()))
    }
}
