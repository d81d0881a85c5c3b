use serde::{Deserialize, Serialize};

pub type EmployeeId = i64;

/// An employee record as held by the store.
///
/// The identity travels through the URL path or the create response, so it
/// is never part of the JSON representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    #[serde(skip)]
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub salary: f64,
}

impl Employee {
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = id;
        self
    }
}
