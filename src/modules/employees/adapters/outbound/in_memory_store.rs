// In memory implementation of the EmployeeStore port.
//
// Responsibilities
// - Hold every employee in a map keyed by id, together with the id counter.
// - Serialize writers against everything else with a single readers-writer lock.

use crate::modules::employees::core::employee::{Employee, EmployeeId};
use crate::modules::employees::core::ports::EmployeeStore;
use std::collections::HashMap;
use std::ops::Range;
use tokio::sync::RwLock;

struct Inner {
    employees: HashMap<EmployeeId, Employee>,
    next_id: EmployeeId,
}

pub struct InMemoryEmployeeStore {
    inner: RwLock<Inner>,
}

impl Default for InMemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                employees: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

/// Index range covered by a 1-indexed page, clamped to `count`.
///
/// `None` when the window starts before the first record, at or past the end,
/// has no width, or cannot be computed without overflowing.
fn page_window(page: i64, page_size: i64, count: usize) -> Option<Range<usize>> {
    let start = page.checked_sub(1)?.checked_mul(page_size)?;
    let end = start.checked_add(page_size)?;
    let start = usize::try_from(start).ok()?;
    if start >= count {
        return None;
    }
    let end = usize::try_from(end).ok()?.min(count);
    (start < end).then_some(start..end)
}

#[async_trait::async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn generate_id(&self) -> EmployeeId {
        let mut guard = self.inner.write().await;
        let id = guard.next_id;
        guard.next_id += 1;
        id
    }

    async fn create(&self, employee: Employee) {
        let mut guard = self.inner.write().await;
        guard.employees.insert(employee.id, employee);
    }

    async fn get_by_id(&self, id: EmployeeId) -> Option<Employee> {
        self.inner.read().await.employees.get(&id).cloned()
    }

    async fn update(&self, id: EmployeeId, employee: Employee) -> bool {
        let mut guard = self.inner.write().await;
        match guard.employees.get_mut(&id) {
            Some(current) => {
                *current = employee.with_id(id);
                true
            }
            None => false,
        }
    }

    async fn delete(&self, id: EmployeeId) -> bool {
        self.inner.write().await.employees.remove(&id).is_some()
    }

    async fn list(&self, page: i64, page_size: i64) -> Vec<Employee> {
        let guard = self.inner.read().await;
        let Some(window) = page_window(page, page_size, guard.employees.len()) else {
            return Vec::new();
        };
        tracing::debug!(start = window.start, end = window.end, "listing employees window");

        guard
            .employees
            .values()
            .skip(window.start)
            .take(window.len())
            .cloned()
            .collect()
    }

    async fn len(&self) -> usize {
        self.inner.read().await.employees.len()
    }
}
