// Ports define what the employee use cases need from storage.
//
// Boundaries
// - No concrete storage here. Adapters implement `EmployeeStore` in the adapters layer.
// - Every operation is a single critical section. Callers that need two steps
//   (generate an id, then create) accept that ids may be skipped.

use crate::modules::employees::core::employee::{Employee, EmployeeId};
use async_trait::async_trait;

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Returns a fresh id, strictly greater than every id handed out before.
    async fn generate_id(&self) -> EmployeeId;

    /// Inserts the employee under its own id, replacing any record already there.
    async fn create(&self, employee: Employee);

    async fn get_by_id(&self, id: EmployeeId) -> Option<Employee>;

    /// Replaces the record stored under `id`. The lookup key wins over `employee.id`.
    async fn update(&self, id: EmployeeId, employee: Employee) -> bool;

    async fn delete(&self, id: EmployeeId) -> bool;

    /// Returns the `page`-th window of `page_size` records, 1-indexed.
    /// Order follows the store's internal enumeration and is not stable.
    async fn list(&self, page: i64, page_size: i64) -> Vec<Employee>;

    async fn len(&self) -> usize;
}
