//! In-memory staff repository.
//!
//! Used by the test suites and for running the server without PostgreSQL.
//! Mirrors the table semantics: sequential ids starting at 1 and
//! case-insensitive email uniqueness.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ems_core::types::StaffId;
use ems_entity::staff::{NewStaff, StaffRecord};

use super::{RepositoryError, StaffRepository};

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    records: BTreeMap<StaffId, StaffRecord>,
}

/// [`StaffRepository`] held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStaffRepository {
    inner: RwLock<Inner>,
}

impl InMemoryStaffRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Email equality as `LOWER(a) = LOWER(b)` sees it.
fn same_email(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[async_trait]
impl StaffRepository for InMemoryStaffRepository {
    async fn create(&self, new_staff: NewStaff) -> Result<StaffRecord, RepositoryError> {
        let mut inner = self.inner.write().await;

        if inner
            .records
            .values()
            .any(|r| same_email(&r.email, &new_staff.email))
        {
            return Err(RepositoryError::DuplicateEmail(new_staff.email));
        }

        inner.next_id += 1;
        let record = new_staff.into_record(StaffId(inner.next_id));
        inner.records.insert(record.staff_id, record.clone());
        Ok(record)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StaffRecord>, RepositoryError> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .values()
            .find(|r| same_email(&r.email, email))
            .cloned())
    }

    async fn find_by_id(&self, id: StaffId) -> Result<Option<StaffRecord>, RepositoryError> {
        Ok(self.inner.read().await.records.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<StaffRecord>, RepositoryError> {
        Ok(self.inner.read().await.records.values().cloned().collect())
    }

    async fn delete(&self, id: StaffId) -> Result<bool, RepositoryError> {
        Ok(self.inner.write().await.records.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.inner.read().await.records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use ems_core::types::StoreId;

    use super::*;

    fn new_staff(email: &str) -> NewStaff {
        NewStaff {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: email.into(),
            phone: Some("555-0100".into()),
            active: 1,
            store_id: StoreId(1),
            manager_id: None,
            password_hash: "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".into(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryStaffRepository::new();
        let a = repo.create(new_staff("a@store.com")).await.unwrap();
        let b = repo.create(new_staff("b@store.com")).await.unwrap();

        assert_eq!(a.staff_id, StaffId(1));
        assert_eq!(b.staff_id, StaffId(2));
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_case_insensitive() {
        let repo = InMemoryStaffRepository::new();
        repo.create(new_staff("jane@store.com")).await.unwrap();

        let err = repo.create(new_staff("JANE@Store.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateEmail(ref e) if e == "JANE@Store.com"));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_email_absent_is_none() {
        let repo = InMemoryStaffRepository::new();
        repo.create(new_staff("jane@store.com")).await.unwrap();

        assert!(repo.find_by_email("ghost@store.com").await.unwrap().is_none());
        let found = repo.find_by_email("Jane@Store.com").await.unwrap();
        assert_eq!(found.map(|r| r.staff_id), Some(StaffId(1)));
    }

    #[tokio::test]
    async fn test_delete_leaves_manager_references_dangling() {
        let repo = InMemoryStaffRepository::new();
        let boss = repo.create(new_staff("boss@store.com")).await.unwrap();
        let mut report = new_staff("report@store.com");
        report.manager_id = Some(boss.staff_id);
        let report = repo.create(report).await.unwrap();

        assert!(repo.delete(boss.staff_id).await.unwrap());
        assert!(!repo.delete(boss.staff_id).await.unwrap());

        let report = repo.find_by_id(report.staff_id).await.unwrap().unwrap();
        assert_eq!(report.manager_id, Some(boss.staff_id));
        assert!(repo.find_by_id(boss.staff_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_email_matching_folds_non_ascii_case() {
        let repo = InMemoryStaffRepository::new();
        repo.create(new_staff("Élodie@bikes.shop")).await.unwrap();

        let found = repo.find_by_email("élodie@bikes.shop").await.unwrap();
        assert_eq!(found.map(|r| r.staff_id), Some(StaffId(1)));

        let err = repo
            .create(new_staff("ÉLODIE@BIKES.SHOP"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateEmail(_)));
    }
}
