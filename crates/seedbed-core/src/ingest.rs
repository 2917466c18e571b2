//! Ingestion driver: submits each sample record to the store through a
//! bounded task pool, joins every task before reporting, and returns
//! outcomes sorted by id.
//!
//! Records within one kind are mutually independent (distinct ids), so
//! submission order carries no meaning. Outcome collection is unordered
//! until the final sort. No retries, no cancellation: each record is
//! attempted exactly once per run.

use crate::model::Outcome;
use crate::report::IngestReport;
use crate::sample::Dataset;
use crate::storage::Store;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

pub const DEFAULT_PARALLEL: usize = 4;

pub struct Ingestor {
    store: Store,
    parallel: usize,
}

impl Ingestor {
    pub fn new(store: Store, parallel: usize) -> Self {
        Self {
            store,
            parallel: parallel.max(1),
        }
    }

    /// Seed the full dataset, one kind at a time. Every submission task for
    /// a kind is joined before the next kind starts, so a completed run
    /// implies the hard synchronization barrier has been crossed three times.
    pub async fn run(&self, dataset: &Dataset) -> anyhow::Result<IngestReport> {
        tracing::info!(
            users = dataset.users.len(),
            products = dataset.products.len(),
            orders = dataset.orders.len(),
            parallel = self.parallel,
            "starting ingestion"
        );

        let users = self
            .submit(dataset.users.clone(), |store, u| store.insert_user(u))
            .await?;
        let products = self
            .submit(dataset.products.clone(), |store, p| store.insert_product(p))
            .await?;
        let orders = self
            .submit(dataset.orders.clone(), |store, o| store.insert_order(o))
            .await?;

        let report = IngestReport {
            users,
            products,
            orders,
        };
        tracing::info!("ingestion finished: {}", report.summary_line());
        Ok(report)
    }

    /// Submit one task per record into a semaphore-bounded pool and join
    /// them all. A panicked task becomes a failure outcome, never a crash.
    async fn submit<T>(
        &self,
        records: Vec<T>,
        insert: fn(&Store, &T) -> Outcome,
    ) -> anyhow::Result<Vec<Outcome>>
    where
        T: Send + 'static,
    {
        let sem = Arc::new(Semaphore::new(self.parallel));
        let mut join_set = JoinSet::new();

        for record in records {
            let permit = sem.clone().acquire_owned().await?;
            let store = self.store.clone();
            join_set.spawn(async move {
                let _permit = permit;
                insert(&store, &record)
            });
        }

        let mut outcomes = Vec::new();
        while let Some(res) = join_set.join_next().await {
            match res {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => outcomes.push(Outcome::failure(-1, format!("task join error: {}", e))),
            }
        }

        // Collection order tracks completion, not submission. Reports are
        // stable by id only.
        outcomes.sort_by_key(|o| o.id);
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityKind, User};
    use crate::sample;

    #[tokio::test]
    async fn concurrent_distinct_ids_all_land() {
        let store = Store::memory().unwrap();
        let ingestor = Ingestor::new(store.clone(), 8);

        let users: Vec<User> = (1..=50)
            .map(|id| User {
                id,
                name: format!("user-{}", id),
                email: format!("user{}@example.com", id),
            })
            .collect();

        let outcomes = ingestor
            .submit(users, |store, u| store.insert_user(u))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 50);
        assert!(outcomes.iter().all(|o| o.success));
        assert_eq!(store.count(EntityKind::User).unwrap(), 50);
    }

    #[tokio::test]
    async fn outcomes_are_sorted_by_id() {
        let store = Store::memory().unwrap();
        let ingestor = Ingestor::new(store, 4);

        let users: Vec<User> = [9, 3, 7, 1, 5]
            .iter()
            .map(|&id| User {
                id,
                name: "U".into(),
                email: "u@example.com".into(),
            })
            .collect();

        let outcomes = ingestor
            .submit(users, |store, u| store.insert_user(u))
            .await
            .unwrap();
        let ids: Vec<i64> = outcomes.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3, 5, 7, 9]);
    }

    #[tokio::test]
    async fn demo_dataset_end_to_end() {
        let store = Store::memory().unwrap();
        let ingestor = Ingestor::new(store.clone(), 4);
        let report = ingestor.run(&sample::demo_dataset()).await.unwrap();

        // Users: every record has a distinct id; the repeated name/email on
        // user 8 is accepted because email uniqueness is not enforced.
        assert_eq!(report.users.len(), 10);
        assert!(report.users.iter().all(|o| o.success));
        assert_eq!(store.count(EntityKind::User).unwrap(), 10);

        // Products: only the negative-price earbuds are rejected.
        let product_failures: Vec<&Outcome> =
            report.products.iter().filter(|o| !o.success).collect();
        assert_eq!(product_failures.len(), 1);
        assert_eq!(product_failures[0].id, 10);
        assert!(product_failures[0].message.contains("invalid price"));
        assert_eq!(store.count(EntityKind::Product).unwrap(), 9);

        // Orders: order 9 fails on quantity; order 8 (quantity 0) and
        // order 10 (dangling product reference) both land.
        let order_failures: Vec<&Outcome> =
            report.orders.iter().filter(|o| !o.success).collect();
        assert_eq!(order_failures.len(), 1);
        assert_eq!(order_failures[0].id, 9);
        assert!(order_failures[0].message.contains("invalid quantity"));
        assert_eq!(store.count(EntityKind::Order).unwrap(), 9);

        let stored_orders = store.fetch_orders().unwrap();
        assert!(stored_orders.iter().any(|o| o.id == 10 && o.product_id == 11));
    }

    #[tokio::test]
    async fn rerun_reports_duplicates_without_aborting() {
        let store = Store::memory().unwrap();
        let ingestor = Ingestor::new(store.clone(), 4);
        let dataset = sample::demo_dataset();

        let first = ingestor.run(&dataset).await.unwrap();
        let second = ingestor.run(&dataset).await.unwrap();

        // Everything that landed the first time is now a duplicate; the
        // validation failures fail identically.
        for (a, b) in first.users.iter().zip(second.users.iter()) {
            assert_eq!(a.id, b.id);
            assert!(!b.success);
            assert!(b.message.contains("duplicate id"), "got {:?}", b.message);
        }
        assert_eq!(store.count(EntityKind::User).unwrap(), 10);
    }
}
