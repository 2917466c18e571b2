use crate::model::Outcome;
use serde::{Deserialize, Serialize};

/// Sorted per-record outcomes for one full ingestion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    pub users: Vec<Outcome>,
    pub products: Vec<Outcome>,
    pub orders: Vec<Outcome>,
}

impl IngestReport {
    /// One-line summary suitable for a log footer.
    pub fn summary_line(&self) -> String {
        let count = |v: &[Outcome]| {
            let ok = v.iter().filter(|o| o.success).count();
            (ok, v.len() - ok)
        };
        let (u_ok, u_fail) = count(&self.users);
        let (p_ok, p_fail) = count(&self.products);
        let (o_ok, o_fail) = count(&self.orders);
        format!(
            "users: {} inserted, {} failed | products: {} inserted, {} failed | orders: {} inserted, {} failed",
            u_ok, u_fail, p_ok, p_fail, o_ok, o_fail
        )
    }
}
