use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use adlocal_core::errors::{Error, Result, StoreError};
use adlocal_core::payments::{
    Payment, PaymentRepositoryTrait, PaymentStatusHistory, PaymentUpdate,
};
use async_trait::async_trait;
use chrono::Utc;

/// Payments and their history log behind one lock, so the status
/// transition write mutates both without any observable interleaving.
struct PaymentState {
    payments: Vec<Payment>,
    history: Vec<PaymentStatusHistory>,
}

pub struct MemoryPaymentRepository {
    state: RwLock<PaymentState>,
}

impl MemoryPaymentRepository {
    pub fn new(payments: Vec<Payment>, history: Vec<PaymentStatusHistory>) -> Self {
        MemoryPaymentRepository {
            state: RwLock::new(PaymentState { payments, history }),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Boots from the bundled seed fixtures.
    pub fn seeded() -> Self {
        let (payments, history) = crate::seed::seed_payments();
        Self::new(payments, history)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, PaymentState>> {
        self.state
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, PaymentState>> {
        self.state
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()).into())
    }
}

#[async_trait]
impl PaymentRepositoryTrait for MemoryPaymentRepository {
    fn get_payments(&self) -> Result<Vec<Payment>> {
        Ok(self.read()?.payments.clone())
    }

    fn get_payment(&self, id: &str) -> Result<Payment> {
        self.read()?
            .payments
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("payment {}", id)))
    }

    fn get_history(&self, payment_id: &str) -> Result<Vec<PaymentStatusHistory>> {
        Ok(self
            .read()?
            .history
            .iter()
            .filter(|h| h.payment_id == payment_id)
            .cloned()
            .collect())
    }

    async fn update_payment(&self, id: &str, update: PaymentUpdate) -> Result<Payment> {
        let mut state = self.write()?;
        let payment = state
            .payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::not_found(format!("payment {}", id)))?;
        payment.apply_update(update, Utc::now());
        Ok(payment.clone())
    }

    async fn transition_status(&self, entry: PaymentStatusHistory) -> Result<Payment> {
        let mut state = self.write()?;
        let payment = state
            .payments
            .iter_mut()
            .find(|p| p.id == entry.payment_id)
            .ok_or_else(|| Error::not_found(format!("payment {}", entry.payment_id)))?;
        payment.apply_transition(&entry);
        let updated = payment.clone();
        state.history.push(entry);
        Ok(updated)
    }

    async fn delete_payment(&self, id: &str) -> Result<usize> {
        let mut state = self.write()?;
        let before = state.payments.len();
        state.payments.retain(|p| p.id != id);
        if state.payments.len() == before {
            return Err(Error::not_found(format!("payment {}", id)));
        }
        let history_before = state.history.len();
        state.history.retain(|h| h.payment_id != id);
        Ok(history_before - state.history.len())
    }
}
