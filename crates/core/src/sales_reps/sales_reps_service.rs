use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;

use super::sales_reps_model::{NewSalesRep, SalesRep, SalesRepUpdate};
use super::sales_reps_traits::{SalesRepRepositoryTrait, SalesRepServiceTrait};

/// Service for managing sales representatives.
pub struct SalesRepService {
    sales_rep_repository: Arc<dyn SalesRepRepositoryTrait>,
    search_query: RwLock<String>,
}

impl SalesRepService {
    pub fn new(sales_rep_repository: Arc<dyn SalesRepRepositoryTrait>) -> Self {
        SalesRepService {
            sales_rep_repository,
            search_query: RwLock::new(String::new()),
        }
    }
}

#[async_trait]
impl SalesRepServiceTrait for SalesRepService {
    fn get_sales_reps(&self) -> Result<Vec<SalesRep>> {
        self.sales_rep_repository.get_sales_reps()
    }

    fn get_sales_rep(&self, id: &str) -> Result<SalesRep> {
        self.sales_rep_repository.get_sales_rep(id)
    }

    async fn add_sales_rep(&self, new_rep: NewSalesRep) -> Result<SalesRep> {
        new_rep.validate()?;
        let rep = self.sales_rep_repository.insert_sales_rep(new_rep).await?;
        debug!("Registered sales rep {}", rep.id);
        Ok(rep)
    }

    async fn update_sales_rep(&self, id: &str, update: SalesRepUpdate) -> Result<SalesRep> {
        self.sales_rep_repository.update_sales_rep(id, update).await
    }

    async fn delete_sales_rep(&self, id: &str) -> Result<()> {
        self.sales_rep_repository.delete_sales_rep(id).await
    }

    fn set_search_query(&self, query: &str) {
        *self.search_query.write().unwrap() = query.to_string();
    }

    fn filtered_sales_reps(&self) -> Result<Vec<SalesRep>> {
        let query = self.search_query.read().unwrap().clone();
        Ok(self
            .sales_rep_repository
            .get_sales_reps()?
            .into_iter()
            .filter(|rep| rep.matches_query(&query))
            .collect())
    }
}
