use crate::errors::Result;
use crate::sales_reps::sales_reps_model::{NewSalesRep, SalesRep, SalesRepUpdate};
use async_trait::async_trait;

/// Trait for sales representative repository operations.
#[async_trait]
pub trait SalesRepRepositoryTrait: Send + Sync {
    fn get_sales_reps(&self) -> Result<Vec<SalesRep>>;
    fn get_sales_rep(&self, id: &str) -> Result<SalesRep>;
    async fn insert_sales_rep(&self, new_rep: NewSalesRep) -> Result<SalesRep>;
    async fn update_sales_rep(&self, id: &str, update: SalesRepUpdate) -> Result<SalesRep>;
    async fn delete_sales_rep(&self, id: &str) -> Result<()>;
}

/// Trait for sales representative service operations.
#[async_trait]
pub trait SalesRepServiceTrait: Send + Sync {
    fn get_sales_reps(&self) -> Result<Vec<SalesRep>>;
    fn get_sales_rep(&self, id: &str) -> Result<SalesRep>;
    async fn add_sales_rep(&self, new_rep: NewSalesRep) -> Result<SalesRep>;
    async fn update_sales_rep(&self, id: &str, update: SalesRepUpdate) -> Result<SalesRep>;
    async fn delete_sales_rep(&self, id: &str) -> Result<()>;

    fn set_search_query(&self, query: &str);
    fn filtered_sales_reps(&self) -> Result<Vec<SalesRep>>;
}
