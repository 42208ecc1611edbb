//! In-memory storage implementation for AdLocal.
//!
//! This crate implements the repository traits defined in `adlocal-core`
//! over `RwLock`-guarded collections and contains:
//! - Repository implementations for all domain entities
//! - The seed fixtures the application boots from
//!
//! All state is volatile process memory, reseeded on each start. A
//! persistent storage crate would implement the same traits; nothing in
//! `adlocal-core` knows which one it is talking to.

pub mod ad_locations;
pub mod advertisers;
pub mod inquiries;
pub mod payments;
pub mod sales_reps;
pub mod seed;

pub use ad_locations::MemoryAdLocationRepository;
pub use advertisers::MemoryAdvertiserRepository;
pub use inquiries::MemoryInquiryRepository;
pub use payments::MemoryPaymentRepository;
pub use sales_reps::MemorySalesRepRepository;

// Re-export from adlocal-core for convenience
pub use adlocal_core::errors::{Error, Result, StoreError};
