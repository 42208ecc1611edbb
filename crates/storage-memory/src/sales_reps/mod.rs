mod repository;

pub use repository::MemorySalesRepRepository;
