mod repository;

pub use repository::MemoryPaymentRepository;
