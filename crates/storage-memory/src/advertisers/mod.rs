mod repository;

pub use repository::MemoryAdvertiserRepository;
