mod repository;

pub use repository::MemoryAdLocationRepository;
