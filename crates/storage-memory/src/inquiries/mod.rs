mod repository;

pub use repository::MemoryInquiryRepository;
