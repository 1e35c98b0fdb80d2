mod fake_converter;
mod fake_scanner;
mod memory_history;
mod memory_logger;

pub use fake_converter::FakeConverter;
pub use fake_scanner::FakeScanner;
pub use memory_history::MemoryHistory;
pub use memory_logger::MemoryLogger;
