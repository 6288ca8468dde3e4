pub mod csv_export;
pub mod json;
pub mod pdf_export;
pub mod storage;

pub use storage::Storage;
