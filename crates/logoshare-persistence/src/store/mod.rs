pub mod atomic_writer;
pub mod backend_store;
pub mod json_file_store;
pub mod memory_store;

pub use atomic_writer::AtomicWriter;
pub use backend_store::{BackendLogoStore, WriteMode};
pub use json_file_store::{JsonEnvelope, JsonFileStore};
pub use memory_store::{generate_local_id, LocalLogoStore};
