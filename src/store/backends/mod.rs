pub mod file;
pub mod memory;
pub mod remote;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use remote::RemoteStore;
