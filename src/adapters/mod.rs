// Adapters layer: concrete implementations of the domain ports (storage, connectivity, http).

pub mod connectivity;
pub mod http;
pub mod storage;

pub use connectivity::{ProbeConnectivity, StaticConnectivity};
pub use http::{ApiClient, HttpClients};
pub use storage::{FileStore, MemoryStore};
