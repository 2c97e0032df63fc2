pub mod discovery_service;
pub mod probe_service;

pub use discovery_service::Discovery;
pub use probe_service::probe_all;
