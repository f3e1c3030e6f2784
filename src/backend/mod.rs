mod json_store;
mod interface;
mod remote;

pub use interface::{LedgerBackend, Result, BackendError};
pub use json_store::JsonStore;
pub use remote::RemoteStub;
