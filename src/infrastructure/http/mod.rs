//! HTTP Implementations
//!
//! Concrete implementations of the RemoteInvoker port.

mod invoker;

pub use invoker::HttpInvoker;
