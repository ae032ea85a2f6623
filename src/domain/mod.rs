//! Domain Layer
//!
//! The core of ferry: what gets packed, what the remote script does and
//! which capabilities the deployment needs, without touching I/O.
//!
//! ## Structure
//!
//! - `entities/` - Archive, BootstrapScript, ExecutionLog
//! - `value_objects/` - PurgePattern, ExcludePatterns
//! - `services/` - Escaping, purge decisions, script rendering
//! - `ports/` - Capability traits implemented by infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
