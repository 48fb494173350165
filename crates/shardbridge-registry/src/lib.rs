//! # shardbridge-registry
//!
//! Registry-center abstraction and instance state service for ShardBridge.
//!
//! The routing/rewrite core needs very little from coordination: writing an
//! ephemeral "this instance is online" key and a persistent data-sources
//! root into an external hierarchical key-value store, with nothing stronger
//! than last-write-visible semantics. The store itself (ZooKeeper, etcd, or
//! similar) plugs in through [`RegistryCenter`]; a DashMap-backed in-memory
//! implementation covers embedded deployments and tests.

pub mod error;
pub mod memory;
pub mod state;

pub use error::{RegistryError, Result};
pub use memory::MemoryRegistryCenter;
pub use state::{RegistryCenter, StateNode, StateService};
