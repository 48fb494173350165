//! Instance state service.

use crate::error::Result;
use shardbridge_commons::InstanceId;

/// Minimal contract against the external hierarchical key-value store.
///
/// Only "last write visible to subsequent reads" is required. Ephemeral keys
/// disappear when the writing instance's session ends; persistent keys stay.
pub trait RegistryCenter: Send + Sync {
    fn persist(&self, key: &str, value: &str) -> Result<()>;

    fn persist_ephemeral(&self, key: &str, value: &str) -> Result<()>;
}

/// Builds the state paths under one named registry root.
#[derive(Debug, Clone)]
pub struct StateNode {
    name: String,
}

impl StateNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Full path of one instance's ephemeral online key.
    pub fn instances_node_path(&self, instance_id: &InstanceId) -> String {
        format!("/{}/state/instances/{}", self.name, instance_id)
    }

    /// Full path of the persistent data-sources root.
    pub fn data_sources_node_path(&self) -> String {
        format!("/{}/state/datasources", self.name)
    }
}

/// Publishes one middleware instance's liveness and the data-sources root.
///
/// The instance identity is passed in by process startup configuration; the
/// service never invents or caches a global one.
pub struct StateService<C: RegistryCenter> {
    state_node: StateNode,
    instance_id: InstanceId,
    center: C,
}

impl<C: RegistryCenter> StateService<C> {
    pub fn new(name: impl Into<String>, instance_id: InstanceId, center: C) -> Self {
        Self {
            state_node: StateNode::new(name),
            instance_id,
            center,
        }
    }

    /// Persist instance online.
    pub fn persist_instance_online(&self) -> Result<()> {
        let path = self.state_node.instances_node_path(&self.instance_id);
        self.center.persist_ephemeral(&path, "")?;
        log::debug!("registered instance online at {}", path);
        Ok(())
    }

    /// Initialize the data sources node.
    pub fn persist_data_sources_node(&self) -> Result<()> {
        self.center.persist(&self.state_node.data_sources_node_path(), "")
    }
}
