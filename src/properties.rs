use async_trait::async_trait;

/// Capability for reading configuration properties from the enclosing
/// deployment configuration while a variable is being resolved.
///
/// The host configuration system implements this so the resolver can read
/// values it does not own, such as the region configured on the deployment
/// provider. A lookup returns `None` when the property is absent.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Resolve a configuration property by its path segments.
    async fn resolve_property(&self, path: &[&str]) -> Option<String>;
}

/// A [`PropertySource`] for hosts without a configuration tree.
///
/// Every lookup is absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProperties;

#[async_trait]
impl PropertySource for NoProperties {
    async fn resolve_property(&self, _path: &[&str]) -> Option<String> {
        None
    }
}
