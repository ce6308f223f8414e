/// Output contract of the resolution operation.
///
/// `None` signals that the variable could not be resolved; the failure has
/// already been logged by then.
#[derive(Debug, Clone)]
pub struct ResolvedVariable {
    pub value: Option<String>,
}
