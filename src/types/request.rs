/// A single variable occurrence the host configuration system asks the
/// resolver to resolve.
///
/// The parameters are positional: the first one names the table, the second
/// one optionally names a region. The address is carried for the host
/// contract but resolution never reads it.
#[derive(Debug, Clone, Default)]
pub struct Request {
    address: Option<String>,
    params: Vec<String>,
}

impl Request {
    /// Create a new request from the ordered variable parameters.
    pub fn new<I, T>(params: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            address: None,
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the variable address the host resolved this request from.
    pub fn set_address(self, address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..self
        }
    }

    /// The variable address, when the host supplied one.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// The table name: the first parameter, when present and non-empty.
    pub fn table_name(&self) -> Option<&str> {
        self.params
            .first()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// The positional region hint: the second parameter.
    pub fn region_param(&self) -> Option<&str> {
        self.params.get(1).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_is_the_first_param() {
        let request = Request::new(["Orders", "us-east-1"]);
        assert_eq!(request.table_name(), Some("Orders"));
        assert_eq!(request.region_param(), Some("us-east-1"));
    }

    #[test]
    fn table_name_is_absent_without_params() {
        let request = Request::default();
        assert_eq!(request.table_name(), None);
        assert_eq!(request.region_param(), None);
    }

    #[test]
    fn empty_table_name_counts_as_absent() {
        let request = Request::new([""]);
        assert_eq!(request.table_name(), None);
    }

    #[test]
    fn address_is_carried() {
        let request = Request::new(["Orders"]).set_address("fetchStreamARN");
        assert_eq!(request.address(), Some("fetchStreamARN"));
    }
}
