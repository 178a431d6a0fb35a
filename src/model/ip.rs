/// Outcome of resolving the public IP address across the configured providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpLookup {
    /// A provider answered 200 OK; holds its non-empty response body verbatim.
    Found(String),
    /// Every provider failed.
    NotFound,
}

impl IpLookup {
    /// Returns the resolved address text, if any provider succeeded.
    pub fn ip(&self) -> Option<&str> {
        match self {
            Self::Found(ip) => Some(ip),
            Self::NotFound => None,
        }
    }
}
