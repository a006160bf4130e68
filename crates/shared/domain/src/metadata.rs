//! Request provenance carried alongside authentication attempts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Client user-agent header, unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserAgent(String);

impl UserAgent {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client network address as reported by the transport, unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientIp(String);

impl ClientIp {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// User agent and client address of a request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    user_agent: UserAgent,
    client_ip: ClientIp,
}

impl UserMetadata {
    pub fn new(user_agent: UserAgent, client_ip: ClientIp) -> Self {
        Self {
            user_agent,
            client_ip,
        }
    }

    pub fn user_agent(&self) -> &UserAgent {
        &self.user_agent
    }

    pub fn client_ip(&self) -> &ClientIp {
        &self.client_ip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_carries_values() {
        let metadata = UserMetadata::new(UserAgent::new("curl/8.5"), ClientIp::new("10.0.0.7"));

        assert_eq!(metadata.user_agent().as_str(), "curl/8.5");
        assert_eq!(metadata.client_ip().as_str(), "10.0.0.7");
    }

    #[test]
    fn test_metadata_accepts_anything() {
        let metadata = UserMetadata::new(UserAgent::new(""), ClientIp::new("not an ip"));
        assert_eq!(metadata.client_ip().to_string(), "not an ip");
    }
}
