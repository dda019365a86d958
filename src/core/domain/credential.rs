//! Credential type.
//!
//! The unit exchanged with git over the credential-helper protocol.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::{ProtocolError, Result};

/// A credential request or answer, as git describes it.
///
/// Fields git did not send are `None`; a field present with an empty value is
/// kept as `Some("")` so it round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential {
    pub protocol: Option<String>,
    pub host: Option<String>,
    pub path: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub url: Option<String>,
}

/// Protocol keys in emission order.
pub const FIELDS: [&str; 6] = ["protocol", "host", "path", "username", "password", "url"];

impl Credential {
    /// Credential for a host, the common shape of a `get` request.
    pub fn for_host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..Self::default()
        }
    }

    /// Set a field by its protocol key.
    ///
    /// Returns `false` for keys this helper does not understand; the caller
    /// ignores those.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        let slot = match key {
            "protocol" => &mut self.protocol,
            "host" => &mut self.host,
            "path" => &mut self.path,
            "username" => &mut self.username,
            "password" => &mut self.password,
            "url" => &mut self.url,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Field value by protocol key.
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "protocol" => self.protocol.as_deref(),
            "host" => self.host.as_deref(),
            "path" => self.path.as_deref(),
            "username" => self.username.as_deref(),
            "password" => self.password.as_deref(),
            "url" => self.url.as_deref(),
            _ => None,
        }
    }

    /// Populated fields in emission order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        FIELDS
            .iter()
            .filter_map(move |key| self.field(key).map(|value| (*key, value)))
    }

    /// Host and username used to address the store.
    ///
    /// Explicit `host`/`username` fields win; when git only sent `url`, the
    /// missing parts come from parsing it.
    pub fn target(&self) -> Result<(String, Option<String>)> {
        let from_url = match (&self.url, &self.host) {
            (Some(raw), None) => Some(Url::parse(raw).map_err(|e| {
                ProtocolError::InvalidUrl(e.to_string())
            })?),
            (Some(raw), Some(_)) if self.username.is_none() => Url::parse(raw).ok(),
            _ => None,
        };

        let host = match (&self.host, &from_url) {
            (Some(host), _) => host.clone(),
            (None, Some(url)) => match (url.host_str(), url.port()) {
                (Some(host), Some(port)) => format!("{}:{}", host, port),
                (Some(host), None) => host.to_string(),
                (None, _) => String::new(),
            },
            (None, None) => String::new(),
        };

        if host.is_empty() {
            return Err(ProtocolError::MissingHost.into());
        }

        let username = self.username.clone().or_else(|| {
            from_url
                .as_ref()
                .map(|url| {
                    percent_decode_str(url.username())
                        .decode_utf8_lossy()
                        .into_owned()
                })
                .filter(|name| !name.is_empty())
        });

        Ok((host, username))
    }
}
