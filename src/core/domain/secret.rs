//! Stored secret type.
//!
//! What the secret store holds for one credential: a password and, when
//! known, the username it belongs to.

use zeroize::Zeroize;

use crate::core::constants::LOGIN_KEYS;

/// A password with its optional login, as kept in the secret store.
#[derive(Clone, PartialEq, Eq)]
pub struct StoredSecret {
    password: String,
    username: Option<String>,
}

impl StoredSecret {
    /// Create a secret from a password and optional username
    pub fn new(password: impl Into<String>, username: Option<String>) -> Self {
        Self {
            password: password.into(),
            username,
        }
    }

    /// The stored password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The stored username, if one was recorded
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Serialize as a gopass secret body.
    ///
    /// Password on the first line, then `login: <username>` when known.
    pub fn to_body(&self) -> String {
        let mut body = format!("{}\n", self.password);
        if let Some(username) = &self.username {
            body.push_str(&format!("{}: {}\n", LOGIN_KEYS[0], username));
        }
        body
    }

    /// Parse a gopass secret body.
    ///
    /// The first line is the password. Later `key: value` lines are scanned for
    /// a login key; everything else in the body is ignored.
    pub fn from_body(body: &str) -> Self {
        let mut lines = body.lines();
        let password = lines.next().unwrap_or_default().to_string();

        let username = lines.find_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            LOGIN_KEYS
                .iter()
                .any(|candidate| key.eq_ignore_ascii_case(candidate))
                .then(|| value.trim().to_string())
                .filter(|value| !value.is_empty())
        });

        Self { password, username }
    }
}

impl std::fmt::Debug for StoredSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredSecret")
            .field("password", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}

impl Drop for StoredSecret {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}
