use std::fmt::Debug;

use base64::{Engine, prelude::BASE64_STANDARD};
use http::{
    HeaderMap, HeaderName, HeaderValue,
    header::{AUTHORIZATION, InvalidHeaderValue},
};
use serde::{Deserialize, Serialize};

/// Header carrying the key for [`Authentication::ApiKey`].
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// How requests to the node are authenticated.
///
/// Public nodes usually sit behind a proxy that wants one of these; a local
/// node needs none. Deserializes from `{"type": "bearer", "token": "..."}`
/// style objects.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Authentication {
    #[default]
    None,
    Bearer {
        token: String,
    },
    ApiKey {
        key: String,
    },
    Basic {
        username: String,
        password: String,
    },
}

impl Authentication {
    pub fn bearer(token: impl Into<String>) -> Self {
        Authentication::Bearer {
            token: token.into(),
        }
    }

    pub fn api_key(key: impl Into<String>) -> Self {
        Authentication::ApiKey { key: key.into() }
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Authentication::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Headers to attach to every request. Values are marked sensitive.
    pub fn headers(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::new();
        let (name, value) = match self {
            Authentication::None => return Ok(headers),
            Authentication::Bearer { token } => (AUTHORIZATION, format!("Bearer {token}")),
            Authentication::ApiKey { key } => (API_KEY_HEADER, key.clone()),
            Authentication::Basic { username, password } => (
                AUTHORIZATION,
                format!("Basic {}", BASE64_STANDARD.encode(format!("{username}:{password}"))),
            ),
        };

        let mut value = HeaderValue::from_str(&value)?;
        value.set_sensitive(true);
        headers.insert(name, value);
        Ok(headers)
    }
}

impl Debug for Authentication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Authentication::None => write!(f, "None"),
            Authentication::Bearer { .. } => write!(f, "Bearer([redacted])"),
            Authentication::ApiKey { .. } => write!(f, "ApiKey([redacted])"),
            Authentication::Basic { username, .. } => write!(f, "Basic({username}, [redacted])"),
        }
    }
}
