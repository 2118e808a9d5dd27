use serde::{Serialize, ser::SerializeMap};

use crate::{
    errors::{Error, Result},
    types::AnyJson,
};

const ACTION: &str = "action";

/// A node RPC request: `{"action": "...", ...params}`.
///
/// Parameters whose value serializes to `null` are dropped, so optional
/// arguments that are `None` never reach the node.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcRequest {
    action: String,
    params: serde_json::Map<String, AnyJson>,
}

impl RpcRequest {
    pub fn new(action: impl Into<String>) -> Self {
        RpcRequest {
            action: action.into(),
            params: serde_json::Map::new(),
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn params(&self) -> &serde_json::Map<String, AnyJson> {
        &self.params
    }

    /// Adds a single parameter. `action` is rejected, it is set by
    /// [`RpcRequest::new`].
    pub fn param<V: Serialize>(mut self, key: &str, value: V) -> Result<Self> {
        check_key(key)?;
        let value = serde_json::to_value(value)?;
        if !value.is_null() {
            self.params.insert(key.to_string(), value);
        }
        Ok(self)
    }

    /// Merges every field of an options struct into the parameters.
    pub fn extend<P: Serialize>(mut self, options: &P) -> Result<Self> {
        match serde_json::to_value(options)? {
            AnyJson::Object(map) => {
                map.keys().try_for_each(|key| check_key(key))?;
                self.params
                    .extend(map.into_iter().filter(|(_, value)| !value.is_null()));
            }
            AnyJson::Null => {}
            other => {
                return Err(Error::SerdeJsonError(serde::ser::Error::custom(format!(
                    "request options must serialize to an object, got {other}"
                ))));
            }
        }
        Ok(self)
    }
}

impl Serialize for RpcRequest {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.params.len() + 1))?;
        map.serialize_entry(ACTION, &self.action)?;
        for (key, value) in &self.params {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn check_key(key: &str) -> Result<()> {
    if key == ACTION {
        return Err(Error::ReservedParameter(key.to_string()));
    }
    Ok(())
}

/// Returns the message of a node-level failure (`{"error": "..."}`), if any.
pub fn node_error(response: &AnyJson) -> Option<String> {
    response.get("error").map(|error| match error {
        AnyJson::String(message) => message.clone(),
        other => other.to_string(),
    })
}
