use serde::{Deserialize, Deserializer, de::DeserializeOwned};

pub type Record<V> = std::collections::HashMap<String, V>;

pub type AnyJson = serde_json::Value;

/// Scalar shapes the node uses interchangeably for numbers and flags.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Str(String),
    U64(u64),
    I64(i64),
    Bool(bool),
}

/// Numbers the node sends as decimal strings (`"block_count": "42"`).
///
/// Serializes as a string and accepts either a string or a JSON integer.
pub mod string_number {
    use std::{fmt::Display, str::FromStr};

    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::Lenient;

    pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Display,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let raw = match Lenient::deserialize(deserializer)? {
            Lenient::Str(s) => s,
            Lenient::U64(v) => v.to_string(),
            Lenient::I64(v) => v.to_string(),
            Lenient::Bool(b) => return Err(D::Error::custom(format!("expected a number, got {b}"))),
        };
        raw.parse().map_err(D::Error::custom)
    }

    pub mod option {
        use std::{fmt::Display, str::FromStr};

        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        use super::super::Lenient;

        pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
            T: Display,
        {
            match value {
                Some(v) => serializer.collect_str(v),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
        where
            D: Deserializer<'de>,
            T: FromStr,
            T::Err: Display,
        {
            let raw = match Option::<Lenient>::deserialize(deserializer)? {
                None => return Ok(None),
                Some(Lenient::Str(s)) if s.is_empty() => return Ok(None),
                Some(Lenient::Str(s)) => s,
                Some(Lenient::U64(v)) => v.to_string(),
                Some(Lenient::I64(v)) => v.to_string(),
                Some(Lenient::Bool(b)) => {
                    return Err(D::Error::custom(format!("expected a number, got {b}")));
                }
            };
            raw.parse().map(Some).map_err(D::Error::custom)
        }
    }
}

/// Flags the node sends as `"true"`/`"false"` or `"1"`/`"0"`.
pub mod string_bool {
    use serde::{Deserialize, Deserializer, de::Error};

    use super::Lenient;

    fn parse<E: Error>(value: Lenient) -> Result<bool, E> {
        match value {
            Lenient::Bool(b) => Ok(b),
            Lenient::U64(1) => Ok(true),
            Lenient::U64(0) => Ok(false),
            Lenient::Str(s) => match s.as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                other => Err(E::custom(format!("expected a boolean flag, got '{other}'"))),
            },
            _ => Err(E::custom("expected a boolean flag")),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse(Lenient::deserialize(deserializer)?)
    }

    pub mod option {
        use serde::{Deserialize, Deserializer};

        use super::super::Lenient;

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<Lenient>::deserialize(deserializer)?
                .map(super::parse)
                .transpose()
        }
    }
}

/// The node answers with `""` instead of an empty list or map when there is
/// nothing to report. Decodes that as `T::default()`.
pub fn empty_string_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    match AnyJson::deserialize(deserializer)? {
        AnyJson::String(s) if s.is_empty() => Ok(T::default()),
        AnyJson::Null => Ok(T::default()),
        value => T::deserialize(value).map_err(serde::de::Error::custom),
    }
}
