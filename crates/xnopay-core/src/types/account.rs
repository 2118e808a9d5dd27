use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

const ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

const PREFIXES: [&str; 2] = ["nano_", "xrb_"];

/// Characters encoding the public key: 4 zero padding bits + 256 key bits.
const KEY_CHARS: usize = 52;
/// Characters encoding the 40-bit checksum.
const CHECKSUM_CHARS: usize = 8;

/// A Nano account address, e.g. `nano_3t6k35gi95xu6tergt6p69ck76ogmitsa8mnijtpxm9fkcm736xtoncuohr3`.
///
/// Parsing checks the prefix, the length, the alphabet and the key padding.
/// The Blake2b checksum is kept as given and not recomputed here; ask the
/// node with `validate_account_number` when that matters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Account {
    public_key: [u8; 32],
    checksum: [u8; 5],
}

impl Account {
    pub fn public_key(&self) -> &[u8; 32] {
        &self.public_key
    }

    /// Uppercase hex of the public key, the form the node uses for keys.
    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(self.public_key)
    }
}

fn alphabet_index(c: u8) -> Option<u8> {
    ALPHABET.iter().position(|&a| a == c).map(|i| i as u8)
}

fn encode_base32(bytes: &[u8], padding_bits: u32, out: &mut String) {
    let mut acc: u32 = 0;
    let mut bits = padding_bits;
    for &byte in bytes {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((acc >> bits) & 0x1f) as usize] as char);
        }
        acc &= (1 << bits) - 1;
    }
}

/// Decodes `encoded` (already known to be in the alphabet) into exactly `N`
/// bytes. The first `padding_bits` bits must be zero.
fn decode_base32<const N: usize>(encoded: &[u8], padding_bits: u32) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut written = 0;
    for (i, &c) in encoded.iter().enumerate() {
        let value = u32::from(alphabet_index(c)?);
        if i == 0 {
            if value >> (5 - padding_bits) != 0 {
                return None;
            }
            acc = value;
            bits = 5 - padding_bits;
        } else {
            acc = (acc << 5) | value;
            bits += 5;
        }
        while bits >= 8 {
            bits -= 8;
            *out.get_mut(written)? = (acc >> bits) as u8;
            written += 1;
            acc &= (1 << bits) - 1;
        }
    }
    (written == N && bits == 0).then_some(out)
}

impl FromStr for Account {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let body = PREFIXES
            .iter()
            .find_map(|prefix| s.strip_prefix(prefix))
            .ok_or_else(|| Error::account(s, "missing nano_ or xrb_ prefix"))?
            .as_bytes();

        if body.len() != KEY_CHARS + CHECKSUM_CHARS {
            return Err(Error::account(s, "expected 60 characters after the prefix"));
        }
        if body.iter().any(|&c| alphabet_index(c).is_none()) {
            return Err(Error::account(s, "character outside the nano base32 alphabet"));
        }

        let (key, checksum) = body.split_at(KEY_CHARS);
        let public_key = decode_base32::<32>(key, 4)
            .ok_or_else(|| Error::account(s, "public key padding bits are set"))?;
        let checksum = decode_base32::<5>(checksum, 0)
            .ok_or_else(|| Error::account(s, "malformed checksum"))?;

        Ok(Account {
            public_key,
            checksum,
        })
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut encoded = String::with_capacity(PREFIXES[0].len() + KEY_CHARS + CHECKSUM_CHARS);
        encoded.push_str(PREFIXES[0]);
        encode_base32(&self.public_key, 4, &mut encoded);
        encode_base32(&self.checksum, 0, &mut encoded);
        f.write_str(&encoded)
    }
}

impl Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Account({self})")
    }
}

impl Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Account {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Account::from_str(&s).map_err(serde::de::Error::custom)
    }
}
