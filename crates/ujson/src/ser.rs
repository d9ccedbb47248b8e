use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{error::EncodeError, Any, Number};

impl Any {
    /// Re-encodes the value and its subtree as JSON bytes.
    ///
    /// Object keys are emitted in byte-lexicographic order so that equal
    /// trees always produce identical bytes, which is what makes canonical
    /// array ordering deterministic across independently produced
    /// documents.
    ///
    /// # Errors
    /// Propagates any underlying serializer error. Trees built by
    /// [`decode`](crate::decode) always encode successfully.
    pub fn to_json(&self) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec(self).map_err(EncodeError::new)
    }
}

impl Serialize for Any {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Any::Null => serializer.serialize_unit(),
            Any::Bool(b) => serializer.serialize_bool(*b),
            Any::Number(n) => n.serialize(serializer),
            Any::String(s) => serializer.serialize_str(s),
            Any::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Any::Object(map) => {
                let mut entries: Vec<(&String, &Any)> = map.iter().collect();
                entries.sort_unstable_by(|(a, _), (b, _)| a.as_bytes().cmp(b.as_bytes()));
                let mut out = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Number::Int(i) => serializer.serialize_i64(i),
            Number::Uint(u) => serializer.serialize_u64(u),
            Number::Float(f) => serializer.serialize_f64(f),
        }
    }
}
