mod kind;
mod number;

use core::fmt;

use ahash::AHashMap;

pub use kind::Kind;
pub use number::Number;

/// An immutable, fully typed JSON value.
///
/// Produced by [`decode`](crate::decode) or
/// [`decode_canonical`](crate::decode_canonical); the tree cannot be mutated
/// afterwards. Containers exclusively own their children, so every tree is
/// safe to share across threads once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Any {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Box<[Any]>),
    Object(Box<AHashMap<String, Any>>),
}

impl Eq for Any {}

const _: () = const {
    assert!(std::mem::size_of::<Any>() <= 32);
};

impl Any {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Any::Null => Kind::Null,
            Any::Bool(_) => Kind::Bool,
            Any::Number(Number::Int(_)) => Kind::NumberInt,
            Any::Number(Number::Uint(_)) => Kind::NumberUint,
            Any::Number(Number::Float(_)) => Kind::NumberFloat,
            Any::String(_) => Kind::String,
            Any::Array(_) => Kind::Array,
            Any::Object(_) => Kind::Object,
        }
    }

    /// Returns the underlying map if this value is an object.
    pub fn as_object(&self) -> Option<&AHashMap<String, Any>> {
        if let Any::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Returns the underlying slice if this value is an array.
    pub fn as_array(&self) -> Option<&[Any]> {
        if let Any::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Returns the number if this value is numeric of any kind.
    pub fn as_number(&self) -> Option<Number> {
        if let Any::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    /// Returns the integer if this value is a signed-integer number.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// Returns the integer if this value is an unsigned-integer number.
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    /// Returns the float if this value is a floating-point number.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().and_then(Number::as_f64)
    }

    /// Returns the string contents if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        if let Any::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Any::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Any::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Any::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Any::Array(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Any::String(_))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Any::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        self.kind().is_number()
    }

    /// Looks up a key in an object. Returns `None` for missing keys and for
    /// non-object values alike.
    pub fn get(&self, key: &str) -> Option<&Any> {
        self.as_object().and_then(|map| map.get(key))
    }
}

/// Human-readable rendering: `Null` formats to the empty string, `String`
/// to its raw contents, everything else to its JSON encoding.
impl fmt::Display for Any {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Any::Null => Ok(()),
            Any::String(s) => f.write_str(s),
            other => match serde_json::to_string(other) {
                Ok(encoded) => f.write_str(&encoded),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Any, Kind, Number};
    use test_case::test_case;

    fn sample_values() -> Vec<Any> {
        vec![
            Any::Null,
            Any::Bool(true),
            Any::Number(Number::Int(-3)),
            Any::Number(Number::Uint(u64::MAX)),
            Any::Number(Number::Float(0.5)),
            Any::String("x".into()),
            Any::Array(Box::new([Any::Null])),
            Any::Object(Box::default()),
        ]
    }

    #[test_case(Kind::Null)]
    #[test_case(Kind::Bool)]
    #[test_case(Kind::NumberInt)]
    #[test_case(Kind::NumberUint)]
    #[test_case(Kind::NumberFloat)]
    #[test_case(Kind::String)]
    #[test_case(Kind::Array)]
    #[test_case(Kind::Object)]
    fn downcast_matches_kind_exactly(kind: Kind) {
        for value in sample_values() {
            let expected = value.kind() == kind;
            let matched = match kind {
                Kind::Null => value.is_null(),
                Kind::Bool => value.as_bool().is_some(),
                Kind::NumberInt => value.as_i64().is_some(),
                Kind::NumberUint => value.as_u64().is_some(),
                Kind::NumberFloat => value.as_f64().is_some(),
                Kind::String => value.as_str().is_some(),
                Kind::Array => value.as_array().is_some(),
                Kind::Object => value.as_object().is_some(),
            };
            assert_eq!(matched, expected, "{value:?} vs {kind:?}");
        }
    }

    #[test]
    fn get_on_non_object_is_none() {
        assert!(Any::Array(Box::new([])).get("key").is_none());
        assert!(Any::Null.get("key").is_none());
    }

    #[test]
    fn display_renders() {
        assert_eq!(Any::Null.to_string(), "");
        assert_eq!(Any::String("a \"b\"".into()).to_string(), "a \"b\"");
        assert_eq!(Any::Bool(false).to_string(), "false");
        assert_eq!(Any::Number(Number::Float(-122.3959)).to_string(), "-122.3959");
        assert_eq!(
            Any::Array(Box::new([Any::Null, Any::Bool(true)])).to_string(),
            "[null,true]"
        );
    }
}
