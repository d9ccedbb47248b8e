use core::fmt;
use std::hash::{Hash, Hasher};

/// A JSON number with its decoded representation kept intact.
///
/// The kind is part of the number's identity: `Int(1)` and `Uint(1)` are
/// distinct values even though they denote the same mathematical number.
#[derive(Debug, Copy, Clone)]
pub enum Number {
    /// An integral literal that fits `i64`.
    Int(i64),
    /// A non-negative integral literal above `i64::MAX`.
    Uint(u64),
    /// A literal carrying a fraction or exponent, or one that fits neither
    /// integer width.
    Float(f64),
}

impl Number {
    pub fn as_i64(self) -> Option<i64> {
        if let Number::Int(i) = self {
            Some(i)
        } else {
            None
        }
    }

    pub fn as_u64(self) -> Option<u64> {
        if let Number::Uint(u) = self {
            Some(u)
        } else {
            None
        }
    }

    pub fn as_f64(self) -> Option<f64> {
        if let Number::Float(f) = self {
            Some(f)
        } else {
            None
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Uint(n) => write!(f, "{n}"),
            // Matches the JSON encoding, including exponent notation for
            // large magnitudes.
            Number::Float(n) => match serde_json::to_string(n) {
                Ok(repr) => f.write_str(&repr),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::Uint(a), Number::Uint(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, h: &mut H) {
        match *self {
            Number::Int(i) => i.hash(h),
            Number::Uint(u) => u.hash(h),
            Number::Float(f) => {
                if f == 0.0f64 {
                    0.0f64.to_bits().hash(h);
                } else {
                    f.to_bits().hash(h);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Number;

    #[test]
    fn kinds_compare_disjointly() {
        assert_ne!(Number::Int(1), Number::Uint(1));
        assert_ne!(Number::Int(1), Number::Float(1.0));
        assert_eq!(Number::Int(1), Number::Int(1));
    }

    #[test]
    fn display_matches_json_encoding() {
        assert_eq!(Number::Int(-7).to_string(), "-7");
        assert_eq!(Number::Uint(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(Number::Float(37.7668).to_string(), "37.7668");
    }
}
