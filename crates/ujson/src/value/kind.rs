use core::fmt;

/// The closed set of kind tags a decoded value can carry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    Array,
    NumberInt,
    NumberUint,
    NumberFloat,
    String,
    Bool,
    Null,
}

impl Kind {
    /// True for exactly the three numeric kinds.
    pub fn is_number(self) -> bool {
        matches!(self, Kind::NumberInt | Kind::NumberUint | Kind::NumberFloat)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Object => "Object",
            Kind::Array => "Array",
            Kind::NumberInt => "NumberInt",
            Kind::NumberUint => "NumberUint",
            Kind::NumberFloat => "NumberFloat",
            Kind::String => "String",
            Kind::Bool => "Bool",
            Kind::Null => "Null",
        })
    }
}
