//! Mapping of plotly primitive type tags to Python type expressions.

use crate::error::UnknownTypeError;

/// The closed set of primitive value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// `data_array`, `info_array`
    Sequence,
    /// `string`, `color`, `colorscale`, `subplotid`
    Text,
    /// `enumerated`, `flaglist`, `any`
    Dynamic,
    /// `number`, `angle`
    Number,
    /// `integer`
    Integer,
    /// `boolean`
    Boolean,
}

impl PrimitiveType {
    /// Parses a plotly type tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "data_array" | "info_array" => Some(Self::Sequence),
            "string" | "color" | "colorscale" | "subplotid" => Some(Self::Text),
            "enumerated" | "flaglist" | "any" => Some(Self::Dynamic),
            "number" | "angle" => Some(Self::Number),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            _ => None,
        }
    }

    /// Returns the Python type name.
    #[must_use]
    pub const fn python_type(&self) -> &'static str {
        match self {
            Self::Sequence => "List",
            Self::Text => "str",
            Self::Dynamic => "Any",
            Self::Number => "Number",
            Self::Integer => "int",
            Self::Boolean => "bool",
        }
    }

    /// Returns the singular and plural nouns describing a value.
    #[must_use]
    pub const fn nouns(&self) -> (&'static str, &'static str) {
        match self {
            Self::Sequence => ("a list", "lists"),
            Self::Text => ("a string", "strings"),
            Self::Dynamic => ("any value", "values"),
            Self::Number => ("a number", "numbers"),
            Self::Integer => ("an integer", "integers"),
            Self::Boolean => ("a boolean", "booleans"),
        }
    }
}

/// A rendered type: the annotation plus a plain-language summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeExpr {
    /// Python type annotation.
    pub annotation: String,
    /// Plain-language description of accepted values.
    pub summary: String,
}

/// Maps type tags to Python type expressions.
pub struct TypeMapper;

impl TypeMapper {
    /// Maps a type tag, widening to "value or sequence of values" when
    /// `array_ok` is set.
    ///
    /// # Errors
    /// Returns `UnknownTypeError` for a tag outside the recognized set.
    pub fn map(tag: &str, array_ok: bool) -> Result<TypeExpr, UnknownTypeError> {
        let primitive = PrimitiveType::from_tag(tag).ok_or_else(|| UnknownTypeError {
            tag: tag.to_string(),
        })?;
        let base = primitive.python_type();
        let (one, many) = primitive.nouns();

        Ok(if array_ok {
            TypeExpr {
                annotation: format!("Union[{base}, List[{base}]]"),
                summary: format!("{one}, or an ordered sequence of {many}"),
            }
        } else {
            TypeExpr {
                annotation: base.to_string(),
                summary: one.to_string(),
            }
        })
    }
}
