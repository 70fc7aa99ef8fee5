//! Names derived from schema names.
//!
//! Generated code refers to validator classes and facade methods purely by
//! derived name; there is no lookup table on either side.

use plotgen_schema::naming::to_pascal_case;

/// Returns the validator class name for a property.
///
/// The rule is `PascalCase(property) + "Validator"`: `marker` maps to
/// `MarkerValidator`, `error_x` to `ErrorXValidator`, `dimensions` to
/// `DimensionsValidator`.
#[must_use]
pub fn validator_class_name(property: &str) -> String {
    format!("{}Validator", to_pascal_case(property))
}

/// Returns the facade method name for a top-level type.
#[must_use]
pub fn facade_method_name(prefix: &str, ident: &str) -> String {
    format!("{prefix}{ident}")
}

/// Returns the shadow field name backing a nested compound property.
#[must_use]
pub fn shadow_field(property: &str) -> String {
    format!("_{property}")
}

/// Returns an import alias in the given namespace.
#[must_use]
pub fn alias(prefix: &str, name: &str) -> String {
    format!("{prefix}{name}")
}
