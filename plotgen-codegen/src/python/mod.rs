//! Python code generation modules.

pub mod classes;
pub mod docs;
pub mod facade;
pub mod modules;
pub mod naming;
pub mod params;
pub mod properties;
pub mod types;

pub use classes::ClassGenerator;
pub use docs::DocBlockBuilder;
pub use facade::FacadeGenerator;
pub use modules::ModuleGenerator;
pub use params::parameter_list;
pub use properties::PropertyEmitter;
pub use types::{PrimitiveType, TypeExpr, TypeMapper};
