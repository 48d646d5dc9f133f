pub mod color;
pub mod ids;
pub mod note;
pub mod property;

pub use color::Color;
pub use ids::{PropertyId, PropertyNamespace};
pub use note::NoteEntry;
pub use property::{GENERIC_OBJECT_REPR, PropertyValue};
