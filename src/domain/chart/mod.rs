//! Chart aggregate: scales, surfaces and the values renderers share.

pub mod bandwidth;
pub mod entities;
pub mod scale;
pub mod surface;
pub mod value_objects;

pub use bandwidth::*;
pub use entities::*;
pub use scale::*;
pub use surface::*;
pub use value_objects::*;
