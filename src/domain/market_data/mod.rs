//! Market data aggregate: value objects, candle entities and the synthetic
//! data generator.

pub mod entities;
pub mod generator;
pub mod value_objects;

pub use entities::*;
pub use generator::*;
pub use value_objects::*;
