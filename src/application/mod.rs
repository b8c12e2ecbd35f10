//! Application layer: wires domain data and renderers to surfaces.

pub mod coordinator;
pub mod use_cases;

pub use coordinator::{ChartCoordinator, ChartSurfaces, RedrawReport};
pub use use_cases::GenerateDataUseCase;
