use crate::domain::chart::{SurfaceKind, SurfaceSize};

/// Lifecycle events a chart reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    /// A surface reported its size; scale ranges follow before the next draw.
    Measure { kind: SurfaceKind, size: SurfaceSize },
    /// Paint one surface with the current data and scales.
    Draw { kind: SurfaceKind },
    /// The data set was replaced.
    DataChanged { candle_count: usize },
    /// Something changed; repaint everything on the next frame.
    RedrawRequested,
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish_chart_event(&self, event: ChartEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    chart_handlers: Vec<Box<dyn Fn(&ChartEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_to_chart_events<F>(&mut self, handler: F)
    where
        F: Fn(&ChartEvent) + 'static,
    {
        self.chart_handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_chart_event(&self, event: ChartEvent) {
        for handler in &self.chart_handlers {
            handler(&event);
        }
    }
}
