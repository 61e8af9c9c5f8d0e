//! Track colors for timeline bars.
//!
//! Constructed once at application start and passed by reference to
//! consumers; user overrides persist through the injected key-value
//! store, so the storage medium is swappable and testable.

use prodline_core::store::KeyValueStore;
use prodline_core::FactoryType;

/// Default bar color per factory track.
pub fn default_color(factory_type: FactoryType) -> &'static str {
    match factory_type {
        FactoryType::Manufacturing => "#3498db",
        FactoryType::Container => "#9b59b6",
        FactoryType::Packaging => "#f39c12",
    }
}

/// Per-track bar colors with persisted overrides.
#[derive(Clone, Debug)]
pub struct TrackPalette<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TrackPalette<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The effective color: a stored override, or the track default.
    pub fn color_for(&self, factory_type: FactoryType) -> String {
        self.store
            .get(&key(factory_type))
            .unwrap_or_else(|| default_color(factory_type).to_owned())
    }

    pub fn set_color(&mut self, factory_type: FactoryType, color: &str) {
        self.store.set(&key(factory_type), color);
    }

    /// Drop every override, restoring the defaults.
    pub fn reset(&mut self) {
        self.store.clear();
    }
}

fn key(factory_type: FactoryType) -> String {
    format!("track.color.{}", factory_type.as_str().to_lowercase())
}
