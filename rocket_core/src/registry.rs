//! # Preset Registry
//!
//! Read-only size presets for rail hardware and launch lugs. The tables
//! are initialized once at process start and never mutated; consumers
//! take `&PresetRegistry` explicitly so tests can inject their own.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::registry;
//!
//! let presets = registry::presets();
//! let button = presets.rail_button("1010").unwrap();
//! assert!(button.outer_diameter_mm > button.inner_diameter_mm);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Standard rail-button dimensions for a named rail profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailButtonPreset {
    pub name: &'static str,
    pub outer_diameter_mm: f64,
    pub inner_diameter_mm: f64,
    pub top_thickness_mm: f64,
    pub base_thickness_mm: f64,
    pub total_thickness_mm: f64,
}

/// Standard launch-lug dimensions for a named launch rod size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchLugPreset {
    pub name: &'static str,
    pub inner_diameter_mm: f64,
    pub outer_diameter_mm: f64,
    pub length_mm: f64,
}

/// The process-wide read-only preset tables.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    rail_buttons: Vec<RailButtonPreset>,
    launch_lugs: Vec<LaunchLugPreset>,
}

impl PresetRegistry {
    /// Build a registry from explicit tables (used by tests)
    pub fn with_presets(
        rail_buttons: Vec<RailButtonPreset>,
        launch_lugs: Vec<LaunchLugPreset>,
    ) -> Self {
        Self {
            rail_buttons,
            launch_lugs,
        }
    }

    /// Look up a rail-button preset by rail profile name
    pub fn rail_button(&self, name: &str) -> Option<&RailButtonPreset> {
        self.rail_buttons.iter().find(|p| p.name == name)
    }

    /// Look up a launch-lug preset by rod size name
    pub fn launch_lug(&self, name: &str) -> Option<&LaunchLugPreset> {
        self.launch_lugs.iter().find(|p| p.name == name)
    }

    pub fn rail_buttons(&self) -> &[RailButtonPreset] {
        &self.rail_buttons
    }

    pub fn launch_lugs(&self) -> &[LaunchLugPreset] {
        &self.launch_lugs
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self {
            // Delrin buttons for the common extruded launch rails
            rail_buttons: vec![
                RailButtonPreset {
                    name: "1010",
                    outer_diameter_mm: 9.62,
                    inner_diameter_mm: 5.44,
                    top_thickness_mm: 1.98,
                    base_thickness_mm: 1.98,
                    total_thickness_mm: 7.62,
                },
                RailButtonPreset {
                    name: "1515",
                    outer_diameter_mm: 13.87,
                    inner_diameter_mm: 8.18,
                    top_thickness_mm: 2.18,
                    base_thickness_mm: 2.18,
                    total_thickness_mm: 8.81,
                },
            ],
            // Paper lugs for the standard launch rod sizes
            launch_lugs: vec![
                LaunchLugPreset {
                    name: "1/8\"",
                    inner_diameter_mm: 3.56,
                    outer_diameter_mm: 4.06,
                    length_mm: 25.4,
                },
                LaunchLugPreset {
                    name: "3/16\"",
                    inner_diameter_mm: 5.16,
                    outer_diameter_mm: 5.74,
                    length_mm: 50.8,
                },
                LaunchLugPreset {
                    name: "1/4\"",
                    inner_diameter_mm: 6.78,
                    outer_diameter_mm: 7.37,
                    length_mm: 50.8,
                },
            ],
        }
    }
}

/// The built-in registry, initialized once and safe for unsynchronized
/// concurrent reads.
pub fn presets() -> &'static PresetRegistry {
    static REGISTRY: Lazy<PresetRegistry> = Lazy::new(PresetRegistry::default);
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let registry = presets();
        assert!(registry.rail_button("1010").is_some());
        assert!(registry.rail_button("2020").is_none());
        assert!(registry.launch_lug("1/8\"").is_some());
    }

    #[test]
    fn test_presets_are_consistent() {
        for button in presets().rail_buttons() {
            assert!(button.outer_diameter_mm > button.inner_diameter_mm);
            assert!(
                button.top_thickness_mm + button.base_thickness_mm <= button.total_thickness_mm
            );
        }
        for lug in presets().launch_lugs() {
            assert!(lug.outer_diameter_mm > lug.inner_diameter_mm);
            assert!(lug.length_mm > 0.0);
        }
    }

    #[test]
    fn test_injected_registry() {
        let registry = PresetRegistry::with_presets(
            vec![RailButtonPreset {
                name: "test",
                outer_diameter_mm: 10.0,
                inner_diameter_mm: 5.0,
                top_thickness_mm: 2.0,
                base_thickness_mm: 2.0,
                total_thickness_mm: 8.0,
            }],
            vec![],
        );
        assert!(registry.rail_button("test").is_some());
        assert!(registry.rail_button("1010").is_none());
    }
}
