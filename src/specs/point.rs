//! # Point Specs
//!
//! Marker options for plot styles that draw points.

use serde::{Deserialize, Serialize};

use super::{Specs, join_tokens};
use crate::gnuplot::format::number;

/// Point (marker) options of a plot element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointSpecs {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    interval: Option<i32>,
}

impl PointSpecs {
    /// Create point specs with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured point size, if any.
    pub fn size(&self) -> Option<f64> {
        self.size
    }
}

impl Specs for PointSpecs {
    fn repr(&self) -> String {
        join_tokens(&[
            self.kind.map(|v| format!("pt {}", v)).unwrap_or_default(),
            self.size
                .map(|v| format!("ps {}", number(v)))
                .unwrap_or_default(),
            self.interval.map(|v| format!("pi {}", v)).unwrap_or_default(),
        ])
    }
}

/// Capability trait: builders that embed [`PointSpecs`].
pub trait PointSpecsOf: Sized {
    /// Access the embedded point specs.
    fn point_specs(&self) -> &PointSpecs;

    /// Mutable access to the embedded point specs.
    fn point_specs_mut(&mut self) -> &mut PointSpecs;

    /// Set the marker type.
    fn point_type(mut self, value: u32) -> Self {
        self.point_specs_mut().kind = Some(value);
        self
    }

    /// Set the marker size (1 = backend default size).
    fn point_size(mut self, value: f64) -> Self {
        self.point_specs_mut().size = Some(value);
        self
    }

    /// Draw a marker on every n-th point only (`linespoints` style).
    /// Negative values blank the line behind each marker.
    fn point_interval(mut self, value: i32) -> Self {
        self.point_specs_mut().interval = Some(value);
        self
    }
}

impl PointSpecsOf for PointSpecs {
    fn point_specs(&self) -> &PointSpecs {
        self
    }

    fn point_specs_mut(&mut self) -> &mut PointSpecs {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(PointSpecs::new().repr(), "");
    }

    #[test]
    fn test_all_options() {
        let point = PointSpecs::new().point_interval(-3).point_size(1.25).point_type(6);
        assert_eq!(point.repr(), "pt 6 ps 1.25 pi -3");
        assert_eq!(point.size(), Some(1.25));
    }
}
