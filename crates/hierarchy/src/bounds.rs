//! Bounding-box resolution from element attributes.
//!
//! Two encodings appear in the wild. Android's accessibility dumps carry a
//! combined `bounds="[x1,y1][x2,y2]"` corner-pair attribute; iOS XCUITest
//! sources carry separate `x`/`y`/`width`/`height` attributes. The combined
//! form is tried first, then the separate form; if neither resolves the
//! element simply has no bounds and stays out of the spatial index.

use crate::node::Element;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

/// An axis-aligned rectangle in logical (viewport) pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Surface area, used by the hit resolver's most-specific-element rule.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Boundary-inclusive point containment.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Corner-point form `(x_min, y_min, x_max, y_max)`.
    #[inline]
    pub fn corners(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[allow(clippy::unwrap_used, reason = "pattern is a literal and compiles")]
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Resolve an element's bounds, combined corner-pair encoding first, then
/// the separate edge attributes. `None` when neither form applies.
pub(crate) fn resolve(element: &Element) -> Option<Bounds> {
    from_corner_pair(element).or_else(|| from_edge_attrs(element))
}

/// Combined `bounds` attribute: exactly four unsigned integer runs in
/// document order as `x1, y1, x2, y2`.
///
/// A zero anywhere among the four voids this encoding and resolution falls
/// through to the separate-attribute form. A legitimate zero coordinate is
/// indistinguishable from a missing one under the source's validity check,
/// so a `[0,0][w,h]` rectangle never resolves through this path.
fn from_corner_pair(element: &Element) -> Option<Bounds> {
    let raw = element.attr("bounds")?;
    let numbers: Vec<f64> = NUMBER
        .find_iter(raw)
        .filter_map(|digits| digits.as_str().parse().ok())
        .collect();
    let &[x1, y1, x2, y2] = numbers.as_slice() else {
        return None;
    };
    if [x1, y1, x2, y2].contains(&0.0) {
        return None;
    }
    if x2 < x1 || y2 < y1 {
        warn!("<{}> has inverted corner bounds {raw:?}, leaving unresolved", element.tag);
        return None;
    }
    Some(Bounds {
        x: x1,
        y: y1,
        width: x2 - x1,
        height: y2 - y1,
    })
}

/// Separate `x`/`y`/`width`/`height` attributes, all required.
fn from_edge_attrs(element: &Element) -> Option<Bounds> {
    let x: f64 = element.attr("x")?.trim().parse().ok()?;
    let y: f64 = element.attr("y")?.trim().parse().ok()?;
    let width: f64 = element.attr("width")?.trim().parse().ok()?;
    let height: f64 = element.attr("height")?.trim().parse().ok()?;
    if width < 0.0 || height < 0.0 {
        warn!(
            "<{}> has negative extent {width}x{height}, leaving unresolved",
            element.tag
        );
        return None;
    }
    Some(Bounds {
        x,
        y,
        width,
        height,
    })
}
