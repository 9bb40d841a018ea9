/// Zoomable view window over the scene, always centered on the Sun at the
/// origin. The transform is a pure function of the zoom scalar; there is no
/// pan state.

pub const ZOOM_MIN: f64 = 0.3;
pub const ZOOM_MAX: f64 = 3.0;

/// Logical half-extent of the scene square at zoom 1.
pub const HALF_EXTENT: f64 = 500.0;

/// A view rectangle in scene coordinates (SVG viewBox order).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
}

impl Viewport {
    pub fn new() -> Self {
        Self { zoom: 1.0 }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Store a zoom level, clamped to its bounds. Clamping is idempotent.
    pub fn set_zoom(&mut self, requested: f64) {
        self.zoom = requested.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Multiplicative zoom for pinch/scroll deltas.
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.zoom * factor);
    }

    /// The visible window: a square of side `2 * HALF_EXTENT / zoom`,
    /// centered on the origin.
    pub fn view_box(&self) -> ViewBox {
        let half = HALF_EXTENT / self.zoom;
        ViewBox {
            min_x: -half,
            min_y: -half,
            width: half * 2.0,
            height: half * 2.0,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_clamped_to_bounds() {
        let mut vp = Viewport::new();
        vp.set_zoom(-4.0);
        assert_eq!(vp.zoom(), ZOOM_MIN);
        vp.set_zoom(100.0);
        assert_eq!(vp.zoom(), ZOOM_MAX);
    }

    #[test]
    fn clamping_is_a_fixed_point() {
        let mut vp = Viewport::new();
        vp.set_zoom(17.0);
        let once = vp.zoom();
        vp.set_zoom(once);
        assert_eq!(vp.zoom(), once);
    }

    #[test]
    fn view_box_centered_on_origin() {
        let mut vp = Viewport::new();
        vp.set_zoom(2.0);
        let vb = vp.view_box();
        assert!((vb.min_x + vb.width / 2.0).abs() < 1e-12);
        assert!((vb.min_y + vb.height / 2.0).abs() < 1e-12);
    }

    #[test]
    fn view_box_size_inverse_to_zoom() {
        let mut vp = Viewport::new();
        vp.set_zoom(1.0);
        assert!((vp.view_box().width - 1000.0).abs() < 1e-12);
        vp.set_zoom(2.0);
        assert!((vp.view_box().width - 500.0).abs() < 1e-12);
        vp.set_zoom(0.5);
        assert!((vp.view_box().width - 2000.0).abs() < 1e-12);
    }

    #[test]
    fn zoom_by_compounds_multiplicatively() {
        let mut vp = Viewport::new();
        vp.zoom_by(1.5);
        vp.zoom_by(1.5);
        assert!((vp.zoom() - 2.25).abs() < 1e-12);
        // Runs into the upper bound eventually
        vp.zoom_by(10.0);
        assert_eq!(vp.zoom(), ZOOM_MAX);
    }
}
