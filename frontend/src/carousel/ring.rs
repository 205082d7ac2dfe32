//! Rotation state for the cylinder carousel.
//!
//! The ring holds `count` panels spaced `360 / count` degrees apart. The
//! presentation layer rotates the whole ring by `-rotation` and pushes it back
//! by `radius`; each panel is turned to its placement angle and pushed forward
//! by `radius`. Everything here is plain arithmetic so the component only has to
//! forward pointer, button and resize events.

/// Feel of the carousel. Values were tuned by eye, not derived.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselTuning {
    /// Degrees of rotation per pixel of horizontal pointer travel.
    pub drag_factor: f64,
    pub min_radius: f64,
    /// Lower bound for the radius ceiling, so narrow viewports still get depth.
    pub min_viewport_floor: f64,
    /// Radius used until the first measurement comes in.
    pub initial_radius: f64,
    pub settle_transition: &'static str,
    pub perspective_px: f64,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            drag_factor: 0.3,
            min_radius: 350.0,
            min_viewport_floor: 700.0,
            initial_radius: 600.0,
            settle_transition: "transform 600ms cubic-bezier(0.22, 1, 0.36, 1)",
            perspective_px: 1200.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { start_x: f64, start_rotation: f64 },
}

/// Maps any angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct RingState {
    count: usize,
    step_angle: f64,
    rotation: f64,
    radius: f64,
    drag: DragState,
    tuning: CarouselTuning,
}

impl RingState {
    pub fn new(panel_count: usize, tuning: CarouselTuning) -> Self {
        let count = panel_count.max(1);
        Self {
            count,
            step_angle: 360.0 / count as f64,
            rotation: 0.0,
            radius: tuning.initial_radius,
            drag: DragState::Idle,
            tuning,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn step_angle(&self) -> f64 {
        self.step_angle
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn tuning(&self) -> &CarouselTuning {
        &self.tuning
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Fixed angle of panel `index` on the ring.
    pub fn placement_angle(&self, index: usize) -> f64 {
        index as f64 * self.step_angle
    }

    /// Placement angles for every panel, in panel order.
    pub fn placements(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.count).map(move |i| (i, self.placement_angle(i)))
    }

    /// Called when the panel list changes. At rest the rotation is moved onto
    /// the new angle grid so a panel still faces front.
    pub fn set_panel_count(&mut self, panel_count: usize) {
        let count = panel_count.max(1);
        if count == self.count {
            return;
        }
        self.count = count;
        self.step_angle = 360.0 / count as f64;
        if !self.is_dragging() {
            self.rotation = self.snap_target(self.rotation);
        }
    }

    /// Radius at which neighbouring panels touch edge to edge, clamped to
    /// `[min_radius, max(viewport_width, min_viewport_floor)]`.
    pub fn radius_for(&self, panel_width: f64, viewport_width: f64) -> f64 {
        let raw = panel_width / (2.0 * (std::f64::consts::PI / self.count as f64).tan());
        let max_radius = if viewport_width.is_finite() {
            viewport_width.max(self.tuning.min_viewport_floor)
        } else {
            self.tuning.min_viewport_floor
        };
        // tan(pi) is a tiny negative number for a single panel, tan(pi/2) is huge
        // for two; both land on min_radius here.
        if !raw.is_finite() || raw <= 0.0 {
            return self.tuning.min_radius.min(max_radius.max(self.tuning.min_radius));
        }
        raw.max(self.tuning.min_radius).min(max_radius.max(self.tuning.min_radius))
    }

    /// Stores the radius for the latest measurement. Never touches rotation.
    pub fn recompute_radius(&mut self, panel_width: f64, viewport_width: f64) -> f64 {
        self.radius = self.radius_for(panel_width, viewport_width);
        self.radius
    }

    pub fn begin_drag(&mut self, pointer_x: f64) {
        if self.is_dragging() {
            return;
        }
        self.drag = DragState::Dragging {
            start_x: pointer_x,
            start_rotation: self.rotation,
        };
    }

    pub fn update_drag(&mut self, pointer_x: f64) {
        if let DragState::Dragging { start_x, start_rotation } = self.drag {
            // Dragging right lowers rotation; the ring is drawn at -rotation so it follows the pointer
            self.rotation = start_rotation - (pointer_x - start_x) * self.tuning.drag_factor;
        }
    }

    /// Ends the gesture and settles on the nearest panel. Returns whether a drag
    /// was actually active.
    pub fn end_drag(&mut self) -> bool {
        if !self.is_dragging() {
            return false;
        }
        self.drag = DragState::Idle;
        self.rotation = self.snap_target(self.rotation);
        true
    }

    /// Moves one panel forward (`+1`) or back (`-1`). Ignored mid-drag.
    pub fn step(&mut self, direction: i32) {
        if self.is_dragging() {
            return;
        }
        self.rotation += direction.signum() as f64 * self.step_angle;
    }

    pub fn snap_target(&self, rotation: f64) -> f64 {
        let normalized = normalize_degrees(rotation);
        (normalized / self.step_angle).round() * self.step_angle
    }

    /// Index of the panel currently facing the viewer.
    pub fn active_index(&self) -> usize {
        let slot = (normalize_degrees(self.rotation) / self.step_angle).round() as usize;
        slot % self.count
    }

    /// CSS transform for the ring container.
    pub fn ring_transform(&self) -> String {
        format!(
            "translateZ({}px) rotateY({}deg)",
            css_number(-self.radius),
            css_number(-self.rotation)
        )
    }

    /// CSS transform for panel `index`.
    pub fn panel_transform(&self, index: usize) -> String {
        format!(
            "rotateY({}deg) translateZ({}px)",
            css_number(self.placement_angle(index)),
            css_number(self.radius)
        )
    }

    /// No easing while the ring tracks the pointer, eased settle otherwise.
    pub fn transition(&self) -> &'static str {
        if self.is_dragging() {
            "none"
        } else {
            self.tuning.settle_transition
        }
    }
}

// Trims float noise so style strings stay stable between renders
fn css_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}
