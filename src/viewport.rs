use eframe::egui::Vec2;

pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 6.0;
pub const FIT_MARGIN: f32 = 48.0;
pub const ZOOM_STEP: f32 = 1.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitMode {
    Auto,
    Manual,
}

/// Scale controller for the indented view. In auto-fit the scale follows the
/// observed container width; in manual mode only explicit zoom actions move
/// it. Either way the result stays inside [MIN_SCALE, MAX_SCALE].
#[derive(Clone, Debug)]
pub struct Viewport {
    fit_mode: FitMode,
    scale: f32,
    margin: f32,
    min_scale: f32,
    max_scale: f32,
    last_inputs: Option<(Vec2, f32)>,
}

impl Viewport {
    pub fn new(fit_mode: FitMode) -> Self {
        Self {
            fit_mode,
            scale: 1.0,
            margin: FIT_MARGIN,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            last_inputs: None,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    pub fn set_fit_mode(&mut self, fit_mode: FitMode) {
        if self.fit_mode != fit_mode {
            self.fit_mode = fit_mode;
            self.last_inputs = None;
        }
    }

    /// Feed the current container size and layout width. Recomputes only
    /// when those inputs actually changed, so unrelated UI churn cannot
    /// jitter the scale. A degenerate container or layout keeps the prior
    /// scale.
    pub fn observe(&mut self, container: Vec2, layout_width: f32) {
        if self.last_inputs == Some((container, layout_width)) {
            return;
        }
        self.last_inputs = Some((container, layout_width));

        if self.fit_mode != FitMode::Auto {
            return;
        }
        if container.x <= 0.0 || container.y <= 0.0 || layout_width <= 0.0 {
            return;
        }

        self.scale = ((container.x - self.margin) / layout_width)
            .min(1.0)
            .max(self.min_scale);
    }

    pub fn zoom_by(&mut self, factor: f32) {
        if self.fit_mode != FitMode::Manual {
            return;
        }
        self.scale = (self.scale * factor).clamp(self.min_scale, self.max_scale);
    }

    pub fn zoom_in(&mut self) {
        self.zoom_by(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_by(1.0 / ZOOM_STEP);
    }

    pub fn zoom_reset(&mut self) {
        if self.fit_mode == FitMode::Manual {
            self.scale = 1.0f32.clamp(self.min_scale, self.max_scale);
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    fn auto_fit_without_margin() -> Viewport {
        let mut viewport = Viewport::new(FitMode::Auto);
        viewport.margin = 0.0;
        viewport
    }

    #[test]
    fn auto_fit_scales_layout_to_container_width() {
        let mut viewport = auto_fit_without_margin();
        viewport.observe(vec2(800.0, 600.0), 1600.0);
        assert_eq!(viewport.scale(), 0.5);
    }

    #[test]
    fn auto_fit_clamps_to_the_minimum_scale() {
        let mut viewport = auto_fit_without_margin();
        viewport.observe(vec2(100.0, 600.0), 1600.0);
        assert_eq!(viewport.scale(), MIN_SCALE);
    }

    #[test]
    fn auto_fit_never_magnifies_beyond_one() {
        let mut viewport = auto_fit_without_margin();
        viewport.observe(vec2(3200.0, 600.0), 400.0);
        assert_eq!(viewport.scale(), 1.0);
    }

    #[test]
    fn degenerate_container_keeps_the_prior_scale() {
        let mut viewport = auto_fit_without_margin();
        viewport.observe(vec2(800.0, 600.0), 1600.0);

        viewport.observe(vec2(0.0, 600.0), 1600.0);
        assert_eq!(viewport.scale(), 0.5);
        viewport.observe(vec2(-20.0, 600.0), 1600.0);
        assert_eq!(viewport.scale(), 0.5);
        viewport.observe(vec2(800.0, 600.0), 0.0);
        assert_eq!(viewport.scale(), 0.5);
    }

    #[test]
    fn manual_zoom_is_clamped_to_the_configured_range() {
        let mut viewport = Viewport::new(FitMode::Manual);
        for _ in 0..64 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.scale(), MAX_SCALE);

        for _ in 0..64 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.scale(), MIN_SCALE);

        viewport.zoom_reset();
        assert_eq!(viewport.scale(), 1.0);
    }

    #[test]
    fn zoom_actions_are_inert_in_auto_fit() {
        let mut viewport = auto_fit_without_margin();
        viewport.observe(vec2(800.0, 600.0), 1600.0);

        viewport.zoom_in();
        viewport.zoom_out();
        viewport.zoom_reset();
        assert_eq!(viewport.scale(), 0.5);
    }

    #[test]
    fn fit_mode_toggle_forces_a_recompute_on_next_observation() {
        let mut viewport = auto_fit_without_margin();
        viewport.observe(vec2(800.0, 600.0), 1600.0);

        viewport.set_fit_mode(FitMode::Manual);
        viewport.zoom_in();
        let manual_scale = viewport.scale();

        viewport.set_fit_mode(FitMode::Auto);
        assert_eq!(viewport.scale(), manual_scale);
        viewport.observe(vec2(800.0, 600.0), 1600.0);
        assert_eq!(viewport.scale(), 0.5);
    }
}
