/// Hidden-state pose of an entrance animation. The shown state is always the
/// identity transform at full opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub translate_y_px: f64,
    pub scale: f64,
    pub rotate_deg: f64,
    pub blur_px: f64,
    pub duration_ms: u32,
    pub stagger_ms: u32,
}

impl Entrance {
    pub const SERVICE: Entrance = Entrance {
        translate_y_px: 64.0,
        scale: 0.9,
        rotate_deg: 2.0,
        blur_px: 2.0,
        duration_ms: 1000,
        stagger_ms: 150,
    };

    pub const PROJECT: Entrance = Entrance {
        translate_y_px: 80.0,
        scale: 0.95,
        rotate_deg: 0.0,
        blur_px: 0.0,
        duration_ms: 700,
        stagger_ms: 0,
    };

    pub const HEADING: Entrance = Entrance {
        translate_y_px: 40.0,
        scale: 1.0,
        rotate_deg: 0.0,
        blur_px: 0.0,
        duration_ms: 1000,
        stagger_ms: 0,
    };

    pub fn with_stagger(self, stagger_ms: u32) -> Self {
        Self { stagger_ms, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate_y_px: f64,
    pub scale: f64,
    pub rotate_deg: f64,
    pub blur_px: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

/// Maps a reveal flag to its visual pose. Staggering only applies on the way
/// in; hiding is immediate for every index.
pub fn bind(entrance: &Entrance, revealed: bool, index: usize) -> RevealStyle {
    if revealed {
        RevealStyle {
            opacity: 1.0,
            translate_y_px: 0.0,
            scale: 1.0,
            rotate_deg: 0.0,
            blur_px: 0.0,
            duration_ms: entrance.duration_ms,
            delay_ms: entrance.stagger_ms.saturating_mul(index as u32),
        }
    } else {
        RevealStyle {
            opacity: 0.0,
            translate_y_px: entrance.translate_y_px,
            scale: entrance.scale,
            rotate_deg: entrance.rotate_deg,
            blur_px: entrance.blur_px,
            duration_ms: entrance.duration_ms,
            delay_ms: 0,
        }
    }
}

impl RevealStyle {
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({}) rotate({}deg); filter: blur({}px); \
             transition: all {}ms ease-out {}ms;",
            self.opacity,
            self.translate_y_px,
            self.scale,
            self.rotate_deg,
            self.blur_px,
            self.duration_ms,
            self.delay_ms,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revealed_services_stagger_by_index() {
        let style = bind(&Entrance::SERVICE, true, 3);
        assert_eq!(style.delay_ms, 450);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.translate_y_px, 0.0);
    }

    #[test]
    fn hidden_targets_take_the_entrance_pose_without_delay() {
        let style = bind(&Entrance::SERVICE, false, 3);
        assert_eq!(style.delay_ms, 0);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.scale, 0.9);
        assert_eq!(style.rotate_deg, 2.0);
    }

    #[test]
    fn css_renders_every_property() {
        let css = bind(&Entrance::PROJECT, false, 0).to_css();
        assert_eq!(
            css,
            "opacity: 0; transform: translateY(80px) scale(0.95) rotate(0deg); filter: blur(0px); \
             transition: all 700ms ease-out 0ms;"
        );
    }

    #[test]
    fn binding_is_deterministic() {
        let entrance = Entrance::HEADING.with_stagger(300);
        assert_eq!(bind(&entrance, true, 2), bind(&entrance, true, 2));
        assert_eq!(bind(&entrance, true, 2).delay_ms, 600);
    }
}
