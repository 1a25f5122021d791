use crate::state::Theme;

const SPOTLIGHT_RADIUS_PX: u32 = 600;

/// Viewport (client) coordinates of the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    position: PointerPosition,
}

impl PointerTracker {
    /// Stores the coordinate as given; no clamping or rounding.
    pub fn track(&mut self, x: f64, y: f64) {
        self.position = PointerPosition { x, y };
    }

    pub fn position(&self) -> PointerPosition {
        self.position
    }
}

/// CSS `background` of the decorative spotlight overlay.
pub fn spotlight_background(position: PointerPosition, theme: Theme) -> String {
    let alpha = if theme.is_dark() { "0.15" } else { "0.08" };
    format!(
        "radial-gradient({SPOTLIGHT_RADIUS_PX}px circle at {}px {}px, rgba(255, 107, 53, {alpha}), transparent 60%)",
        position.x, position.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_keeps_exact_coordinates() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.position(), PointerPosition { x: 0.0, y: 0.0 });

        tracker.track(100.0, 200.0);
        assert_eq!(tracker.position(), PointerPosition { x: 100.0, y: 200.0 });

        // off-screen and fractional values pass through untouched
        tracker.track(-12.5, 4096.25);
        assert_eq!(tracker.position(), PointerPosition { x: -12.5, y: 4096.25 });
    }

    #[test]
    fn test_spotlight_background() {
        let position = PointerPosition { x: 100.0, y: 200.0 };
        assert_eq!(
            spotlight_background(position, Theme::Dark),
            "radial-gradient(600px circle at 100px 200px, rgba(255, 107, 53, 0.15), transparent 60%)"
        );
        assert_eq!(
            spotlight_background(position, Theme::Light),
            "radial-gradient(600px circle at 100px 200px, rgba(255, 107, 53, 0.08), transparent 60%)"
        );
    }
}
