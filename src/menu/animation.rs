//! Settings panel open/close animation.

use std::time::Duration;

/// Scale units per second; a full open or close takes `1 / ANIMATION_SPEED` seconds.
pub const ANIMATION_SPEED: f32 = 6.0;

/// Below this scale the panel is drawn as an empty shell and ignores clicks.
pub const CONTENT_THRESHOLD: f32 = 0.3;

/// Animation state of the settings panel.
///
/// Opening and closing are separate variants, so the panel can never be doing both.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanelAnimation {
    #[default]
    Closed,
    Opening(f32),
    Open,
    Closing(f32),
}

/// A bound reached during [`PanelAnimation::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTransition {
    Opened,
    Closed,
}

impl PanelAnimation {
    /// Current scale in `[0, 1]`.
    pub fn scale(&self) -> f32 {
        match *self {
            PanelAnimation::Closed => 0.0,
            PanelAnimation::Open => 1.0,
            PanelAnimation::Opening(scale) | PanelAnimation::Closing(scale) => {
                scale.clamp(0.0, 1.0)
            }
        }
    }

    /// Whether contents are drawn and clickable.
    pub fn is_interactive(&self) -> bool {
        self.scale() >= CONTENT_THRESHOLD
    }

    /// Starts opening from scale 0.
    pub fn open(&mut self) {
        *self = PanelAnimation::Opening(0.0);
    }

    /// Starts closing from the current scale. A closed panel stays closed.
    pub fn close(&mut self) {
        *self = match *self {
            PanelAnimation::Closed => PanelAnimation::Closed,
            other => PanelAnimation::Closing(other.scale()),
        };
    }

    /// Moves the scale linearly by `ANIMATION_SPEED * dt` and reports a bound if one was reached.
    pub fn advance(&mut self, dt: Duration) -> Option<PanelTransition> {
        let step = ANIMATION_SPEED * dt.as_secs_f32();
        match *self {
            PanelAnimation::Opening(scale) => {
                let scale = scale + step;
                if scale >= 1.0 {
                    *self = PanelAnimation::Open;
                    Some(PanelTransition::Opened)
                } else {
                    *self = PanelAnimation::Opening(scale);
                    None
                }
            }
            PanelAnimation::Closing(scale) => {
                let scale = scale - step;
                if scale <= 0.0 {
                    *self = PanelAnimation::Closed;
                    Some(PanelTransition::Closed)
                } else {
                    *self = PanelAnimation::Closing(scale);
                    None
                }
            }
            PanelAnimation::Closed | PanelAnimation::Open => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn opening_reaches_open_after_one_sixth_of_a_second() {
        let mut panel = PanelAnimation::Closed;
        panel.open();

        assert_eq!(panel.advance(Duration::from_millis(100)), None);
        assert!((panel.scale() - 0.6).abs() < 1e-5);
        assert_eq!(
            panel.advance(Duration::from_millis(70)),
            Some(PanelTransition::Opened)
        );
        assert_eq!(panel, PanelAnimation::Open);
    }

    #[test]
    fn scale_stays_clamped_for_large_steps() {
        let mut panel = PanelAnimation::Opening(0.9);
        panel.advance(Duration::from_secs(5));
        assert_eq!(panel.scale(), 1.0);

        panel.close();
        panel.advance(Duration::from_secs(5));
        assert_eq!(panel.scale(), 0.0);
        assert_eq!(panel, PanelAnimation::Closed);
    }

    #[test]
    fn closing_mid_open_reverses_from_the_current_scale() {
        let mut panel = PanelAnimation::Opening(0.5);
        panel.close();
        assert_eq!(panel, PanelAnimation::Closing(0.5));
    }

    #[test]
    fn interactivity_starts_at_the_threshold() {
        assert!(!PanelAnimation::Opening(0.29).is_interactive());
        assert!(PanelAnimation::Opening(0.3).is_interactive());
        assert!(PanelAnimation::Open.is_interactive());
        assert!(!PanelAnimation::Closed.is_interactive());
    }

    #[test]
    fn animation_is_frame_rate_independent() {
        let mut fast = PanelAnimation::Opening(0.0);
        let mut slow = PanelAnimation::Opening(0.0);

        for _ in 0..4 {
            fast.advance(FRAME);
        }
        slow.advance(FRAME * 4);

        assert!((fast.scale() - slow.scale()).abs() < 1e-5);
    }

    #[test]
    fn resting_states_do_not_move() {
        let mut open = PanelAnimation::Open;
        let mut closed = PanelAnimation::Closed;

        assert_eq!(open.advance(FRAME), None);
        assert_eq!(closed.advance(FRAME), None);
        assert_eq!((open.scale(), closed.scale()), (1.0, 0.0));
    }
}
