use crate::config::WindowConfig;
use winit::dpi::LogicalSize;
use winit::window::{Fullscreen, Window, WindowAttributes};

/// Borderless fullscreen on the current monitor, or windowed.
pub fn fullscreen_mode(fullscreen: bool) -> Option<Fullscreen> {
    fullscreen.then_some(Fullscreen::Borderless(None))
}

pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_fullscreen(fullscreen_mode(config.fullscreen))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windowed_mode_has_no_fullscreen() {
        assert_eq!(fullscreen_mode(false), None);
        assert_eq!(fullscreen_mode(true), Some(Fullscreen::Borderless(None)));
    }

    #[test]
    fn attributes_carry_title_and_size() {
        let config = crate::config::AppConfig::catch_the_square().window;
        let attributes = window_attributes(&config);

        assert_eq!(attributes.title, "Catch the Square");
        assert_eq!(
            attributes.inner_size,
            Some(LogicalSize::new(800, 600).into())
        );
    }
}
