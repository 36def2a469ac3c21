/// Load state of the profile picture. Once the image fails the initials badge takes its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageState {
    failed: bool,
}

impl ImageState {
    pub fn on_error(&mut self) {
        self.failed = true;
    }

    /// Catches a load that finished with no pixels before `on:error` was attached.
    pub fn check_loaded(&mut self, complete: bool, natural_width: u32) {
        if complete && natural_width == 0 {
            self.on_error();
        }
    }

    pub fn image_visible(&self) -> bool {
        !self.failed
    }

    pub fn badge_visible(&self) -> bool {
        self.failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_shown_until_error() {
        let state = ImageState::default();
        assert!(state.image_visible());
        assert!(!state.badge_visible());
    }

    #[test]
    fn test_error_swaps_in_badge() {
        let mut state = ImageState::default();
        state.on_error();
        assert!(!state.image_visible());
        assert!(state.badge_visible());
    }

    #[test]
    fn test_check_loaded_detects_earlier_failure() {
        let mut pending = ImageState::default();
        pending.check_loaded(false, 0);
        assert!(pending.image_visible());

        let mut loaded = ImageState::default();
        loaded.check_loaded(true, 480);
        assert!(loaded.image_visible());

        let mut broken = ImageState::default();
        broken.check_loaded(true, 0);
        assert!(broken.badge_visible());
        // the error event may still arrive afterwards
        broken.on_error();
        assert!(broken.badge_visible());
    }

    #[test]
    fn test_repeated_errors_are_idempotent() {
        let mut once = ImageState::default();
        once.on_error();
        let mut many = ImageState::default();
        for _ in 0..5 {
            many.on_error();
        }
        assert_eq!(once, many);
        assert!(many.badge_visible());
    }
}
