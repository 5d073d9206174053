//! Starfield scroll (enhanced mode only). Cosmetic; no gameplay effect.

use depthstrike_core::constants::{STARFIELD_SCROLL_SPEED, STARFIELD_WRAP};

/// Wrap-around scroll offset for the background starfield.
#[derive(Debug, Clone, Copy, Default)]
pub struct Starfield {
    pub offset: f64,
}

impl Starfield {
    pub fn scroll(&mut self) {
        self.offset += STARFIELD_SCROLL_SPEED;
        if self.offset > STARFIELD_WRAP {
            self.offset = 0.0;
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_wraps_to_zero() {
        let mut field = Starfield::default();
        let mut wrapped_at = None;
        for i in 1..=100 {
            field.scroll();
            if field.offset == 0.0 {
                wrapped_at = Some(i);
                break;
            }
            assert!(field.offset <= STARFIELD_WRAP);
        }
        // 0.2 per tick passes 10.0 on the 51st step (floating point may
        // land 50 * 0.2 a hair above 10.0).
        let wrapped_at = wrapped_at.expect("starfield never wrapped");
        assert!((50..=51).contains(&wrapped_at), "wrapped at {wrapped_at}");
    }
}
