//! Visual themes and the theme-change channel
//!
//! The renderer never inspects global presentation state; whoever owns the
//! active theme pushes changes through [`theme_channel`] and the renderer
//! picks up the latest value between frames.

use std::sync::mpsc;

/// The site's visual themes, each with a single accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Terminal green (#00ff41), the default
    #[default]
    Terminal,
    /// Magenta (#ff00ff)
    Cyberpunk,
    /// Red (#ff0000)
    RedAlert,
}

impl Theme {
    /// Next theme in display order, wrapping around
    pub fn cycle(self) -> Self {
        match self {
            Theme::Terminal => Theme::Cyberpunk,
            Theme::Cyberpunk => Theme::RedAlert,
            Theme::RedAlert => Theme::Terminal,
        }
    }

    /// Accent color as sRGB bytes
    pub fn accent_srgb(self) -> [u8; 3] {
        match self {
            Theme::Terminal => [0x00, 0xff, 0x41],
            Theme::Cyberpunk => [0xff, 0x00, 0xff],
            Theme::RedAlert => [0xff, 0x00, 0x00],
        }
    }

    /// Accent color in linear space, ready for an sRGB render target
    pub fn accent_linear(self) -> [f32; 4] {
        let [r, g, b] = self.accent_srgb();
        [
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            1.0,
        ]
    }
}

/// Standard sRGB to linear conversion (ITU-R BT.709)
fn srgb_to_linear(c: u8) -> f32 {
    let x = c as f32 / 255.0;
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Surface clear color: Catppuccin Mocha base
pub fn background() -> wgpu::Color {
    let base = catppuccin::PALETTE.mocha.colors.base.rgb;
    wgpu::Color {
        r: srgb_to_linear(base.r) as f64,
        g: srgb_to_linear(base.g) as f64,
        b: srgb_to_linear(base.b) as f64,
        a: 1.0,
    }
}

/// Create a theme-change channel: the owner of the active theme keeps the
/// sender, the renderer takes the receiver.
pub fn theme_channel() -> (ThemeSender, ThemeReceiver) {
    let (tx, rx) = mpsc::channel();
    (ThemeSender(tx), ThemeReceiver(rx))
}

/// Sending half of the theme-change channel
#[derive(Clone)]
pub struct ThemeSender(mpsc::Sender<Theme>);

impl ThemeSender {
    /// Announce a theme change. A disconnected receiver is not an error;
    /// it just means the renderer is gone.
    pub fn send(&self, theme: Theme) {
        let _ = self.0.send(theme);
    }
}

/// Receiving half of the theme-change channel
pub struct ThemeReceiver(mpsc::Receiver<Theme>);

impl ThemeReceiver {
    /// Most recent theme sent since the last poll, if any
    pub fn latest(&self) -> Option<Theme> {
        self.0.try_iter().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_walks_all_themes() {
        assert_eq!(Theme::Terminal.cycle(), Theme::Cyberpunk);
        assert_eq!(Theme::Cyberpunk.cycle(), Theme::RedAlert);
        assert_eq!(Theme::RedAlert.cycle(), Theme::Terminal);
    }

    #[test]
    fn test_accent_colors_match_theme_palette() {
        assert_eq!(Theme::Terminal.accent_srgb(), [0x00, 0xff, 0x41]);
        assert_eq!(Theme::Cyberpunk.accent_srgb(), [0xff, 0x00, 0xff]);
        assert_eq!(Theme::RedAlert.accent_srgb(), [0xff, 0x00, 0x00]);
    }

    #[test]
    fn test_accent_linear_full_channels_are_one() {
        let [r, g, b, a] = Theme::Cyberpunk.accent_linear();
        assert!((r - 1.0).abs() < 1e-6);
        assert!(g.abs() < 1e-6);
        assert!((b - 1.0).abs() < 1e-6);
        assert_eq!(a, 1.0);
    }

    #[test]
    fn test_channel_delivers_latest_theme() {
        let (tx, rx) = theme_channel();
        assert_eq!(rx.latest(), None);

        tx.send(Theme::Cyberpunk);
        tx.send(Theme::RedAlert);

        assert_eq!(rx.latest(), Some(Theme::RedAlert));
        assert_eq!(rx.latest(), None);
    }
}
