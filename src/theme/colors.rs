//! Color constants for the Anuncia brand palette.

#![allow(dead_code)]

// === INK (Backgrounds) ===
pub const INK_BLACK: &str = "#0c0a14";
pub const INK_LIGHTER: &str = "#14101f";
pub const INK_BORDER: &str = "#241e33";

// === VIOLET (Brand, Buttons, Accents) ===
pub const VIOLET: &str = "#7c5cff";
pub const VIOLET_GLOW: &str = "rgba(124, 92, 255, 0.35)";
pub const VIOLET_BRIGHT: &str = "#9d85ff";

// === CORAL (Highlights, Hover) ===
pub const CORAL: &str = "#ff6b6b";
pub const CORAL_GLOW: &str = "rgba(255, 107, 107, 0.3)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f7f5ff";
pub const TEXT_SECONDARY: &str = "rgba(247, 245, 255, 0.72)";
pub const TEXT_MUTED: &str = "rgba(247, 245, 255, 0.5)";
