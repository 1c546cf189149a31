//! Color constants used throughout the UI.
//!
//! A cool slate palette with a teal accent; field errors and the strength
//! meter get their own colors.

use eframe::egui::Color32;

/// Main window background - Dark slate
pub const BG_DARK: Color32 = Color32::from_rgb(0x1C, 0x23, 0x2B);

/// Card / panel background - Slate
pub const CARD_BG: Color32 = Color32::from_rgb(0x26, 0x2F, 0x3A);

/// Top navigation bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x14, 0x1A, 0x21);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE8, 0xED, 0xF2);

/// Secondary text (labels, hints)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x9A, 0xA7, 0xB4);

/// Primary accent - Teal
pub const ACCENT: Color32 = Color32::from_rgb(0x2D, 0x9C, 0x8F);

/// Error text and borders - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Success / info messages - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Weak password strength
pub const STRENGTH_WEAK: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Medium password strength
pub const STRENGTH_MEDIUM: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Strong password strength
pub const STRENGTH_STRONG: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Satisfied criterion in the checklist
pub const CRITERION_MET: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Unsatisfied criterion in the checklist
pub const CRITERION_UNMET: Color32 = Color32::from_rgb(0x6B, 0x77, 0x83);
