//! App theme: green/orange palette and spacing.

pub struct AppColors;

impl AppColors {
    pub const HEADER: &'static str = "#38A169";
    pub const ON_HEADER: &'static str = "#FFFFFF";
    pub const SURFACE: &'static str = "#FFFFFF";
    pub const TITLE: &'static str = "#22543D";
    pub const BODY: &'static str = "#276749";
    pub const MUTED: &'static str = "#2F855A";
    pub const FAINT: &'static str = "#38A169";
    pub const ACCENT: &'static str = "#DD6B20";
    pub const ACCENT_SOFT: &'static str = "#FEEBC8";
    pub const DANGER: &'static str = "#E53E3E";
    pub const SUCCESS: &'static str = "#2F855A";
    pub const ERROR: &'static str = "#C53030";
    pub const OVERLAY: &'static str = "rgba(0,0,0,0.48)";
}

/// 4px grid spacing.
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const CARD_RADIUS: &str = "8px";
}

/// Shared style for text inputs and textareas.
pub const INPUT_STYLE: &str = "width: 100%; padding: 8px 12px; border-radius: 6px; border: 1px solid #CBD5E0; box-sizing: border-box; font-size: 1rem;";
