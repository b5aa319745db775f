pub mod clipboard;
pub mod icons;
pub mod modal;
pub mod theme;
