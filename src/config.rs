use log::Level;

/// Vertical offset, in CSS pixels, past which the navbar switches to its
/// opaque style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub const WHATSAPP_URL: &str = "https://wa.me/";
pub const INSTAGRAM_URL: &str = "https://instagram.com/dra.valrangel";
pub const INSTAGRAM_HANDLE: &str = "@dra.valrangel";

pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1616394584738-fc6e612e71b9?q=80&w=2070&auto=format&fit=crop";
pub const PORTRAIT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?q=80&w=2070&auto=format&fit=crop";
pub const METHODOLOGY_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1629909613654-28e377c37b09?q=80&w=2068&auto=format&fit=crop";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose state transitions when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
