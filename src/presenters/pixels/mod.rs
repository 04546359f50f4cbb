pub mod pixel_format;
#[cfg(feature = "gui")]
pub mod presenter;
