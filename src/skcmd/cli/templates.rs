//! Output templates, kept in `templates/` and embedded at compile time.
//!
//! Templates are minijinja. Line breaks are explicit (`{{ "\n" }}`) and every
//! tag trims the whitespace before it, so the layout of a template file never
//! leaks into the output.

pub const PREVIEW_TEMPLATE: &str = include_str!("templates/preview.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const TYPES_TEMPLATE: &str = include_str!("templates/types.tmp");
