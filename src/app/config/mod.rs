//! Filesystem-backed configuration loading.
//!
//! Pure schema/model parsing lives in `domain::configuration`.

mod load_config;

pub use load_config::load_config;
