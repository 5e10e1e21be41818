//! Utility modules: build info, logging setup.

pub mod build_info;
pub mod logging;
