//! Boundary services exposed to callers such as a menu or CLI layer.

pub mod services;
