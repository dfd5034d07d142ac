//! # Costing Session
//!
//! 工作階段狀態與快照快取

pub mod session;

// Re-export 主要類型
pub use session::{CostSheet, NEW_MATERIAL_NAME};
