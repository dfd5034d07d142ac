//! # Garment Costing
//!
//! 成衣成本計算：物料與工時 → 價格階梯（成本價 → HT → TTC → 門市價）與訂單採購預估

pub use costing_calc as calc;
pub use costing_core as model;
pub use costing_session as session;

// Re-export 主要類型
pub use costing_calc::{
    CalculationEngine, CalculationSnapshot, CostingWarning, PriceLadder, PurchasingLine,
    WarningSeverity,
};
pub use costing_core::{
    CostingConfig, CostingError, FieldValue, MaterialField, MaterialId, MaterialLine,
    OrderParameters, PricingSettings, SettingField, Unit,
};
pub use costing_session::CostSheet;
