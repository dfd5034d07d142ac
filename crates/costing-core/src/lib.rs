//! # Costing Core
//!
//! 核心資料模型與類型定義（物料、單位規則、設定、訂單參數）

pub mod arith;
pub mod config;
pub mod input;
pub mod material;
pub mod order;
pub mod settings;
pub mod unit;

// Re-export 主要類型
pub use config::CostingConfig;
pub use input::FieldValue;
pub use material::{MaterialBook, MaterialField, MaterialId, MaterialLine};
pub use order::OrderParameters;
pub use settings::{PricingSettings, SettingField};
pub use unit::{PurchaseRounding, QuantityMode, Unit, UnitRule};

/// 成本計算錯誤類型
///
/// 數值輸入一律夾取為非負數，不會產生錯誤；這裡只涵蓋非數值類的失敗。
#[derive(Debug, thiserror::Error)]
pub enum CostingError {
    #[error("找不到物料: {0}")]
    MaterialNotFound(MaterialId),

    #[error("未知欄位: {0}")]
    UnknownField(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CostingError>;
