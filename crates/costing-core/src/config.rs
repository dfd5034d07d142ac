//! 成本計算配置模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::normalize;
use crate::order::OrderParameters;
use crate::settings::PricingSettings;
use crate::{CostingError, Result};

/// 成本計算配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostingConfig {
    /// 首次切換為線軸時的預設容量（米）
    pub default_spool_capacity: Decimal,

    /// 連續單位採購數量的小數位數
    pub purchase_decimals: u32,

    /// 初始計價設定
    pub settings: PricingSettings,

    /// 初始訂單參數
    pub order: OrderParameters,
}

impl CostingConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            default_spool_capacity: Decimal::from(5000),
            purchase_decimals: 2,
            settings: PricingSettings::default(),
            order: OrderParameters::default(),
        }
    }

    /// 建構器模式：設置預設線軸容量
    pub fn with_default_spool_capacity(mut self, capacity: Decimal) -> Self {
        self.default_spool_capacity = normalize(capacity);
        self
    }

    /// 建構器模式：設置採購小數位數
    pub fn with_purchase_decimals(mut self, decimals: u32) -> Self {
        self.purchase_decimals = decimals;
        self
    }

    /// 建構器模式：設置計價設定
    pub fn with_settings(mut self, settings: PricingSettings) -> Self {
        self.settings = settings;
        self
    }

    /// 建構器模式：設置訂單參數
    pub fn with_order(mut self, order: OrderParameters) -> Self {
        self.order = order;
        self
    }

    /// 檢查配置是否有效
    pub fn validate(&self) -> Result<()> {
        if self.default_spool_capacity <= Decimal::ZERO {
            return Err(CostingError::InvalidConfig(format!(
                "預設線軸容量必須大於 0，目前為 {}",
                self.default_spool_capacity
            )));
        }

        if self.purchase_decimals > 10 {
            return Err(CostingError::InvalidConfig(format!(
                "採購小數位數不可超過 10，目前為 {}",
                self.purchase_decimals
            )));
        }

        Ok(())
    }

    /// 從 JSON 載入配置（設定值會被夾取並驗證）
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: CostingConfig = serde_json::from_str(json)?;
        config.settings = config.settings.normalized();
        config.order = config.order.normalized();
        config.validate()?;
        Ok(config)
    }

    /// 序列化為 JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self::new()
    }
}
