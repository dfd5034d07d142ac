//! # Costing Calculation Engine
//!
//! 核心成本計算引擎：工時、價格階梯、採購預估

pub mod engine;
pub mod pricing;
pub mod purchasing;
pub mod timing;

// Re-export 主要類型
pub use engine::CalculationEngine;
pub use pricing::{PriceLadder, PricingLadder};
pub use purchasing::{PurchasingCalculator, PurchasingForecast, PurchasingLine};
pub use timing::{TimingModel, TimingResult};

use costing_core::MaterialId;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 成本計算結果快照
///
/// 每次輸入變更後整份重新產生；匯出與顯示只讀取這份快照，不再做任何計算。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationSnapshot {
    pub total_materials: Decimal,
    pub cut_time: Decimal,
    pub pack_time: Decimal,
    pub total_time: Decimal,
    pub labor_cost: Decimal,
    pub cost_price: Decimal,
    pub sell_price_ht: Decimal,
    pub sell_price_ttc: Decimal,
    pub boutique_price: Decimal,
    pub purchasing_lines: Vec<PurchasingLine>,
    pub total_purchasing_mat_cost: Decimal,

    /// 警告信息（不影響數值）
    pub warnings: Vec<CostingWarning>,
}

impl CalculationSnapshot {
    /// 價格階梯部分
    pub fn price_ladder(&self) -> PriceLadder {
        PriceLadder {
            total_materials: self.total_materials,
            labor_cost: self.labor_cost,
            cost_price: self.cost_price,
            sell_price_ht: self.sell_price_ht,
            sell_price_ttc: self.sell_price_ttc,
            boutique_price: self.boutique_price,
        }
    }

    /// 顯示用副本：所有金額、時間、數量四捨五入到 `dp` 位
    pub fn rounded(&self, dp: u32) -> Self {
        let round = |value: Decimal| value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);

        Self {
            total_materials: round(self.total_materials),
            cut_time: round(self.cut_time),
            pack_time: round(self.pack_time),
            total_time: round(self.total_time),
            labor_cost: round(self.labor_cost),
            cost_price: round(self.cost_price),
            sell_price_ht: round(self.sell_price_ht),
            sell_price_ttc: round(self.sell_price_ttc),
            boutique_price: round(self.boutique_price),
            purchasing_lines: self
                .purchasing_lines
                .iter()
                .map(|line| PurchasingLine {
                    total_raw: round(line.total_raw),
                    total_with_waste: round(line.total_with_waste),
                    qty_to_buy: round(line.qty_to_buy),
                    line_cost: round(line.line_cost),
                    ..line.clone()
                })
                .collect(),
            total_purchasing_mat_cost: round(self.total_purchasing_mat_cost),
            warnings: self.warnings.clone(),
        }
    }

    /// 是否有指定等級的警告
    pub fn has_warnings(&self, severity: WarningSeverity) -> bool {
        self.warnings.iter().any(|w| w.severity == severity)
    }
}

/// 成本計算警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostingWarning {
    pub material_id: MaterialId,
    pub message: String,
    pub severity: WarningSeverity,
}

impl CostingWarning {
    pub fn new(material_id: MaterialId, message: String, severity: WarningSeverity) -> Self {
        Self {
            material_id,
            message,
            severity,
        }
    }

    pub fn info(material_id: MaterialId, message: String) -> Self {
        Self::new(material_id, message, WarningSeverity::Info)
    }

    pub fn warning(material_id: MaterialId, message: String) -> Self {
        Self::new(material_id, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
