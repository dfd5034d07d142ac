//! 成本計算主引擎

use costing_core::input::normalize;
use costing_core::{CostingConfig, MaterialLine, OrderParameters, PricingSettings};
use rust_decimal::Decimal;

use crate::{
    CalculationSnapshot, CostingWarning, PricingLadder, PurchasingCalculator, TimingModel,
};

/// 成本計算引擎
///
/// 純函數：同一份輸入永遠得到相同快照，呼叫之間不保留任何狀態。
#[derive(Debug, Clone)]
pub struct CalculationEngine {
    /// 連續單位採購小數位
    purchase_decimals: u32,
}

impl CalculationEngine {
    /// 創建新的計算引擎
    pub fn new(config: &CostingConfig) -> Self {
        Self {
            purchase_decimals: config.purchase_decimals,
        }
    }

    /// 主計算入口
    pub fn evaluate(
        &self,
        materials: &[MaterialLine],
        base_time: Decimal,
        settings: &PricingSettings,
        order: &OrderParameters,
    ) -> CalculationSnapshot {
        tracing::info!(
            "開始成本計算：物料 {} 筆，基本工時 {}，訂單數量 {}",
            materials.len(),
            base_time,
            order.order_qty
        );

        let start_time = std::time::Instant::now();

        // Step 1: 工時
        tracing::debug!("Step 1: 工時計算");
        let timing = TimingModel::compute(normalize(base_time), settings.cut_rate, settings.pack_rate);
        tracing::debug!("總工時: {}", timing.total_time);

        // Step 2: 價格階梯
        tracing::debug!("Step 2: 價格階梯");
        let total_materials = PricingLadder::total_materials(materials);
        let ladder = PricingLadder::build(total_materials, timing.total_time, settings);

        // Step 3: 採購預估（與價格階梯讀取同一份物料）
        tracing::debug!("Step 3: 採購預估");
        let forecast = PurchasingCalculator::forecast(materials, order, self.purchase_decimals);

        let warnings = Self::collect_warnings(materials);
        for warning in &warnings {
            tracing::warn!("物料 {}: {}", warning.material_id, warning.message);
        }

        tracing::info!("成本計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "門市價 {}，採購預算 {}",
            ladder.boutique_price,
            forecast.total_purchasing_mat_cost
        );

        CalculationSnapshot {
            total_materials: ladder.total_materials,
            cut_time: timing.cut_time,
            pack_time: timing.pack_time,
            total_time: timing.total_time,
            labor_cost: ladder.labor_cost,
            cost_price: ladder.cost_price,
            sell_price_ht: ladder.sell_price_ht,
            sell_price_ttc: ladder.sell_price_ttc,
            boutique_price: ladder.boutique_price,
            purchasing_lines: forecast.lines,
            total_purchasing_mat_cost: forecast.total_purchasing_mat_cost,
            warnings,
        }
    }

    /// 檢查可疑的物料記錄
    fn collect_warnings(materials: &[MaterialLine]) -> Vec<CostingWarning> {
        let mut warnings = Vec::new();

        for material in materials {
            if material.rule().is_thread_derived() && material.thread_capacity.is_zero() {
                warnings.push(CostingWarning::warning(
                    material.id,
                    format!("線軸容量為 0，{} 的用量視為 0", material.name),
                ));
            }

            if material.unit_price.is_zero() {
                warnings.push(CostingWarning::info(
                    material.id,
                    format!("{} 單價為 0", material.name),
                ));
            }
        }

        warnings
    }
}

impl Default for CalculationEngine {
    fn default() -> Self {
        Self::new(&CostingConfig::default())
    }
}
