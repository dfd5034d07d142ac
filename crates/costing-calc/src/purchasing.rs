//! 採購預估
//!
//! 依訂單數量與損耗率推算每項物料需購買的數量。不可分割的單位（線軸、件）
//! 無條件進位，連續單位（米等）四捨五入到配置的小數位。

use costing_core::arith;
use costing_core::{MaterialId, MaterialLine, OrderParameters, Unit};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::markup;

/// 單項物料採購預估
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasingLine {
    /// 物料ID
    pub material_id: MaterialId,
    /// 名稱
    pub name: String,
    /// 計量單位
    pub unit: Unit,
    /// 單價
    pub unit_price: Decimal,
    /// 每件用量
    pub qty_per_unit: Decimal,
    /// 原始總用量
    pub total_raw: Decimal,
    /// 含損耗總用量
    pub total_with_waste: Decimal,
    /// 採購數量（已取整）
    pub qty_to_buy: Decimal,
    /// 採購金額
    pub line_cost: Decimal,
}

/// 採購預估結果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasingForecast {
    pub lines: Vec<PurchasingLine>,
    /// 採購物料總預算
    pub total_purchasing_mat_cost: Decimal,
}

/// 採購預估計算器
pub struct PurchasingCalculator;

impl PurchasingCalculator {
    /// 計算整張訂單的採購預估
    pub fn forecast(
        materials: &[MaterialLine],
        order: &OrderParameters,
        purchase_decimals: u32,
    ) -> PurchasingForecast {
        let lines: Vec<PurchasingLine> = materials
            .iter()
            .map(|material| Self::project_line(material, order, purchase_decimals))
            .collect();

        let total_purchasing_mat_cost = arith::sum(lines.iter().map(|line| line.line_cost));

        PurchasingForecast {
            lines,
            total_purchasing_mat_cost,
        }
    }

    /// 計算單項物料
    pub fn project_line(
        material: &MaterialLine,
        order: &OrderParameters,
        purchase_decimals: u32,
    ) -> PurchasingLine {
        let total_raw = arith::mul(material.qty, order.order_qty);
        let total_with_waste = markup(total_raw, order.waste_rate);
        let qty_to_buy = material
            .rule()
            .purchase_rounding
            .apply(total_with_waste, purchase_decimals);
        let line_cost = arith::mul(qty_to_buy, material.unit_price);

        tracing::debug!(
            "採購: {} 原始 {} 含損耗 {} 採購 {} {}",
            material.name,
            total_raw,
            total_with_waste,
            qty_to_buy,
            material.unit
        );

        PurchasingLine {
            material_id: material.id,
            name: material.name.clone(),
            unit: material.unit.clone(),
            unit_price: material.unit_price,
            qty_per_unit: material.qty,
            total_raw,
            total_with_waste,
            qty_to_buy,
            line_cost,
        }
    }
}
