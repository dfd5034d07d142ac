//! 價格階梯計算
//!
//! 成本價 → 批發未稅價（HT）→ 批發含稅價（TTC）→ 門市價。
//! 每一階都以前一階為基數加成，順序不可調換；階與階之間不做任何捨入。

use costing_core::arith;
use costing_core::{MaterialLine, PricingSettings};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `base * rate / 100`，溢位時飽和
pub fn percentage_of(base: Decimal, rate: Decimal) -> Decimal {
    match base.checked_mul(rate) {
        Some(product) => product / Decimal::ONE_HUNDRED,
        None => arith::mul(base, rate / Decimal::ONE_HUNDRED),
    }
}

/// `base * (1 + rate / 100)`，溢位時飽和
pub fn markup(base: Decimal, rate: Decimal) -> Decimal {
    arith::mul(base, arith::add(Decimal::ONE, rate / Decimal::ONE_HUNDRED))
}

/// 價格階梯結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLadder {
    /// 物料總成本
    pub total_materials: Decimal,
    /// 工資（façon）
    pub labor_cost: Decimal,
    /// 成本價（P.R.）
    pub cost_price: Decimal,
    /// 批發未稅價
    pub sell_price_ht: Decimal,
    /// 批發含稅價
    pub sell_price_ttc: Decimal,
    /// 門市價
    pub boutique_price: Decimal,
}

impl PriceLadder {
    /// 工坊利潤金額
    pub fn atelier_margin_amount(&self) -> Decimal {
        self.sell_price_ht - self.cost_price
    }

    /// 稅額
    pub fn tva_amount(&self) -> Decimal {
        self.sell_price_ttc - self.sell_price_ht
    }

    /// 門市加價金額
    pub fn boutique_margin_amount(&self) -> Decimal {
        self.boutique_price - self.sell_price_ttc
    }
}

/// 價格階梯計算器
pub struct PricingLadder;

impl PricingLadder {
    /// 物料總成本 = Σ 單價 × 用量
    pub fn total_materials(materials: &[MaterialLine]) -> Decimal {
        arith::sum(materials.iter().map(MaterialLine::line_cost))
    }

    /// 由物料總成本與總工時建立價格階梯
    pub fn build(total_materials: Decimal, total_time: Decimal, settings: &PricingSettings) -> PriceLadder {
        let labor_cost = arith::mul(total_time, settings.cost_minute);
        let cost_price = arith::add(total_materials, labor_cost);
        let sell_price_ht = markup(cost_price, settings.margin_atelier);
        let sell_price_ttc = markup(sell_price_ht, settings.tva);
        let boutique_price = markup(sell_price_ttc, settings.margin_boutique);

        tracing::debug!(
            "價格階梯: 成本價 {} → HT {} → TTC {} → 門市 {}",
            cost_price,
            sell_price_ht,
            sell_price_ttc,
            boutique_price
        );

        PriceLadder {
            total_materials,
            labor_cost,
            cost_price,
            sell_price_ht,
            sell_price_ttc,
            boutique_price,
        }
    }
}
