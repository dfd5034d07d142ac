//! 工時計算

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use costing_core::arith;

use crate::pricing::percentage_of;

/// 工時計算結果（分鐘）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingResult {
    /// 基本工時
    pub base_time: Decimal,
    /// 裁剪時間
    pub cut_time: Decimal,
    /// 包裝時間
    pub pack_time: Decimal,
    /// 總工時
    pub total_time: Decimal,
}

/// 工時模型
pub struct TimingModel;

impl TimingModel {
    /// 由基本工時與工序比例計算總工時
    ///
    /// 呼叫端需保證 `base_time` 非負。
    pub fn compute(base_time: Decimal, cut_rate: Decimal, pack_rate: Decimal) -> TimingResult {
        let cut_time = percentage_of(base_time, cut_rate);
        let pack_time = percentage_of(base_time, pack_rate);

        TimingResult {
            base_time,
            cut_time,
            pack_time,
            total_time: arith::sum([base_time, cut_time, pack_time]),
        }
    }
}
