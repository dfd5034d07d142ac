//! 訂單模擬參數

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::normalize;

/// 訂單參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderParameters {
    /// 生產數量
    pub order_qty: Decimal,

    /// 損耗率（%）
    pub waste_rate: Decimal,
}

impl OrderParameters {
    /// 創建新的訂單參數（夾取為非負數）
    pub fn new(order_qty: Decimal, waste_rate: Decimal) -> Self {
        Self {
            order_qty: normalize(order_qty),
            waste_rate: normalize(waste_rate),
        }
    }

    /// 設置生產數量
    pub fn set_order_qty(&mut self, order_qty: Decimal) {
        self.order_qty = normalize(order_qty);
    }

    /// 設置損耗率
    pub fn set_waste_rate(&mut self, waste_rate: Decimal) {
        self.waste_rate = normalize(waste_rate);
    }

    /// 重新夾取所有欄位
    pub fn normalized(self) -> Self {
        Self::new(self.order_qty, self.waste_rate)
    }
}

impl Default for OrderParameters {
    fn default() -> Self {
        Self {
            order_qty: Decimal::from(100),
            waste_rate: Decimal::from(5),
        }
    }
}
