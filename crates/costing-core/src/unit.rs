//! 計量單位與單位規則表

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// 計量單位（開放集合，未知標籤原樣保留）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    /// 米（布料）
    Meter,
    /// 件
    Piece,
    /// 線軸（bobine）
    Spool,
    /// 公斤
    Kilogram,
    /// 其他標籤
    Other(String),
}

impl Unit {
    /// 單位標籤
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Meter => "m",
            Unit::Piece => "pc",
            Unit::Spool => "bobine",
            Unit::Kilogram => "kg",
            Unit::Other(tag) => tag,
        }
    }

    /// 查詢單位規則表
    pub fn rule(&self) -> UnitRule {
        match self {
            Unit::Spool => UnitRule {
                quantity_mode: QuantityMode::ThreadDerived,
                purchase_rounding: PurchaseRounding::WholeUnits,
            },
            Unit::Piece => UnitRule {
                quantity_mode: QuantityMode::Direct,
                purchase_rounding: PurchaseRounding::WholeUnits,
            },
            Unit::Meter | Unit::Kilogram | Unit::Other(_) => UnitRule {
                quantity_mode: QuantityMode::Direct,
                purchase_rounding: PurchaseRounding::Decimals,
            },
        }
    }
}

impl FromStr for Unit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "m" => Unit::Meter,
            "pc" => Unit::Piece,
            "bobine" => Unit::Spool,
            "kg" => Unit::Kilogram,
            other => Unit::Other(other.to_string()),
        })
    }
}

impl From<String> for Unit {
    fn from(tag: String) -> Self {
        match tag.parse() {
            Ok(unit) => unit,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Unit {
    fn from(tag: &str) -> Self {
        Unit::from(tag.to_string())
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_str().to_string()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 每單位用量的來源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityMode {
    /// 直接輸入
    Direct,
    /// 由線長 / 線軸容量推導，不可直接編輯
    ThreadDerived,
}

/// 採購數量取整方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseRounding {
    /// 不可分割單位，無條件進位到整數
    WholeUnits,
    /// 連續單位，四捨五入到指定小數位
    Decimals,
}

impl PurchaseRounding {
    /// 套用取整
    pub fn apply(self, quantity: Decimal, decimals: u32) -> Decimal {
        match self {
            PurchaseRounding::WholeUnits => quantity.ceil(),
            PurchaseRounding::Decimals => {
                quantity.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
            }
        }
    }
}

/// 單位規則
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitRule {
    pub quantity_mode: QuantityMode,
    pub purchase_rounding: PurchaseRounding,
}

impl UnitRule {
    /// 用量是否由線長推導
    pub fn is_thread_derived(&self) -> bool {
        self.quantity_mode == QuantityMode::ThreadDerived
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("m", Unit::Meter)]
    #[case("pc", Unit::Piece)]
    #[case("bobine", Unit::Spool)]
    #[case("kg", Unit::Kilogram)]
    #[case("rouleau", Unit::Other("rouleau".to_string()))]
    fn test_parse_unit(#[case] tag: &str, #[case] expected: Unit) {
        let unit = Unit::from(tag);
        assert_eq!(unit, expected);
        assert_eq!(unit.as_str(), tag);
    }

    #[test]
    fn test_rule_table() {
        assert!(Unit::Spool.rule().is_thread_derived());
        assert_eq!(Unit::Spool.rule().purchase_rounding, PurchaseRounding::WholeUnits);
        assert_eq!(Unit::Piece.rule().purchase_rounding, PurchaseRounding::WholeUnits);
        assert!(!Unit::Piece.rule().is_thread_derived());
        assert_eq!(Unit::Meter.rule().purchase_rounding, PurchaseRounding::Decimals);
        assert_eq!(
            Unit::Other("rouleau".to_string()).rule().purchase_rounding,
            PurchaseRounding::Decimals
        );
    }

    #[rstest]
    #[case(PurchaseRounding::WholeUnits, Decimal::new(1428, 3), Decimal::from(2))]
    #[case(PurchaseRounding::WholeUnits, Decimal::from(105), Decimal::from(105))]
    #[case(PurchaseRounding::Decimals, Decimal::new(84, 0), Decimal::from(84))]
    #[case(PurchaseRounding::Decimals, Decimal::new(12345, 4), Decimal::new(123, 2))]
    #[case(PurchaseRounding::Decimals, Decimal::new(1125, 3), Decimal::new(113, 2))]
    fn test_purchase_rounding(
        #[case] rounding: PurchaseRounding,
        #[case] quantity: Decimal,
        #[case] expected: Decimal,
    ) {
        assert_eq!(rounding.apply(quantity, 2), expected);
    }

    #[test]
    fn test_unit_serde_as_tag() {
        let json = serde_json::to_string(&Unit::Spool).unwrap();
        assert_eq!(json, "\"bobine\"");
        let unit: Unit = serde_json::from_str("\"cm\"").unwrap();
        assert_eq!(unit, Unit::Other("cm".to_string()));
    }
}
