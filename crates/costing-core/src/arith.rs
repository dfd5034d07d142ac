//! 飽和運算
//!
//! 百分比沒有上限，極大的輸入會超出 `Decimal` 範圍。所有計算值皆非負，
//! 溢位時一律飽和到 `Decimal::MAX`，計算照常完成。

use rust_decimal::Decimal;

/// `a × b`，溢位時為 `Decimal::MAX`
pub fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::MAX)
}

/// `a + b`，溢位時為 `Decimal::MAX`
pub fn add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(Decimal::MAX)
}

/// `a / b`，除數為 0 時為 0，溢位時為 `Decimal::MAX`
pub fn ratio(a: Decimal, b: Decimal) -> Decimal {
    if b.is_zero() {
        return Decimal::ZERO;
    }
    a.checked_div(b).unwrap_or(Decimal::MAX)
}

/// 飽和加總
pub fn sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().fold(Decimal::ZERO, add)
}
