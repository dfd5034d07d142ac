//! 輸入正規化
//!
//! 所有數值欄位在每次變更時都經過這裡：負數夾取為 0，無法解析的輸入視為 0。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 欄位輸入值（來自表單的文字或已解析的數值）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(Decimal),
    Text(String),
}

impl FieldValue {
    /// 解析為數值，無法解析時返回 None（不做夾取）
    pub fn parse_number(&self) -> Option<Decimal> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(raw) => parse_decimal(raw),
        }
    }

    /// 轉為非負數值
    pub fn to_non_negative(&self) -> Decimal {
        self.parse_number().map(normalize).unwrap_or(Decimal::ZERO)
    }

    /// 轉為文字
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Number(value) => value.normalize().to_string(),
            FieldValue::Text(raw) => raw,
        }
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Number(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(from_f64(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(Decimal::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(raw: &str) -> Self {
        FieldValue::Text(raw.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(raw: String) -> Self {
        FieldValue::Text(raw)
    }
}

/// 夾取為非負數
pub fn normalize(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// 解析文字輸入並正規化（無效輸入 → 0）
pub fn coerce_str(raw: &str) -> Decimal {
    parse_decimal(raw).map(normalize).unwrap_or(Decimal::ZERO)
}

/// 轉換浮點輸入並正規化（NaN / 無窮大 → 0）
pub fn coerce_f64(value: f64) -> Decimal {
    normalize(from_f64(value))
}

fn from_f64(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}

/// 解析十進位文字，支援科學記號；空字串視為無效
fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
