//! 計價設定模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::input::normalize;
use crate::CostingError;

/// 計價設定（工時費率、工序比例、利潤率與稅率）
///
/// 所有百分比只有非負下限，沒有上限。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// 每分鐘工資
    pub cost_minute: Decimal,

    /// 裁剪時間佔基本工時的百分比
    pub cut_rate: Decimal,

    /// 包裝時間佔基本工時的百分比
    pub pack_rate: Decimal,

    /// 工坊利潤率（%）
    pub margin_atelier: Decimal,

    /// 增值稅率（%）
    pub tva: Decimal,

    /// 門市加價率（%）
    pub margin_boutique: Decimal,
}

impl PricingSettings {
    /// 創建新的計價設定（所有值夾取為非負數）
    pub fn new(
        cost_minute: Decimal,
        cut_rate: Decimal,
        pack_rate: Decimal,
        margin_atelier: Decimal,
        tva: Decimal,
        margin_boutique: Decimal,
    ) -> Self {
        Self {
            cost_minute: normalize(cost_minute),
            cut_rate: normalize(cut_rate),
            pack_rate: normalize(pack_rate),
            margin_atelier: normalize(margin_atelier),
            tva: normalize(tva),
            margin_boutique: normalize(margin_boutique),
        }
    }

    /// 建構器模式：設置每分鐘工資
    pub fn with_cost_minute(mut self, cost_minute: Decimal) -> Self {
        self.set(SettingField::CostMinute, cost_minute);
        self
    }

    /// 建構器模式：設置工序比例
    pub fn with_operation_rates(mut self, cut_rate: Decimal, pack_rate: Decimal) -> Self {
        self.set(SettingField::CutRate, cut_rate);
        self.set(SettingField::PackRate, pack_rate);
        self
    }

    /// 建構器模式：設置利潤率與稅率
    pub fn with_margins(mut self, margin_atelier: Decimal, tva: Decimal, margin_boutique: Decimal) -> Self {
        self.set(SettingField::MarginAtelier, margin_atelier);
        self.set(SettingField::Tva, tva);
        self.set(SettingField::MarginBoutique, margin_boutique);
        self
    }

    /// 讀取欄位
    pub fn get(&self, field: SettingField) -> Decimal {
        match field {
            SettingField::CostMinute => self.cost_minute,
            SettingField::CutRate => self.cut_rate,
            SettingField::PackRate => self.pack_rate,
            SettingField::MarginAtelier => self.margin_atelier,
            SettingField::Tva => self.tva,
            SettingField::MarginBoutique => self.margin_boutique,
        }
    }

    /// 設置欄位（夾取為非負數）
    pub fn set(&mut self, field: SettingField, value: Decimal) {
        let value = normalize(value);
        let slot = match field {
            SettingField::CostMinute => &mut self.cost_minute,
            SettingField::CutRate => &mut self.cut_rate,
            SettingField::PackRate => &mut self.pack_rate,
            SettingField::MarginAtelier => &mut self.margin_atelier,
            SettingField::Tva => &mut self.tva,
            SettingField::MarginBoutique => &mut self.margin_boutique,
        };
        *slot = value;
    }

    /// 重新夾取所有欄位（用於反序列化後）
    pub fn normalized(mut self) -> Self {
        for field in SettingField::ALL {
            let value = self.get(field);
            self.set(field, value);
        }
        self
    }
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            cost_minute: Decimal::new(80, 2),
            cut_rate: Decimal::from(10),
            pack_rate: Decimal::from(10),
            margin_atelier: Decimal::from(20),
            tva: Decimal::from(20),
            margin_boutique: Decimal::from(30),
        }
    }
}

/// 計價設定欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingField {
    CostMinute,
    CutRate,
    PackRate,
    MarginAtelier,
    Tva,
    MarginBoutique,
}

impl SettingField {
    pub const ALL: [SettingField; 6] = [
        SettingField::CostMinute,
        SettingField::CutRate,
        SettingField::PackRate,
        SettingField::MarginAtelier,
        SettingField::Tva,
        SettingField::MarginBoutique,
    ];
}

impl FromStr for SettingField {
    type Err = CostingError;

    /// 接受表單欄位名（camelCase）或 snake_case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "costMinute" | "cost_minute" => Ok(SettingField::CostMinute),
            "cutRate" | "cut_rate" => Ok(SettingField::CutRate),
            "packRate" | "pack_rate" => Ok(SettingField::PackRate),
            "marginAtelier" | "margin_atelier" => Ok(SettingField::MarginAtelier),
            "tva" => Ok(SettingField::Tva),
            "marginBoutique" | "margin_boutique" => Ok(SettingField::MarginBoutique),
            other => Err(CostingError::UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = PricingSettings::default();

        assert_eq!(settings.cost_minute, Decimal::new(8, 1));
        assert_eq!(settings.cut_rate, Decimal::from(10));
        assert_eq!(settings.pack_rate, Decimal::from(10));
        assert_eq!(settings.margin_atelier, Decimal::from(20));
        assert_eq!(settings.tva, Decimal::from(20));
        assert_eq!(settings.margin_boutique, Decimal::from(30));
    }

    #[test]
    fn test_settings_builder_clamps() {
        let settings = PricingSettings::default()
            .with_cost_minute(Decimal::from(-1))
            .with_operation_rates(Decimal::from(15), Decimal::from(-5))
            .with_margins(Decimal::from(250), Decimal::from(7), Decimal::ZERO);

        assert_eq!(settings.cost_minute, Decimal::ZERO);
        assert_eq!(settings.cut_rate, Decimal::from(15));
        assert_eq!(settings.pack_rate, Decimal::ZERO);
        // 百分比沒有上限
        assert_eq!(settings.margin_atelier, Decimal::from(250));
        assert_eq!(settings.tva, Decimal::from(7));
    }

    #[test]
    fn test_setting_field_parse() {
        assert_eq!("marginAtelier".parse::<SettingField>().unwrap(), SettingField::MarginAtelier);
        assert_eq!("cost_minute".parse::<SettingField>().unwrap(), SettingField::CostMinute);
        assert!(matches!(
            "discount".parse::<SettingField>(),
            Err(CostingError::UnknownField(_))
        ));
    }

    #[test]
    fn test_normalized_after_deserialize() {
        let json = r#"{"cost_minute":"-0.5","cut_rate":"10","pack_rate":"10",
            "margin_atelier":"20","tva":"20","margin_boutique":"-3"}"#;
        let settings: PricingSettings = serde_json::from_str(json).unwrap();
        let settings = settings.normalized();

        assert_eq!(settings.cost_minute, Decimal::ZERO);
        assert_eq!(settings.margin_boutique, Decimal::ZERO);
        assert_eq!(settings.tva, Decimal::from(20));
    }
}
