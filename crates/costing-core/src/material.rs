//! 物料用量模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::arith;
use crate::config::CostingConfig;
use crate::input::{normalize, FieldValue};
use crate::unit::{Unit, UnitRule};
use crate::{CostingError, Result};

/// 物料ID（單調遞增）
pub type MaterialId = u64;

/// 物料用量記錄（每件成品的消耗）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialLine {
    /// 物料ID
    pub id: MaterialId,

    /// 名稱
    pub name: String,

    /// 單價
    pub unit_price: Decimal,

    /// 每件用量（以 `unit` 計）
    pub qty: Decimal,

    /// 計量單位
    pub unit: Unit,

    /// 每件耗線長度（米），僅線軸適用
    pub thread_meters: Decimal,

    /// 線軸容量（米），僅線軸適用
    pub thread_capacity: Decimal,
}

impl MaterialLine {
    /// 創建新的物料記錄，線長與線軸容量皆為 0
    ///
    /// 線軸的用量一律由線長推導，建立時容量為 0，因此用量為 0。
    /// 預設容量只在之後把單位切換為線軸時套用。
    pub fn new(id: MaterialId, name: String, unit_price: Decimal, qty: Decimal, unit: Unit) -> Self {
        let mut line = Self {
            id,
            name,
            unit_price: normalize(unit_price),
            qty: normalize(qty),
            unit,
            thread_meters: Decimal::ZERO,
            thread_capacity: Decimal::ZERO,
        };
        if line.rule().is_thread_derived() {
            line.derive_qty();
        }
        line
    }

    /// 建構器模式：設置線長與線軸容量（僅線軸會重新推導用量）
    pub fn with_thread(mut self, thread_meters: Decimal, thread_capacity: Decimal) -> Self {
        self.thread_meters = normalize(thread_meters);
        self.thread_capacity = normalize(thread_capacity);
        if self.rule().is_thread_derived() {
            self.derive_qty();
        }
        self
    }

    /// 單位規則
    pub fn rule(&self) -> UnitRule {
        self.unit.rule()
    }

    /// 每件物料成本
    pub fn line_cost(&self) -> Decimal {
        arith::mul(self.unit_price, self.qty)
    }

    /// 更新欄位
    pub fn apply(&mut self, field: MaterialField, value: FieldValue, config: &CostingConfig) {
        match field {
            MaterialField::Name => self.name = value.into_text(),
            MaterialField::Unit => self.switch_unit(Unit::from(value.into_text()), config),
            MaterialField::UnitPrice => self.unit_price = value.to_non_negative(),
            MaterialField::Qty => {
                // 線軸用量由線長推導，不接受直接輸入
                if !self.rule().is_thread_derived() {
                    self.qty = value.to_non_negative();
                }
            }
            MaterialField::ThreadMeters => {
                self.thread_meters = value.to_non_negative();
                if self.rule().is_thread_derived() {
                    self.derive_qty();
                }
            }
            MaterialField::ThreadCapacity => {
                self.thread_capacity = value.to_non_negative();
                if self.rule().is_thread_derived() {
                    self.derive_qty();
                }
            }
        }
    }

    /// 切換單位；首次進入線軸模式時初始化容量
    fn switch_unit(&mut self, unit: Unit, config: &CostingConfig) {
        self.unit = unit;
        if !self.rule().is_thread_derived() {
            return;
        }

        if self.thread_capacity.is_zero() {
            self.thread_capacity = normalize(config.default_spool_capacity);
            self.thread_meters = Decimal::ZERO;
            self.qty = Decimal::ZERO;
        } else {
            self.derive_qty();
        }
    }

    /// 用量 = 線長 / 線軸容量（容量為 0 時為 0）
    fn derive_qty(&mut self) {
        self.qty = arith::ratio(self.thread_meters, self.thread_capacity);
    }
}

/// 物料欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialField {
    Name,
    Unit,
    UnitPrice,
    Qty,
    ThreadMeters,
    ThreadCapacity,
}

impl FromStr for MaterialField {
    type Err = CostingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(MaterialField::Name),
            "unit" => Ok(MaterialField::Unit),
            "unitPrice" | "unit_price" => Ok(MaterialField::UnitPrice),
            "qty" => Ok(MaterialField::Qty),
            "threadMeters" | "thread_meters" => Ok(MaterialField::ThreadMeters),
            "threadCapacity" | "thread_capacity" => Ok(MaterialField::ThreadCapacity),
            other => Err(CostingError::UnknownField(other.to_string())),
        }
    }
}

/// 物料清單
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialBook {
    lines: Vec<MaterialLine>,
}

impl MaterialBook {
    /// 創建空清單
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// 由既有記錄建立
    pub fn from_lines(lines: Vec<MaterialLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[MaterialLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, id: MaterialId) -> Option<&MaterialLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// 下一個ID：目前最大ID + 1，空清單為 1
    pub fn next_id(&self) -> MaterialId {
        self.lines.iter().map(|line| line.id).max().map_or(1, |max| max + 1)
    }

    /// 新增物料
    pub fn create(
        &mut self,
        name: impl Into<String>,
        unit_price: Decimal,
        qty: Decimal,
        unit: Unit,
    ) -> &MaterialLine {
        let line = MaterialLine::new(self.next_id(), name.into(), unit_price, qty, unit);
        self.lines.push(line);
        &self.lines[self.lines.len() - 1]
    }

    /// 加入已建立的記錄（ID 由呼叫端負責）
    pub fn push(&mut self, line: MaterialLine) {
        self.lines.push(line);
    }

    /// 更新物料欄位
    pub fn update(
        &mut self,
        id: MaterialId,
        field: MaterialField,
        value: impl Into<FieldValue>,
        config: &CostingConfig,
    ) -> Result<&MaterialLine> {
        let line = self
            .lines
            .iter_mut()
            .find(|line| line.id == id)
            .ok_or(CostingError::MaterialNotFound(id))?;

        line.apply(field, value.into(), config);
        Ok(line)
    }

    /// 刪除物料，返回是否有記錄被刪除
    pub fn delete(&mut self, id: MaterialId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        self.lines.len() != before
    }

    /// 每件物料總成本
    pub fn total_cost(&self) -> Decimal {
        arith::sum(self.lines.iter().map(MaterialLine::line_cost))
    }
}
