//! 成本單工作階段
//!
//! 持有一次計算所需的全部可編輯輸入。任何影響計算的變更都會丟棄快取的快照，
//! `snapshot` 讀取時若沒有快取便整份重新計算（不做局部計算）。

use chrono::NaiveDate;
use costing_calc::{CalculationEngine, CalculationSnapshot};
use costing_core::{
    CostingConfig, FieldValue, MaterialBook, MaterialField, MaterialId, MaterialLine,
    OrderParameters, PricingSettings, SettingField, Unit,
};
use rust_decimal::Decimal;

/// 新增物料時的預設名稱
pub const NEW_MATERIAL_NAME: &str = "Nouvelle Matière";

/// 成本單
#[derive(Debug, Clone)]
pub struct CostSheet {
    product_name: String,
    document_date: NaiveDate,
    base_time: Decimal,

    /// 已套用的計價設定（引擎只讀這一份）
    settings: PricingSettings,

    /// 尚未套用的每分鐘工資
    pending_cost_minute: Decimal,

    order: OrderParameters,
    materials: MaterialBook,
    config: CostingConfig,
    engine: CalculationEngine,

    /// 最近一次的快照；輸入變更時清空
    cached: Option<CalculationSnapshot>,
}

impl CostSheet {
    /// 創建空白成本單
    pub fn new(config: CostingConfig) -> Self {
        let settings = config.settings.clone();
        Self {
            product_name: String::new(),
            document_date: chrono::Local::now().date_naive(),
            base_time: Decimal::ZERO,
            pending_cost_minute: settings.cost_minute,
            settings,
            order: config.order.clone(),
            materials: MaterialBook::new(),
            engine: CalculationEngine::new(&config),
            config,
            cached: None,
        }
    }

    /// 示範成本單：V 領 T 恤
    pub fn demo(config: CostingConfig) -> Self {
        let mut sheet = Self::new(config);
        sheet.set_product_name("T-shirt Col V");
        sheet.set_base_time(Decimal::new(63, 1));

        sheet.add_material_with("Tissu", Decimal::from(10), Decimal::new(80, 2), Unit::Meter);
        let fil = sheet.add_material_with("Fil", Decimal::from(10), Decimal::ZERO, Unit::Spool);
        sheet.add_material_with("Etiquette", Decimal::new(20, 2), Decimal::ONE, Unit::Piece);
        sheet.add_material_with("Sachet", Decimal::new(50, 2), Decimal::ONE, Unit::Piece);

        let thread = [
            (MaterialField::ThreadCapacity, Decimal::from(5000)),
            (MaterialField::ThreadMeters, Decimal::from(68)),
        ];
        for (field, value) in thread {
            if let Err(err) = sheet.update_material(fil, field, value) {
                tracing::error!("示範資料初始化失敗: {}", err);
            }
        }

        sheet
    }

    /// 建構器模式：設置單據日期
    pub fn with_document_date(mut self, date: NaiveDate) -> Self {
        self.document_date = date;
        self
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn document_date(&self) -> NaiveDate {
        self.document_date
    }

    pub fn base_time(&self) -> Decimal {
        self.base_time
    }

    pub fn settings(&self) -> &PricingSettings {
        &self.settings
    }

    pub fn pending_cost_minute(&self) -> Decimal {
        self.pending_cost_minute
    }

    pub fn order(&self) -> &OrderParameters {
        &self.order
    }

    pub fn materials(&self) -> &[MaterialLine] {
        self.materials.lines()
    }

    pub fn config(&self) -> &CostingConfig {
        &self.config
    }

    /// 設置產品名稱（不影響計算）
    pub fn set_product_name(&mut self, name: impl Into<String>) {
        self.product_name = name.into();
    }

    /// 設置單據日期（不影響計算）
    pub fn set_document_date(&mut self, date: NaiveDate) {
        self.document_date = date;
    }

    /// 設置基本工時（分鐘）
    pub fn set_base_time(&mut self, value: impl Into<FieldValue>) {
        self.base_time = value.into().to_non_negative();
        self.invalidate();
        tracing::debug!("基本工時: {}", self.base_time);
    }

    /// 即時套用計價設定欄位
    pub fn set_setting(&mut self, field: SettingField, value: impl Into<FieldValue>) {
        self.settings.set(field, value.into().to_non_negative());
        self.invalidate();
        tracing::debug!("計價設定 {:?}: {}", field, self.settings.get(field));
    }

    /// 暫存每分鐘工資，返回是否接受
    ///
    /// 負數會被忽略，暫存值保持不變；無法解析的輸入暫存為 0。
    pub fn stage_cost_minute(&mut self, value: impl Into<FieldValue>) -> bool {
        let value = value.into();
        if value.parse_number().is_some_and(|v| v < Decimal::ZERO) {
            tracing::warn!("忽略負數工資輸入: {:?}", value);
            return false;
        }

        self.pending_cost_minute = value.to_non_negative();
        true
    }

    /// 套用暫存的每分鐘工資
    pub fn apply_cost_minute(&mut self) {
        self.settings.set(SettingField::CostMinute, self.pending_cost_minute);
        self.invalidate();
        tracing::info!("套用每分鐘工資: {}", self.settings.cost_minute);
    }

    /// 設置生產數量
    pub fn set_order_qty(&mut self, value: impl Into<FieldValue>) {
        self.order.set_order_qty(value.into().to_non_negative());
        self.invalidate();
    }

    /// 設置損耗率
    pub fn set_waste_rate(&mut self, value: impl Into<FieldValue>) {
        self.order.set_waste_rate(value.into().to_non_negative());
        self.invalidate();
    }

    /// 新增預設物料（單價 0、用量 1 件）
    pub fn add_material(&mut self) -> MaterialId {
        self.add_material_with(NEW_MATERIAL_NAME, Decimal::ZERO, Decimal::ONE, Unit::Piece)
    }

    /// 新增物料
    pub fn add_material_with(
        &mut self,
        name: impl Into<String>,
        unit_price: Decimal,
        qty: Decimal,
        unit: Unit,
    ) -> MaterialId {
        let id = self.materials.create(name, unit_price, qty, unit).id;
        self.invalidate();
        tracing::debug!("新增物料 {}", id);
        id
    }

    /// 更新物料欄位
    pub fn update_material(
        &mut self,
        id: MaterialId,
        field: MaterialField,
        value: impl Into<FieldValue>,
    ) -> costing_core::Result<&MaterialLine> {
        let line = self.materials.update(id, field, value, &self.config)?;
        // 直接清空欄位：`line` 仍借用著物料清單
        self.cached = None;
        Ok(line)
    }

    /// 刪除物料，返回是否有記錄被刪除
    pub fn delete_material(&mut self, id: MaterialId) -> bool {
        let removed = self.materials.delete(id);
        if removed {
            self.invalidate();
            tracing::debug!("刪除物料 {}", id);
        }
        removed
    }

    /// 當前快照（輸入未變更時沿用上次結果）
    pub fn snapshot(&mut self) -> &CalculationSnapshot {
        if self.cached.is_none() {
            tracing::debug!("輸入已變更，重新計算");
        }
        let engine = &self.engine;
        let materials = &self.materials;
        let (base_time, settings, order) = (self.base_time, &self.settings, &self.order);

        self.cached
            .get_or_insert_with(|| engine.evaluate(materials.lines(), base_time, settings, order))
    }

    /// 是否持有與目前輸入一致的快照
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// 丟棄快取的快照
    fn invalidate(&mut self) {
        self.cached = None;
    }

    /// 直接重新計算，不讀寫快取
    pub fn evaluate(&self) -> CalculationSnapshot {
        self.engine.evaluate(
            self.materials.lines(),
            self.base_time,
            &self.settings,
            &self.order,
        )
    }
}

impl Default for CostSheet {
    fn default() -> Self {
        Self::new(CostingConfig::default())
    }
}
