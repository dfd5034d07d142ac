//! 集成測試

use garment_costing::*;
use rust_decimal::Decimal;

fn tshirt_sheet() -> CostSheet {
    // 從空白成本單逐步輸入，模擬使用者操作
    let mut sheet = CostSheet::new(CostingConfig::default());
    sheet.set_product_name("T-shirt Col V");
    sheet.set_base_time("6.3");

    let tissu = sheet.add_material();
    sheet.update_material(tissu, MaterialField::Name, "Tissu").unwrap();
    sheet.update_material(tissu, MaterialField::Unit, "m").unwrap();
    sheet.update_material(tissu, MaterialField::UnitPrice, "10").unwrap();
    sheet.update_material(tissu, MaterialField::Qty, "0.80").unwrap();

    let fil = sheet.add_material();
    sheet.update_material(fil, MaterialField::Name, "Fil").unwrap();
    sheet.update_material(fil, MaterialField::UnitPrice, "10").unwrap();
    sheet.update_material(fil, MaterialField::Unit, "bobine").unwrap();
    sheet.update_material(fil, MaterialField::ThreadMeters, "68").unwrap();

    let etiquette = sheet.add_material();
    sheet.update_material(etiquette, MaterialField::Name, "Etiquette").unwrap();
    sheet.update_material(etiquette, MaterialField::UnitPrice, "0.20").unwrap();

    let sachet = sheet.add_material();
    sheet.update_material(sachet, MaterialField::Name, "Sachet").unwrap();
    sheet.update_material(sachet, MaterialField::UnitPrice, "0.50").unwrap();

    sheet
}

#[test]
fn test_end_to_end_tshirt() {
    let mut sheet = tshirt_sheet();

    let fil = &sheet.materials()[1];
    assert_eq!(fil.thread_capacity, Decimal::from(5000));
    assert_eq!(fil.qty, Decimal::new(136, 4));

    let snapshot = sheet.snapshot();

    assert_eq!(snapshot.cut_time, Decimal::new(63, 2));
    assert_eq!(snapshot.pack_time, Decimal::new(63, 2));
    assert_eq!(snapshot.total_time, Decimal::new(756, 2));
    assert_eq!(snapshot.labor_cost, Decimal::new(6048, 3));
    assert_eq!(snapshot.total_materials, Decimal::new(8836, 3));
    assert_eq!(snapshot.cost_price, Decimal::new(14884, 3));
    assert_eq!(snapshot.sell_price_ht, Decimal::new(178608, 4));
    assert_eq!(snapshot.sell_price_ttc, Decimal::new(2143296, 5));
    assert_eq!(snapshot.boutique_price, Decimal::new(27862848, 6));
}

#[test]
fn test_purchasing_forecast_for_order() {
    let mut sheet = tshirt_sheet();
    sheet.set_order_qty(100u32);
    sheet.set_waste_rate(5u32);

    let snapshot = sheet.snapshot();
    let tissu = &snapshot.purchasing_lines[0];
    let fil = &snapshot.purchasing_lines[1];

    // 布料：連續單位，四捨五入到 2 位
    assert_eq!(tissu.total_raw, Decimal::from(80));
    assert_eq!(tissu.total_with_waste, Decimal::from(84));
    assert_eq!(tissu.qty_to_buy, Decimal::new(8400, 2));

    // 線軸：不可分割，進位到整數
    assert_eq!(fil.total_raw, Decimal::new(136, 2));
    assert_eq!(fil.total_with_waste, Decimal::new(1428, 3));
    assert_eq!(fil.qty_to_buy, Decimal::from(2));

    assert_eq!(snapshot.total_purchasing_mat_cost, Decimal::new(9335, 1));
}

#[test]
fn test_purchasing_independent_of_ladder() {
    let mut sheet = tshirt_sheet();
    let before = sheet.snapshot().clone();

    sheet.set_setting(SettingField::MarginBoutique, "80");
    let after = sheet.snapshot().clone();

    assert_ne!(before.boutique_price, after.boutique_price);
    assert_eq!(before.purchasing_lines, after.purchasing_lines);
    assert_eq!(before.total_purchasing_mat_cost, after.total_purchasing_mat_cost);
}

#[test]
fn test_delete_keeps_remaining_ids() {
    let mut sheet = tshirt_sheet();
    let before: Vec<_> = sheet.materials().iter().filter(|m| m.id != 2).cloned().collect();

    assert!(sheet.delete_material(2));
    assert_eq!(sheet.materials(), before.as_slice());

    let id = sheet.add_material();
    assert_eq!(id, 5);

    sheet.delete_material(5);
    sheet.delete_material(4);
    assert_eq!(sheet.add_material(), 4);
}

#[test]
fn test_configured_engine() {
    let config = CostingConfig::from_json_str(
        r#"{
            "default_spool_capacity": "2000",
            "purchase_decimals": 1,
            "order": { "order_qty": "30", "waste_rate": "0" }
        }"#,
    )
    .unwrap();

    let mut sheet = CostSheet::new(config);
    let fil = sheet.add_material_with("Fil", Decimal::from(3), Decimal::ONE, Unit::Piece);
    sheet.update_material(fil, MaterialField::Unit, "bobine").unwrap();
    sheet.update_material(fil, MaterialField::ThreadMeters, "150").unwrap();
    assert_eq!(sheet.materials()[0].thread_capacity, Decimal::from(2000));
    let tissu = sheet.add_material_with("Tissu", Decimal::from(10), Decimal::new(333, 3), Unit::Meter);

    let snapshot = sheet.snapshot();
    let lines = &snapshot.purchasing_lines;

    // 150 / 2000 = 0.075，× 30 = 2.25 → 3 個線軸
    assert_eq!(lines[0].qty_to_buy, Decimal::from(3));
    // 0.333 × 30 = 9.99 → 10.0（1 位小數）
    assert_eq!(lines[1].material_id, tissu);
    assert_eq!(lines[1].qty_to_buy, Decimal::from(10));
}

#[test]
fn test_snapshot_json_contract() {
    let mut sheet = tshirt_sheet();
    let json = serde_json::to_value(sheet.snapshot()).unwrap();

    for key in [
        "total_materials",
        "cut_time",
        "pack_time",
        "total_time",
        "labor_cost",
        "cost_price",
        "sell_price_ht",
        "sell_price_ttc",
        "boutique_price",
        "purchasing_lines",
        "total_purchasing_mat_cost",
    ] {
        assert!(json.get(key).is_some(), "缺少欄位 {key}");
    }
}

#[test]
fn test_spool_created_directly_has_no_capacity() {
    let mut sheet = CostSheet::default();
    let fil = sheet.add_material_with("Fil", Decimal::from(10), Decimal::new(136, 4), Unit::Spool);

    let line = &sheet.materials()[0];
    assert_eq!(line.id, fil);
    assert_eq!(line.thread_capacity, Decimal::ZERO);
    assert_eq!(line.thread_meters, Decimal::ZERO);
    assert_eq!(line.qty, Decimal::ZERO);

    // 容量為 0 的線軸會產生警告，但計算照常完成
    assert!(sheet.snapshot().has_warnings(WarningSeverity::Warning));
}
