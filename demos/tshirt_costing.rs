//! V 領 T 恤成本計算範例
//!
//! 展示從物料、工時到價格階梯的完整流程

use garment_costing::{CostSheet, CostingConfig, MaterialField, SettingField};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    println!("===== T-shirt Costing Example =====\n");

    let mut sheet = CostSheet::demo(CostingConfig::default());
    let currency = "DH";

    println!("[1] Materials ({})", sheet.product_name());
    for m in sheet.materials() {
        println!(
            "    #{} {:<10} {:>6} x {:<8} {:<7} = {:.2} {}",
            m.id,
            m.name,
            m.unit_price,
            m.qty,
            m.unit,
            m.line_cost(),
            currency
        );
    }

    let s = sheet.snapshot().rounded(2);
    println!("\n[2] Timing");
    println!("    Cut {} + Pack {} => Total {} min", s.cut_time, s.pack_time, s.total_time);

    println!("\n[3] Price Ladder");
    println!("    Materials   {} {}", s.total_materials, currency);
    println!("    Labor       {} {}", s.labor_cost, currency);
    println!("    Cost price  {} {}", s.cost_price, currency);
    println!("    Sell HT     {} {}", s.sell_price_ht, currency);
    println!("    Sell TTC    {} {}", s.sell_price_ttc, currency);
    println!("    Boutique    {} {}", s.boutique_price, currency);

    // 修改設定：暫存工資後套用，並把線軸改為 3000 米
    println!("\n[4] Apply new cost per minute and spool size");
    sheet.stage_cost_minute("1.10");
    sheet.apply_cost_minute();
    sheet.set_setting(SettingField::MarginBoutique, "45");
    sheet.update_material(2, MaterialField::ThreadCapacity, "3000")?;

    let s = sheet.snapshot().rounded(2);
    println!("    Labor       {} {}", s.labor_cost, currency);
    println!("    Boutique    {} {}", s.boutique_price, currency);

    println!("\n[5] Snapshot JSON");
    println!("{}", serde_json::to_string_pretty(sheet.snapshot())?);

    Ok(())
}
