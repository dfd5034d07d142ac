//! 訂單採購預估範例

use garment_costing::{CostSheet, CostingConfig, WarningSeverity};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("===== Order Purchasing Forecast =====\n");

    let config = match std::env::args().nth(1) {
        Some(path) => CostingConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => CostingConfig::default(),
    };

    let mut sheet = CostSheet::demo(config);
    // 新增一項未定價物料，會出現在警告中
    sheet.add_material();

    for (qty, waste) in [(100u32, 5u32), (250, 8), (1000, 3)] {
        sheet.set_order_qty(qty);
        sheet.set_waste_rate(waste);

        let s = sheet.snapshot().rounded(2);
        println!("Order {qty} pcs, waste {waste}%");
        for line in &s.purchasing_lines {
            println!(
                "    {:<18} need {:>9} buy {:>8} {:<7} = {:>9}",
                line.name, line.total_with_waste, line.qty_to_buy, line.unit, line.line_cost
            );
        }
        println!("    Budget: {}\n", s.total_purchasing_mat_cost);

        if s.has_warnings(WarningSeverity::Info) {
            for w in &s.warnings {
                println!("    ! material #{}: {}", w.material_id, w.message);
            }
            println!();
        }
    }

    Ok(())
}
