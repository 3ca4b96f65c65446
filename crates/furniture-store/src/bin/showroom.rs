//! # Showroom
//!
//! Stocks a demo store, runs a few sales and prints the inventory report.
//!
//! ## Usage
//! ```bash
//! cargo run -p furniture-store --bin showroom
//!
//! # Custom store name and a 30% discount ceiling
//! FURNITURE_STORE_NAME="Casa Nova" FURNITURE_MAX_DISCOUNT=30 \
//!     cargo run -p furniture-store --bin showroom
//!
//! # Quieter logs
//! RUST_LOG=warn cargo run -p furniture-store --bin showroom
//! ```

use furniture_core::{
    Armchair, Bed, BedSize, Category, Chair, ConversionMechanism, Desk, DiningSet, DrawerUnit,
    Furniture, FurnitureDetails, FurnitureKind, Money, Shape, Sofa, SofaBed, Table, Upholstery,
    ValidationError, Wardrobe,
};
use furniture_store::{FurnitureStore, SaleRecord, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = StoreConfig::from_env()?;
    info!(
        store = %config.store_name,
        max_discount = config.max_discount_pct,
        "Starting showroom"
    );

    let mut store = FurnitureStore::new(config);

    let office_chair = Chair::new(details("Ergo", "steel", "black", 300)?)
        .with_upholstery(Upholstery::Leather)
        .with_adjustable_height(true)
        .with_wheels(true);
    let office_chair_id = store.add_furniture(office_chair)?;

    store.add_furniture(
        Armchair::new(details("Lounge", "walnut", "brown", 400)?).with_reclining(true),
    )?;
    let milano = Sofa::new(details("Milano", "beech", "grey", 1000)?).with_cushions(true);
    let sofa_id = store.add_furniture(milano)?;

    let mut sofa_bed = SofaBed::new(details("Deluxe", "pine", "blue", 1500)?)
        .with_mechanism(ConversionMechanism::Hydraulic);
    println!("{}", sofa_bed.convert_to_bed());
    println!("{}", sofa_bed.convert_to_bed());
    sofa_bed.convert_to_sofa();
    store.add_furniture(sofa_bed)?;

    let studio = details("Studio", "oak", "white", 300)?;
    store.add_furniture(
        Desk::new(studio, Shape::Corner, 1.2)?
            .with_drawers(true, 3)
            .with_lighting(true),
    )?;
    let grande = details("Grande", "oak", "white", 400)?;
    store.add_furniture(Wardrobe::new(grande, 2.0)?.with_doors(3).with_mirrors(true))?;
    let compact = details("Compact", "pine", "natural", 150)?;
    store.add_furniture(DrawerUnit::new(compact, 0.5)?.with_push_open(true))?;
    store.add_furniture(
        Bed::new(details("Dream", "walnut", "brown", 800)?).with_size(BedSize::Queen),
    )?;

    let table = Table::new(
        details("Nordic", "oak", "natural", 500)?,
        Shape::Rectangular,
        1.5,
    )?;
    let mut family = DiningSet::new("Family", table)?;
    for seat in 1..=4 {
        let name = format!("Nordic chair {}", seat);
        family.add_chair(Chair::new(details(&name, "oak", "natural", 150)?))?;
    }
    println!("{}\n", family.full_description());
    store.add_dining_set(family);

    store.apply_discount(FurnitureKind::Sofa, 10.0)?;
    store.apply_discount(FurnitureKind::Chair, 5.0)?;

    for item in store.search_by_name("o") {
        println!("{}: {}", item, item.price());
    }
    println!();

    for category in [Category::Seating, Category::Sleeping] {
        let names: Vec<&str> = store
            .filter_by_category(category)
            .into_iter()
            .map(|item| item.name())
            .collect();
        println!("{}: {}", category, names.join(", "));
    }
    println!();

    let sale = store.sell(&sofa_id, Some("Ana"))?;
    print_sale(&sale);
    let sale = store.sell(&office_chair_id, None)?;
    print_sale(&sale);
    println!();

    println!("{}", store.inventory_report());
    println!();
    println!("{}", serde_json::to_string_pretty(&store.stats())?);

    Ok(())
}

fn details(
    name: &str,
    material: &str,
    color: &str,
    major: i64,
) -> Result<FurnitureDetails, ValidationError> {
    FurnitureDetails::new(name, material, color, Money::from_major(major))
}

fn print_sale(sale: &SaleRecord) {
    println!(
        "Sold {} to {} for {} (was {})",
        sale.item_name, sale.customer, sale.final_price, sale.original_price
    );
}

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - ERROR: Critical failures
/// - WARN: Recoverable issues
/// - INFO: Inventory changes and sales
/// - DEBUG: Searches and filters
///
/// Set `RUST_LOG=debug` for verbose output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,furniture=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
