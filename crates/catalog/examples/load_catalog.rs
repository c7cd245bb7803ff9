use catalog::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/lumora.json");

    println!("Loading catalog from {}...\n", path.display());

    let start = Instant::now();
    let catalog = Catalog::load_from_file(path)
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Questions: {}", catalog.len());
    for (id, product) in catalog.products().iter() {
        println!("  {:<8} {} ({})", id, product.name, product.display_price());
    }
    println!(
        "\nMatches built-in dataset: {}",
        catalog == Catalog::lumora()
    );
}
