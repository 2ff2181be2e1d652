use assetplane_catalog::catalog::{
    AgentDirectory, CatalogSource, CatalogStore, FixtureCatalog, HttpCatalog,
};
use assetplane_catalog::config::CatalogConfig;
use assetplane_catalog::debounce::spawn_debounced;
use assetplane_catalog::filter::AgentFilter;
use assetplane_catalog::geo::{dms_to_decimal, parse_coordinates, Coordinates};
use assetplane_catalog::persistence::FileStore;
use assetplane_catalog::{FilterInput, PropertyManager, ResultsView};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 AssetPlane Property Catalog");
    info!("==============================");

    let config = match std::env::args().nth(1) {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };

    let source: Box<dyn CatalogSource> = match &config.catalog_url {
        Some(url) => Box::new(HttpCatalog::new(url.clone())?),
        None => Box::new(FixtureCatalog::new()),
    };
    let catalog = CatalogStore::load_from(source.as_ref()).await;

    let store = FileStore::open(&config.storage_path)?;
    let mut manager = PropertyManager::new(catalog, store, &config);
    print_results(&manager.view(), |id| manager.is_favorite(id));

    // Simulate typing into the search box; only the settled term is applied
    let (keys_tx, keys_rx) = mpsc::unbounded_channel();
    let (commit_tx, mut commit_rx) = mpsc::unbounded_channel();
    let debouncer = spawn_debounced(config.search_debounce(), keys_rx, commit_tx);
    for typed in ["l", "la", "lag", "lago", "lagos"] {
        keys_tx.send(typed.to_string())?;
    }
    drop(keys_tx);

    while let Some(term) = commit_rx.recv().await {
        info!("Searching for {:?}", term);
        manager.on_search_committed(FilterInput::default().with_search(term));
        print_results(&manager.view(), |id| manager.is_favorite(id));
    }
    debouncer.await?;

    info!("Filtering by price range 700000-1300000 with 2+ bedrooms...");
    manager.on_filter_input_changed(
        FilterInput::default()
            .with_price_range("700000-1300000")
            .with_bedrooms("2"),
    );
    while manager.on_load_more_clicked() {}

    let first_visible = manager.view().listings.first().map(|l| l.id);
    if let Some(first) = first_visible {
        let saved = manager.on_favorite_toggled(first);
        info!("Listing {} {}", first, if saved { "saved" } else { "removed from favorites" });
    }
    print_results(&manager.view(), |id| manager.is_favorite(id));

    info!(
        "Recent searches: {}",
        manager.search_history().terms().join(", ")
    );
    info!("Suggestions for \"la\": {:?}", manager.search_suggestions("la"));

    // Book a viewing and list the user's inspections
    let user = "demo@assetplane.com";
    if let Some(first) = first_visible {
        match manager.schedule_inspection(first, Some(user), "2030-01-15") {
            Ok(inspection) => info!("Inspection {} booked for {}", inspection.id, inspection.date),
            Err(err) => warn!("Could not book inspection: {:#}", err),
        }
    }
    for inspection in manager.inspections_for(user) {
        println!(
            "Inspection: {} on {} ({:?})",
            inspection.property_name, inspection.date, inspection.status
        );
    }

    // Geo-verify a photo of the Victoria Island villa
    let claimed = parse_coordinates("6.4281, 3.4219")?;
    let photo = Coordinates::new(
        dms_to_decimal(6.0, 25.0, 42.0, "N"),
        dms_to_decimal(3.0, 25.0, 19.0, "E"),
    );
    let verification = manager.verify_photo_location(claimed, photo);
    println!(
        "\nPhoto location check: {:.0} m away, {}",
        verification.distance_m,
        if verification.verified { "✅ verified" } else { "❌ too far" }
    );

    // Agent directory
    let agents = AgentDirectory::fixture();
    println!("\nSpecialties: all, {}", agents.specialties().join(", "));
    for agent in agents.filter(&AgentFilter::default().with_specialty("luxury")) {
        println!(
            "{}, {} ({}, ⭐ {} from {} reviews)",
            agent.name, agent.title, agent.location, agent.rating, agent.reviews
        );
    }

    // Save the current result set
    let json = serde_json::to_string_pretty(&manager.view())?;
    tokio::fs::write("filtered_properties.json", json).await?;
    info!("💾 Saved current results to filtered_properties.json");

    Ok(())
}

fn print_results(view: &ResultsView<'_>, is_favorite: impl Fn(u32) -> bool) {
    println!("\n{} (showing {})\n", view.summary(), view.listings.len());

    for (i, listing) in view.listings.iter().enumerate() {
        let saved = if is_favorite(listing.id) { " ❤️" } else { "" };
        println!("{}. {} (${}){}", i + 1, listing.title, listing.price, saved);
        println!("   {} · {}", listing.property_type, listing.location);
        println!(
            "   {} beds, {} baths, {} sq ft, built {}",
            listing.bedrooms, listing.bathrooms, listing.area, listing.year_built
        );
        println!("   Amenities: {}", listing.amenities.join(", "));
        println!("   Listed by {}", listing.agent_name);
        println!();
    }

    if view.has_more {
        println!("{}\n", view.load_more_label());
    }
}
