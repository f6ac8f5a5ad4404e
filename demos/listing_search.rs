use lodgehaus::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🏠 LodgeHaus listing search\n");

    // Statements can be inspected without a database
    let criteria = FilterCriteria::new()
        .city("van")
        .minimum_price_per_night(50)
        .minimum_rating(4);

    let (sql, params) = build_property_filter_query(&criteria, 5)?;
    println!("SQL:    {}", sql);
    println!("Params: {:?}\n", params);

    // Criteria usually arrive as a loosely typed map (query string, JSON body)
    let from_request: FilterCriteria = serde_json::from_value(json!({
        "city": "Vancouver",
        "maximum_price_per_night": "200",
        "minimum_rating": ""
    }))?;
    let statement = PropertyFilterQuery::new(from_request).build_statement()?;
    println!("SQL:    {}", statement.sql);
    println!("Params: {:?}\n", statement.params);

    // Against a database configured by LODGEHAUS_CONFIG or ./lodgehaus.toml
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            println!("⚠️  No database configuration ({}), stopping here", e);
            return Ok(());
        }
    };

    let lodgehaus = LodgeHaus::from_config(config).await?;
    lodgehaus.health_check().await?;
    println!("✅ Database connected");

    let listings = lodgehaus.listings();
    for listing in listings.search_properties(&criteria, None).await? {
        println!(
            "  {} in {}: {} per night, rated {:.1}",
            listing.property.title,
            listing.property.city,
            listing.property.cost_per_night as f64 / 100.0,
            listing.average_rating.unwrap_or_default()
        );
    }

    Ok(())
}
