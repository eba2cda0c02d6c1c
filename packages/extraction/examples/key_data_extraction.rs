//! Key data extraction demo
//!
//! Runs the three extraction scenarios end to end against the live API:
//! a single-person review, the same shape through the collection form,
//! and a text mentioning several people.
//!
//! ```sh
//! GROQ_API_KEY=gsk-... cargo run -p extraction --example key_data_extraction
//! ```

use extraction::{Config, Extractor};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let extractor = Extractor::from_config(&config);

    let comment = "I absolutely love this product! It's been a game-changer for my \
        daily routine. The quality is top-notch and the customer service is \
        outstanding. I've recommended it to all my friends and family. \
        - Riyadh, Bangladesh";

    let person = extractor.extract_person(comment).await?;
    println!("Key data extraction:\n{person:#?}\n");

    let comment = "I'm so impressed with this product! It has truly transformed how \
        I approach my daily tasks. The quality exceeds my expectations, and the \
        customer support is truly exceptional. I've already suggested it to all my \
        colleagues and relatives. - Emily Clarke, Canada";

    let people = extractor.extract_people(comment).await?;
    println!("Key data extraction of a list of entities:\n{people:#?}\n");

    let text = "Riyadh riyadhgenai@gmail.com from Bangladesh recently reviewed a \
        book she loved. Meanwhile, Bob Smith from the USA shared his insights on \
        the same book in a different review. Both reviews were very insightful.";

    let people = extractor.extract_people(text).await?;
    println!("Key data extraction of a review with several users:\n{people:#?}");

    Ok(())
}
