//! Starter data for demo catalogs.

use tracing::info;

use folio_core::model::{NewAuthor, NewBook};
use folio_core::{CatalogService, Result};

const FIRE_AND_BLOOD_BLURB: &str = "Long before the events in A Game of Thrones, House Targaryen, the sole surviving dragonlord lineage post-Valyria's destruction, made Dragonstone their home. Fire and Blood commences with Aegon the Conqueror, the Iron Throne's founder, and proceeds to chronicle generations of Targaryen struggles for dominance, culminating in a perilous civil conflict.";

/// Seeds one author and one book so a fresh demo has something to show.
///
/// A catalog that already holds authors is left untouched.
pub async fn seed_demo_catalog(catalog: &CatalogService) -> Result<()> {
    if !catalog.list_authors().await?.is_empty() {
        info!(target: "catalog.seed", "catalog already populated, skipping demo seed");
        return Ok(());
    }

    let author = catalog
        .create_author(NewAuthor {
            first_name: "George R.R.".to_string(),
            last_name: "Martin".to_string(),
        })
        .await?;

    let book = catalog
        .create_book(
            author.id,
            NewBook {
                name: "Fire & Blood".to_string(),
                description: FIRE_AND_BLOOD_BLURB.to_string(),
                isbn: "8675309".to_string(),
            },
        )
        .await?;

    info!(
        target: "catalog.seed",
        author_id = author.id,
        book_id = book.id,
        "demo catalog seeded"
    );

    Ok(())
}
