//! Seed the book table with a small fixed catalogue, for local development.

use book_api::config::EnvConfig;
use book_api::db::service::DbService;
use book_api::types::book::NewBook;
use chrono::NaiveDate;
use std::sync::Arc;

const CATALOGUE: &[(&str, &str, (i32, u32, u32))] = &[
    ("The Left Hand of Darkness", "Ursula K. Le Guin", (1969, 3, 1)),
    ("Neuromancer", "William Gibson", (1984, 7, 1)),
    ("The Dispossessed", "Ursula K. Le Guin", (1974, 5, 1)),
    ("Snow Crash", "Neal Stephenson", (1992, 6, 1)),
    ("Hyperion", "Dan Simmons", (1989, 5, 26)),
    ("A Fire Upon the Deep", "Vernor Vinge", (1992, 4, 1)),
    ("The Dream Machine", "M. Mitchell Waldrop", (2001, 8, 20)),
    ("Soul of a New Machine", "Tracy Kidder", (1981, 7, 1)),
    ("Masters of Doom", "David Kushner", (2003, 4, 24)),
    ("The Cuckoo's Egg", "Clifford Stoll", (1989, 10, 26)),
];

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let db = Arc::new(
        DbService::new(&config.db_url)
            .await
            .expect("Failed to initialize database service"),
    );

    let mut inserted = 0u32;
    for (title, author, (y, m, d)) in CATALOGUE {
        let Some(published_date) = NaiveDate::from_ymd_opt(*y, *m, *d) else {
            continue;
        };
        match db
            .insert_book(NewBook {
                title: (*title).to_string(),
                author: (*author).to_string(),
                published_date,
            })
            .await
        {
            Ok(book) => {
                inserted += 1;
                log::info!("seeded book {}: {}", book.id, book.title);
            }
            Err(e) => eprintln!("failed to seed {title:?}: {e}"),
        }
    }

    println!("seeded {inserted} books");
    Ok(())
}
