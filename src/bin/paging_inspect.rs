//! Decodes a paging token and prints what it carries.
//!
//! Usage: `paging-inspect '<count>:<page>:<window>:<pageSize>,{...}'`

use std::env;

use dotenvy::dotenv;

use search_paging::WebPaging;
use search_paging::domain::search_keys::DynamicSearchKeys;
use search_paging::models::config::PagingConfig;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let paging_config = match PagingConfig::load(&app_env) {
        Ok(paging_config) => paging_config,
        Err(err) => {
            log::error!("Error loading paging config: {err}");
            std::process::exit(1);
        }
    };

    let Some(token) = env::args().nth(1) else {
        log::error!("Usage: paging-inspect <token>");
        std::process::exit(2);
    };

    let paging = match WebPaging::decode(
        &token,
        DynamicSearchKeys::new(),
        paging_config.bounds(),
    ) {
        Ok(paging) => paging,
        Err(err) => {
            log::error!("Invalid paging token: {err}");
            std::process::exit(1);
        }
    };

    println!("{paging}");

    match serde_json::to_string_pretty(&paging.to_search_keys()) {
        Ok(keys) => println!("{keys}"),
        Err(err) => log::error!("Failed to print search keys: {err}"),
    }

    let window = paging
        .window()
        .iter()
        .map(|snapshot| {
            if snapshot.page() == paging.page() {
                format!("[{}]", snapshot.page())
            } else {
                snapshot.page().to_string()
            }
        })
        .collect::<Vec<_>>();
    println!("pages: {}", window.join(" "));
}
