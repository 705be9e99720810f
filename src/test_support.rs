//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::api::{ApiError, Country, CountryName, CountrySource, Currency, Flags};
use crate::core::config::{ResolvedConfig, ThemeName};
use crate::core::action::{Action, Effect, update};
use crate::core::state::App;

#[allow(clippy::too_many_arguments)]
fn country(
    common: &str,
    official: &str,
    capital: &str,
    subregion: &str,
    population: u64,
    area: f64,
    languages: &[(&str, &str)],
    currencies: &[(&str, &str, &str)],
) -> Country {
    let code = common[..2].to_lowercase();
    Country {
        name: CountryName {
            common: common.to_string(),
            official: official.to_string(),
            native_name: Vec::new(),
        },
        capital: vec![capital.to_string()],
        flags: Flags {
            png: format!("https://flagcdn.com/w320/{code}.png"),
            svg: format!("https://flagcdn.com/{code}.svg"),
            alt: format!("The flag of {common}."),
        },
        region: "Europe".to_string(),
        subregion: subregion.to_string(),
        population,
        area,
        languages: languages
            .iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect(),
        currencies: currencies
            .iter()
            .map(|(code, name, symbol)| {
                (
                    code.to_string(),
                    Currency {
                        name: name.to_string(),
                        symbol: symbol.to_string(),
                    },
                )
            })
            .collect(),
    }
}

pub fn germany() -> Country {
    country(
        "Germany",
        "Federal Republic of Germany",
        "Berlin",
        "Western Europe",
        83783942,
        357114.0,
        &[("deu", "German")],
        &[("EUR", "Euro", "€")],
    )
}

pub fn france() -> Country {
    country(
        "France",
        "French Republic",
        "Paris",
        "Western Europe",
        67391582,
        551695.0,
        &[("fra", "French")],
        &[("EUR", "Euro", "€")],
    )
}

pub fn italy() -> Country {
    country(
        "Italy",
        "Italian Republic",
        "Rome",
        "Southern Europe",
        59554023,
        301336.0,
        &[("ita", "Italian")],
        &[("EUR", "Euro", "€")],
    )
}

/// Multi-language, multi-currency record.
pub fn switzerland() -> Country {
    country(
        "Switzerland",
        "Swiss Confederation",
        "Bern",
        "Western Europe",
        8654622,
        41284.0,
        &[("fra", "French"), ("gsw", "Swiss German"), ("ita", "Italian")],
        &[("EUR", "Euro", "€"), ("CHF", "Swiss franc", "Fr")],
    )
}

/// A source that hands back a fixed result without touching the network.
pub struct StaticSource(pub Result<Vec<Country>, ApiError>);

#[async_trait]
impl CountrySource for StaticSource {
    fn endpoint(&self) -> String {
        "static://countries".to_string()
    }

    async fn fetch_countries(&self) -> Result<Vec<Country>, ApiError> {
        self.0.clone()
    }
}

pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        base_url: "http://localhost".to_string(),
        region: "europe".to_string(),
        timeout: None,
        stale_time: std::time::Duration::from_secs(300),
        theme: ThemeName::Dark,
    }
}

/// Creates a test App with no data loaded yet.
pub fn test_app() -> App {
    App::new(Arc::new(StaticSource(Ok(Vec::new()))), &test_config())
}

/// Creates a test App whose country query already succeeded.
pub fn loaded_app(countries: Vec<Country>) -> App {
    let mut app = test_app();
    let key = app.countries_key.clone();
    let generation = app.queries.begin_fetch(&key);
    app.queries
        .resolve(&key, generation, Ok(countries), std::time::Instant::now());
    app
}

/// Delivers `result` for whichever fetch is currently in flight.
pub fn finish_fetch(app: &mut App, result: Result<Vec<Country>, String>) -> Effect {
    let generation = app.queries.in_flight(&app.countries_key).unwrap_or_default();
    update(app, Action::CountriesLoaded(generation, result))
}
