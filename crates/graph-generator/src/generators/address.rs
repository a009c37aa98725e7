//! Address, geo and phone generators.

use super::pattern::numerify;
use super::person::{first_name, last_name, pick};
use rand::Rng;

const CITY_PREFIXES: &[&str] = &["North", "East", "West", "South", "New", "Lake", "Port", "Fort"];
const CITY_SUFFIXES: &[&str] = &[
    "town", "ton", "land", "ville", "berg", "burgh", "borough", "bury", "view", "port", "mouth",
    "stad", "furt", "chester", "fort", "haven", "side", "shire",
];
const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard", "Way", "Terrace",
];

const COUNTRIES: &[(&str, &str)] = &[
    ("Argentina", "AR"),
    ("Australia", "AU"),
    ("Austria", "AT"),
    ("Belgium", "BE"),
    ("Brazil", "BR"),
    ("Canada", "CA"),
    ("Chile", "CL"),
    ("China", "CN"),
    ("Denmark", "DK"),
    ("Egypt", "EG"),
    ("Finland", "FI"),
    ("France", "FR"),
    ("Germany", "DE"),
    ("Greece", "GR"),
    ("India", "IN"),
    ("Ireland", "IE"),
    ("Italy", "IT"),
    ("Japan", "JP"),
    ("Kenya", "KE"),
    ("Mexico", "MX"),
    ("Netherlands", "NL"),
    ("New Zealand", "NZ"),
    ("Nigeria", "NG"),
    ("Norway", "NO"),
    ("Peru", "PE"),
    ("Poland", "PL"),
    ("Portugal", "PT"),
    ("South Africa", "ZA"),
    ("South Korea", "KR"),
    ("Spain", "ES"),
    ("Sweden", "SE"),
    ("Switzerland", "CH"),
    ("Turkey", "TR"),
    ("United Kingdom", "GB"),
    ("United States", "US"),
    ("Vietnam", "VN"),
];

const PHONE_FORMATS: &[&str] = &[
    "###-###-####",
    "(###) ###-####",
    "+1-###-###-####",
    "###.###.####",
    "+44 #### ######",
];

pub fn city<R: Rng>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!(
            "{} {}{}",
            pick(rng, CITY_PREFIXES),
            first_name(rng),
            pick(rng, CITY_SUFFIXES)
        ),
        1 => format!("{}{}", first_name(rng), pick(rng, CITY_SUFFIXES)),
        _ => format!("{}{}", last_name(rng), pick(rng, CITY_SUFFIXES)),
    }
}

pub fn country<R: Rng>(rng: &mut R) -> String {
    COUNTRIES[rng.gen_range(0..COUNTRIES.len())].0.to_string()
}

pub fn country_code<R: Rng>(rng: &mut R) -> String {
    COUNTRIES[rng.gen_range(0..COUNTRIES.len())].1.to_string()
}

pub fn street_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", last_name(rng), pick(rng, STREET_SUFFIXES))
}

pub fn street_address<R: Rng>(rng: &mut R) -> String {
    let number = rng.gen_range(1..=9999);
    format!("{number} {}", street_name(rng))
}

pub fn postcode<R: Rng>(rng: &mut R) -> String {
    numerify("#####", rng)
}

pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    let format = pick(rng, PHONE_FORMATS);
    numerify(format, rng)
}

/// Random coordinate in `[min, max]` with six decimals.
pub fn coordinate<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let value = if min < max {
        rng.gen_range(min..=max)
    } else {
        min
    };
    (value * 1_000_000.0).round() / 1_000_000.0
}
