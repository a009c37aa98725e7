//! Internet-flavoured generators: user names, addresses, hosts.

use super::pattern::{random_digit, random_letter};
use super::person::{first_name, last_name, pick};
use rand::Rng;

const FREE_EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];
const SAFE_EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];
const TLDS: &[&str] = &["com", "org", "net", "info", "biz", "io"];
const URL_PATHS: &[&str] = &["", "about", "blog", "products", "search", "contact"];

pub fn user_name<R: Rng>(rng: &mut R) -> String {
    let first = first_name(rng).to_lowercase();
    let last = last_name(rng).to_lowercase();
    match rng.gen_range(0..4) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}_{last}"),
        2 => format!("{last}{}{}", random_digit(rng), random_digit(rng)),
        _ => format!("{}{last}", &first[..1]),
    }
}

pub fn email<R: Rng>(rng: &mut R) -> String {
    let user = user_name(rng);
    format!("{user}@{}", pick(rng, FREE_EMAIL_DOMAINS))
}

pub fn safe_email<R: Rng>(rng: &mut R) -> String {
    let user = user_name(rng);
    format!("{user}@{}", pick(rng, SAFE_EMAIL_DOMAINS))
}

pub fn domain_name<R: Rng>(rng: &mut R) -> String {
    let word = last_name(rng).to_lowercase();
    format!("{word}.{}", pick(rng, TLDS))
}

pub fn url<R: Rng>(rng: &mut R) -> String {
    let domain = domain_name(rng);
    format!("https://www.{domain}/{}", pick(rng, URL_PATHS))
}

pub fn ipv4<R: Rng>(rng: &mut R) -> String {
    let octets: [u8; 4] = rng.gen();
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

pub fn ipv6<R: Rng>(rng: &mut R) -> String {
    let groups: Vec<String> = (0..8)
        .map(|_| format!("{:x}", rng.gen::<u16>()))
        .collect();
    groups.join(":")
}

/// Random password of letters, digits and a few symbols.
pub fn password<R: Rng>(rng: &mut R, min_length: usize, max_length: usize) -> String {
    const SYMBOLS: &[u8] = b"!@#$%^&*-_";
    let length = rng.gen_range(min_length..=max_length);
    (0..length)
        .map(|_| match rng.gen_range(0..6) {
            0 => random_digit(rng),
            1 => char::from(SYMBOLS[rng.gen_range(0..SYMBOLS.len())]),
            2 => random_letter(rng).to_ascii_uppercase(),
            _ => random_letter(rng),
        })
        .collect()
}
