//! Fake value generators and the name -> generator registry.
//!
//! A schema names generators by string (`firstName`,
//! `{type: numberBetween, params: [1, 10]}`). Those names are resolved once,
//! before generation starts, into a typed [`GeneratorConfig`] with validated
//! parameters. Generation itself cannot fail.

pub mod address;
pub mod color;
pub mod internet;
pub mod numeric;
pub(crate) mod params;
pub mod pattern;
pub mod person;
pub mod text;
pub mod timestamp;
pub mod uuid;

use chrono::{NaiveDateTime, Timelike, Utc};
use graph_schema::{ConfigurationError, GraphValue, PropertySpec};
use params::Params;
use rand::seq::SliceRandom;
use rand::Rng;

/// Every generator name the registry knows, in documentation order.
pub const KNOWN_GENERATORS: &[&str] = &[
    // person
    "firstName",
    "lastName",
    "name",
    "title",
    "jobTitle",
    // internet
    "userName",
    "email",
    "safeEmail",
    "domainName",
    "url",
    "ipv4",
    "ipv6",
    "password",
    // company
    "company",
    "catchPhrase",
    // address
    "city",
    "country",
    "countryCode",
    "streetName",
    "streetAddress",
    "postcode",
    "latitude",
    "longitude",
    "phoneNumber",
    // text
    "word",
    "words",
    "sentence",
    "paragraph",
    "text",
    // numbers
    "randomDigit",
    "randomDigitNotNull",
    "randomNumber",
    "numberBetween",
    "randomFloat",
    "boolean",
    // choice
    "randomElement",
    // pattern
    "numerify",
    "lexify",
    "bothify",
    // datetime
    "dateTimeBetween",
    "dateTimeThisYear",
    "dateTimeThisMonth",
    "dateTimeThisDecade",
    "date",
    "time",
    "unixTime",
    "year",
    // color
    "hexcolor",
    "rgbCssColor",
    "colorName",
    "safeColorName",
    // misc
    "uuid",
];

/// Raw generator output, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    DateTime(NaiveDateTime),
    List(Vec<GeneratedValue>),
}

impl GeneratedValue {
    /// Convert into a property value. Date/times become
    /// `YYYY-MM-DD HH:MM:SS` text.
    pub fn normalize(self) -> GraphValue {
        match self {
            Self::Bool(b) => GraphValue::Bool(b),
            Self::Int(i) => GraphValue::Int(i),
            Self::Float(f) => GraphValue::Float(f),
            Self::Text(s) => GraphValue::String(s),
            Self::DateTime(dt) => {
                GraphValue::String(dt.format(timestamp::DATETIME_FORMAT).to_string())
            }
            Self::List(items) => {
                GraphValue::List(items.into_iter().map(Self::normalize).collect())
            }
        }
    }
}

/// A resolved generator with typed parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorConfig {
    FirstName,
    LastName,
    Name,
    Title,
    JobTitle,
    UserName,
    Email,
    SafeEmail,
    DomainName,
    Url,
    Ipv4,
    Ipv6,
    Password { min_length: usize, max_length: usize },
    Company,
    CatchPhrase,
    City,
    Country,
    CountryCode,
    StreetName,
    StreetAddress,
    Postcode,
    Latitude { min: f64, max: f64 },
    Longitude { min: f64, max: f64 },
    PhoneNumber,
    Word,
    Words { count: usize, as_text: bool },
    Sentence { nb_words: usize, variable: bool },
    Paragraph { nb_sentences: usize, variable: bool },
    Text { max_chars: usize },
    RandomDigit,
    RandomDigitNotNull,
    RandomNumber { digits: Option<u32> },
    NumberBetween { min: i64, max: i64 },
    RandomFloat { decimals: u32, min: f64, max: f64 },
    Boolean { chance_of_true: u8 },
    RandomElement { values: Vec<GraphValue> },
    Numerify { pattern: String },
    Lexify { pattern: String },
    Bothify { pattern: String },
    DateTimeBetween { start: NaiveDateTime, end: NaiveDateTime },
    /// Date/time in `[start, end]`, rendered with a strftime format
    FormattedDateTime { format: String, start: NaiveDateTime, end: NaiveDateTime },
    UnixTime { max: i64 },
    HexColor,
    RgbCssColor,
    ColorName,
    SafeColorName,
    Uuid,
}

impl GeneratorConfig {
    /// Resolve a property spec into a typed generator.
    ///
    /// `now` anchors relative date expressions (`-30 years`, `now`).
    pub fn resolve(
        property: &str,
        spec: &PropertySpec,
        now: NaiveDateTime,
    ) -> Result<Self, ConfigurationError> {
        let generator = spec.generator_name();
        let p = Params::new(property, generator, spec.params());

        let config = match generator {
            "firstName" => no_params(&p, Self::FirstName)?,
            "lastName" => no_params(&p, Self::LastName)?,
            "name" => no_params(&p, Self::Name)?,
            "title" => no_params(&p, Self::Title)?,
            "jobTitle" => no_params(&p, Self::JobTitle)?,
            "userName" => no_params(&p, Self::UserName)?,
            "email" => no_params(&p, Self::Email)?,
            "safeEmail" => no_params(&p, Self::SafeEmail)?,
            "domainName" => no_params(&p, Self::DomainName)?,
            "url" => no_params(&p, Self::Url)?,
            "ipv4" => no_params(&p, Self::Ipv4)?,
            "ipv6" => no_params(&p, Self::Ipv6)?,
            "password" => {
                p.at_most(2)?;
                let min_length = p.usize_or(0, 6)?;
                let max_length = p.usize_or(1, 20)?;
                if min_length > max_length {
                    return Err(p.error("minimum length exceeds maximum length"));
                }
                Self::Password {
                    min_length,
                    max_length,
                }
            }
            "company" => no_params(&p, Self::Company)?,
            "catchPhrase" => no_params(&p, Self::CatchPhrase)?,
            "city" => no_params(&p, Self::City)?,
            "country" => no_params(&p, Self::Country)?,
            "countryCode" => no_params(&p, Self::CountryCode)?,
            "streetName" => no_params(&p, Self::StreetName)?,
            "streetAddress" => no_params(&p, Self::StreetAddress)?,
            "postcode" => no_params(&p, Self::Postcode)?,
            "latitude" => {
                let (min, max) = float_bounds(&p, -90.0, 90.0)?;
                Self::Latitude { min, max }
            }
            "longitude" => {
                let (min, max) = float_bounds(&p, -180.0, 180.0)?;
                Self::Longitude { min, max }
            }
            "phoneNumber" => no_params(&p, Self::PhoneNumber)?,
            "word" => no_params(&p, Self::Word)?,
            "words" => {
                p.at_most(2)?;
                Self::Words {
                    count: p.usize_or(0, 3)?,
                    as_text: p.bool_or(1, false)?,
                }
            }
            "sentence" => {
                p.at_most(2)?;
                Self::Sentence {
                    nb_words: p.usize_or(0, 6)?,
                    variable: p.bool_or(1, true)?,
                }
            }
            "paragraph" => {
                p.at_most(2)?;
                Self::Paragraph {
                    nb_sentences: p.usize_or(0, 3)?,
                    variable: p.bool_or(1, true)?,
                }
            }
            "text" => {
                p.at_most(1)?;
                let max_chars = p.usize_or(0, 200)?;
                if max_chars < 5 {
                    return Err(p.error("text() can only generate text of at least 5 characters"));
                }
                Self::Text { max_chars }
            }
            "randomDigit" => no_params(&p, Self::RandomDigit)?,
            "randomDigitNotNull" => no_params(&p, Self::RandomDigitNotNull)?,
            "randomNumber" => {
                p.at_most(1)?;
                let digits = match p.opt_i64(0)? {
                    None => None,
                    Some(d) if (0..=18).contains(&d) => Some(d as u32),
                    Some(_) => return Err(p.error("number of digits must be between 0 and 18")),
                };
                Self::RandomNumber { digits }
            }
            "numberBetween" => {
                p.at_most(2)?;
                let a = p.i64_or(0, 0)?;
                let b = p.i64_or(1, numeric::DEFAULT_MAX_NUMBER)?;
                Self::NumberBetween {
                    min: a.min(b),
                    max: a.max(b),
                }
            }
            "randomFloat" => {
                p.at_most(3)?;
                let decimals = match p.opt_i64(0)? {
                    None => 2,
                    Some(d) if (0..=15).contains(&d) => d as u32,
                    Some(_) => return Err(p.error("decimals must be between 0 and 15")),
                };
                let min = p.f64_or(1, 0.0)?;
                let max = p.f64_or(2, (numeric::DEFAULT_MAX_NUMBER as f64).max(min))?;
                check_float_range(&p, min, max)?;
                Self::RandomFloat { decimals, min, max }
            }
            "boolean" => {
                p.at_most(1)?;
                let chance = p.i64_or(0, 50)?;
                if !(0..=100).contains(&chance) {
                    return Err(p.error("chance of true must be between 0 and 100"));
                }
                Self::Boolean {
                    chance_of_true: chance as u8,
                }
            }
            "randomElement" => Self::RandomElement {
                values: element_pool(&p)?,
            },
            "numerify" => {
                p.at_most(1)?;
                Self::Numerify {
                    pattern: p.str_or(0, "###")?.to_string(),
                }
            }
            "lexify" => {
                p.at_most(1)?;
                Self::Lexify {
                    pattern: p.str_or(0, "????")?.to_string(),
                }
            }
            "bothify" => {
                p.at_most(1)?;
                Self::Bothify {
                    pattern: p.str_or(0, "## ??")?.to_string(),
                }
            }
            "dateTimeBetween" => {
                p.at_most(2)?;
                let start = date_param(&p, 0, "-30 years", now)?;
                let end = date_param(&p, 1, "now", now)?;
                if start > end {
                    return Err(p.error("start date must be anterior to end date"));
                }
                Self::DateTimeBetween { start, end }
            }
            "dateTimeThisYear" => recent(&p, "-1 year", now)?,
            "dateTimeThisMonth" => recent(&p, "-1 month", now)?,
            "dateTimeThisDecade" => recent(&p, "-10 years", now)?,
            "date" => formatted(&p, "Y-m-d", now)?,
            "time" => formatted(&p, "H:i:s", now)?,
            "year" => formatted(&p, "Y", now)?,
            "unixTime" => {
                p.at_most(1)?;
                let max = date_param(&p, 0, "now", now)?.and_utc().timestamp();
                if max < 0 {
                    return Err(p.error("maximum must not be before 1970-01-01"));
                }
                Self::UnixTime { max }
            }
            "hexcolor" => no_params(&p, Self::HexColor)?,
            "rgbCssColor" => no_params(&p, Self::RgbCssColor)?,
            "colorName" => no_params(&p, Self::ColorName)?,
            "safeColorName" => no_params(&p, Self::SafeColorName)?,
            "uuid" => no_params(&p, Self::Uuid)?,
            _ => {
                return Err(ConfigurationError::UnknownGenerator {
                    property: property.to_string(),
                    generator: generator.to_string(),
                })
            }
        };

        Ok(config)
    }
}

fn no_params(p: &Params<'_>, config: GeneratorConfig) -> Result<GeneratorConfig, ConfigurationError> {
    p.at_most(0)?;
    Ok(config)
}

fn float_bounds(p: &Params<'_>, min: f64, max: f64) -> Result<(f64, f64), ConfigurationError> {
    p.at_most(2)?;
    let lo = p.f64_or(0, min)?;
    let hi = p.f64_or(1, max)?;
    check_float_range(p, lo, hi)?;
    Ok((lo, hi))
}

/// Sampling needs `min <= max` and a width that fits in an f64.
fn check_float_range(p: &Params<'_>, min: f64, max: f64) -> Result<(), ConfigurationError> {
    if min > max {
        return Err(p.error("minimum exceeds maximum"));
    }
    if !(max - min).is_finite() {
        return Err(p.error("range between minimum and maximum is too wide"));
    }
    Ok(())
}

/// `randomElement([a, b])` and `randomElement(a, b)` are both accepted.
fn element_pool(p: &Params<'_>) -> Result<Vec<GraphValue>, ConfigurationError> {
    let values = match p.values() {
        [] => return Ok(vec!["a".into(), "b".into(), "c".into()]),
        [serde_json::Value::Array(items)] => items.as_slice(),
        many => many,
    };
    if values.is_empty() {
        return Err(p.error("element list must not be empty"));
    }
    Ok(values.iter().map(GraphValue::from).collect())
}

fn date_param(
    p: &Params<'_>,
    idx: usize,
    default: &str,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, ConfigurationError> {
    let expr = p.str_or(idx, default)?;
    timestamp::parse_date_expression(expr, now)
        .ok_or_else(|| p.error(format!("cannot parse date expression '{expr}'")))
}

/// `dateTimeThisYear(max = "now")` style generators.
fn recent(
    p: &Params<'_>,
    lower: &str,
    now: NaiveDateTime,
) -> Result<GeneratorConfig, ConfigurationError> {
    p.at_most(1)?;
    let end = date_param(p, 0, "now", now)?;
    let start = timestamp::parse_date_expression(lower, end)
        .ok_or_else(|| p.error("date range out of bounds"))?;
    Ok(GeneratorConfig::DateTimeBetween { start, end })
}

/// `date(format = ..., max = "now")` style generators, sampling since 1970.
fn formatted(
    p: &Params<'_>,
    default_format: &str,
    now: NaiveDateTime,
) -> Result<GeneratorConfig, ConfigurationError> {
    p.at_most(2)?;
    let format = timestamp::php_to_strftime(p.str_or(0, default_format)?);
    if !timestamp::is_valid_strftime(&format) {
        return Err(p.error(format!("invalid date format '{format}'")));
    }
    let end = date_param(p, 1, "now", now)?;
    let start = chrono::DateTime::<Utc>::UNIX_EPOCH.naive_utc().min(end);
    Ok(GeneratorConfig::FormattedDateTime { format, start, end })
}

/// Generate a raw value.
pub fn generate_raw<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> GeneratedValue {
    use GeneratedValue::{Float, Int, Text};

    match config {
        GeneratorConfig::FirstName => Text(person::first_name(rng)),
        GeneratorConfig::LastName => Text(person::last_name(rng)),
        GeneratorConfig::Name => Text(person::name(rng)),
        GeneratorConfig::Title => Text(person::title(rng)),
        GeneratorConfig::JobTitle => Text(person::job_title(rng)),
        GeneratorConfig::UserName => Text(internet::user_name(rng)),
        GeneratorConfig::Email => Text(internet::email(rng)),
        GeneratorConfig::SafeEmail => Text(internet::safe_email(rng)),
        GeneratorConfig::DomainName => Text(internet::domain_name(rng)),
        GeneratorConfig::Url => Text(internet::url(rng)),
        GeneratorConfig::Ipv4 => Text(internet::ipv4(rng)),
        GeneratorConfig::Ipv6 => Text(internet::ipv6(rng)),
        GeneratorConfig::Password {
            min_length,
            max_length,
        } => Text(internet::password(rng, *min_length, *max_length)),
        GeneratorConfig::Company => Text(person::company(rng)),
        GeneratorConfig::CatchPhrase => Text(person::catch_phrase(rng)),
        GeneratorConfig::City => Text(address::city(rng)),
        GeneratorConfig::Country => Text(address::country(rng)),
        GeneratorConfig::CountryCode => Text(address::country_code(rng)),
        GeneratorConfig::StreetName => Text(address::street_name(rng)),
        GeneratorConfig::StreetAddress => Text(address::street_address(rng)),
        GeneratorConfig::Postcode => Text(address::postcode(rng)),
        GeneratorConfig::Latitude { min, max } | GeneratorConfig::Longitude { min, max } => {
            Float(address::coordinate(rng, *min, *max))
        }
        GeneratorConfig::PhoneNumber => Text(address::phone_number(rng)),
        GeneratorConfig::Word => Text(text::word(rng)),
        GeneratorConfig::Words { count, as_text } => {
            let words = text::words(rng, *count);
            if *as_text {
                Text(words.join(" "))
            } else {
                GeneratedValue::List(words.into_iter().map(Text).collect())
            }
        }
        GeneratorConfig::Sentence { nb_words, variable } => {
            Text(text::sentence(rng, *nb_words, *variable))
        }
        GeneratorConfig::Paragraph {
            nb_sentences,
            variable,
        } => Text(text::paragraph(rng, *nb_sentences, *variable)),
        GeneratorConfig::Text { max_chars } => Text(text::text(rng, *max_chars)),
        GeneratorConfig::RandomDigit => Int(rng.gen_range(0..=9)),
        GeneratorConfig::RandomDigitNotNull => Int(rng.gen_range(1..=9)),
        GeneratorConfig::RandomNumber { digits } => numeric::generate_random_number(rng, *digits),
        GeneratorConfig::NumberBetween { min, max } => {
            numeric::generate_number_between(rng, *min, *max)
        }
        GeneratorConfig::RandomFloat { decimals, min, max } => {
            numeric::generate_random_float(rng, *decimals, *min, *max)
        }
        GeneratorConfig::Boolean { chance_of_true } => {
            numeric::generate_boolean(rng, *chance_of_true)
        }
        GeneratorConfig::RandomElement { values } => match values.choose(rng) {
            Some(value) => from_graph_value(value.clone()),
            None => Text(String::new()),
        },
        GeneratorConfig::Numerify { pattern } => Text(pattern::numerify(pattern, rng)),
        GeneratorConfig::Lexify { pattern } => Text(pattern::lexify(pattern, rng)),
        GeneratorConfig::Bothify { pattern } => Text(pattern::bothify(pattern, rng)),
        GeneratorConfig::DateTimeBetween { start, end } => {
            GeneratedValue::DateTime(timestamp::generate_datetime_between(rng, *start, *end))
        }
        GeneratorConfig::FormattedDateTime { format, start, end } => {
            let dt = timestamp::generate_datetime_between(rng, *start, *end);
            Text(dt.format(format).to_string())
        }
        GeneratorConfig::UnixTime { max } => Int(rng.gen_range(0..=*max)),
        GeneratorConfig::HexColor => Text(color::hex_color(rng)),
        GeneratorConfig::RgbCssColor => Text(color::rgb_css_color(rng)),
        GeneratorConfig::ColorName => Text(color::color_name(rng)),
        GeneratorConfig::SafeColorName => Text(color::safe_color_name(rng)),
        GeneratorConfig::Uuid => Text(self::uuid::generate_uuid_v4(rng).to_string()),
    }
}

fn from_graph_value(value: GraphValue) -> GeneratedValue {
    match value {
        GraphValue::Bool(b) => GeneratedValue::Bool(b),
        GraphValue::Int(i) => GeneratedValue::Int(i),
        GraphValue::Float(f) => GeneratedValue::Float(f),
        GraphValue::String(s) => GeneratedValue::Text(s),
        GraphValue::List(items) => {
            GeneratedValue::List(items.into_iter().map(from_graph_value).collect())
        }
        GraphValue::Null => GeneratedValue::Text(String::new()),
    }
}

/// Generate a normalized property value.
pub fn generate_value<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> GraphValue {
    generate_raw(config, rng).normalize()
}

/// Value generator: resolves property specs and produces values.
///
/// Holds the reference time that relative date expressions are anchored to.
#[derive(Debug, Clone)]
pub struct ValueGenerator {
    reference_time: NaiveDateTime,
}

impl Default for ValueGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueGenerator {
    /// Anchor relative dates to the current UTC time (whole seconds).
    pub fn new() -> Self {
        let now = Utc::now().naive_utc();
        Self::with_reference_time(now.with_nanosecond(0).unwrap_or(now))
    }

    pub fn with_reference_time(reference_time: NaiveDateTime) -> Self {
        Self { reference_time }
    }

    pub fn reference_time(&self) -> NaiveDateTime {
        self.reference_time
    }

    /// Resolve one property spec.
    pub fn resolve(
        &self,
        property: &str,
        spec: &PropertySpec,
    ) -> Result<GeneratorConfig, ConfigurationError> {
        GeneratorConfig::resolve(property, spec, self.reference_time)
    }

    /// Resolve and generate in one step.
    pub fn generate<R: Rng>(
        &self,
        property: &str,
        spec: &PropertySpec,
        rng: &mut R,
    ) -> Result<GraphValue, ConfigurationError> {
        Ok(generate_value(&self.resolve(property, spec)?, rng))
    }

    /// Label color (`#rrggbb`).
    pub fn label_color<R: Rng>(&self, rng: &mut R) -> String {
        color::hex_color(rng)
    }

    /// Per-instance display color (`rgb(r,g,b)`).
    pub fn instance_color<R: Rng>(&self, rng: &mut R) -> String {
        color::rgb_css_color(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn generator() -> ValueGenerator {
        let now = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        ValueGenerator::with_reference_time(now)
    }

    fn is_datetime_text(value: &GraphValue) -> bool {
        value
            .as_str()
            .map(|s| NaiveDateTime::parse_from_str(s, timestamp::DATETIME_FORMAT).is_ok())
            .unwrap_or(false)
    }

    #[test]
    fn test_every_known_generator_resolves_bare() {
        let values = generator();
        let mut rng = StdRng::seed_from_u64(42);

        for name in KNOWN_GENERATORS {
            let spec = PropertySpec::named(*name);
            let value = values
                .generate("prop", &spec, &mut rng)
                .unwrap_or_else(|e| panic!("{name} failed: {e}"));
            assert!(!value.is_null(), "{name} produced null");
        }
    }

    #[test]
    fn test_unknown_generator() {
        let err = generator()
            .resolve("nickname", &PropertySpec::named("nickName"))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnknownGenerator { ref property, ref generator }
                if property == "nickname" && generator == "nickName"
        ));
    }

    #[test]
    fn test_bare_name_rejects_params() {
        let spec = PropertySpec::with_params("firstName", vec![json!(1)]);
        assert!(matches!(
            generator().resolve("p", &spec),
            Err(ConfigurationError::InvalidParams { .. })
        ));
    }

    #[test]
    fn test_number_between_params() {
        let values = generator();
        let mut rng = StdRng::seed_from_u64(42);
        let spec = PropertySpec::with_params("numberBetween", vec![json!(18), json!(80)]);

        for _ in 0..100 {
            let age = values.generate("age", &spec, &mut rng).unwrap();
            let age = age.as_i64().unwrap();
            assert!((18..=80).contains(&age));
        }
    }

    #[test]
    fn test_number_between_swapped_bounds() {
        let spec = PropertySpec::with_params("numberBetween", vec![json!(10), json!(1)]);
        assert_eq!(
            generator().resolve("n", &spec).unwrap(),
            GeneratorConfig::NumberBetween { min: 1, max: 10 }
        );
    }

    #[test]
    fn test_number_between_rejects_text() {
        let spec = PropertySpec::with_params("numberBetween", vec![json!("low"), json!(10)]);
        assert!(matches!(
            generator().resolve("n", &spec),
            Err(ConfigurationError::InvalidParams { .. })
        ));
    }

    #[test]
    fn test_date_time_normalized() {
        let values = generator();
        let mut rng = StdRng::seed_from_u64(42);

        for name in ["dateTimeBetween", "dateTimeThisYear", "dateTimeThisMonth", "dateTimeThisDecade"] {
            let value = values
                .generate("at", &PropertySpec::named(name), &mut rng)
                .unwrap();
            assert!(is_datetime_text(&value), "{name}: {value:?}");
        }
    }

    #[test]
    fn test_date_time_between_bounds() {
        let values = generator();
        let mut rng = StdRng::seed_from_u64(42);
        let spec = PropertySpec::with_params(
            "dateTimeBetween",
            vec![json!("2000-01-01"), json!("2000-12-31 23:59:59")],
        );

        for _ in 0..50 {
            let value = values.generate("at", &spec, &mut rng).unwrap();
            assert!(value.as_str().unwrap().starts_with("2000-"));
        }
    }

    #[test]
    fn test_date_time_between_rejects_inverted_range() {
        let spec = PropertySpec::with_params("dateTimeBetween", vec![json!("now"), json!("-1 year")]);
        assert!(matches!(
            generator().resolve("at", &spec),
            Err(ConfigurationError::InvalidParams { .. })
        ));
    }

    #[test]
    fn test_date_with_php_format() {
        let values = generator();
        let mut rng = StdRng::seed_from_u64(42);
        let spec = PropertySpec::with_params("date", vec![json!("d/m/Y")]);

        let value = values.generate("day", &spec, &mut rng).unwrap();
        let text = value.as_str().unwrap();
        assert!(chrono::NaiveDate::parse_from_str(text, "%d/%m/%Y").is_ok());
    }

    #[test]
    fn test_random_element_forms() {
        let values = generator();
        let mut rng = StdRng::seed_from_u64(42);

        let nested = PropertySpec::with_params("randomElement", vec![json!(["a", "b"])]);
        let flat = PropertySpec::with_params("randomElement", vec![json!("a"), json!("b")]);

        for spec in [nested, flat] {
            for _ in 0..20 {
                let value = values.generate("pick", &spec, &mut rng).unwrap();
                assert!(matches!(value.as_str(), Some("a") | Some("b")));
            }
        }

        let empty = PropertySpec::with_params("randomElement", vec![json!([])]);
        assert!(values.resolve("pick", &empty).is_err());
    }

    #[test]
    fn test_words_as_list_or_text() {
        let values = generator();
        let mut rng = StdRng::seed_from_u64(42);

        let list = values
            .generate("tags", &PropertySpec::with_params("words", vec![json!(4)]), &mut rng)
            .unwrap();
        assert!(matches!(list, GraphValue::List(ref items) if items.len() == 4));

        let joined = values
            .generate(
                "tags",
                &PropertySpec::with_params("words", vec![json!(4), json!(true)]),
                &mut rng,
            )
            .unwrap();
        assert_eq!(joined.as_str().unwrap().split(' ').count(), 4);
    }

    #[test]
    fn test_boolean_chance_validated() {
        let spec = PropertySpec::with_params("boolean", vec![json!(150)]);
        assert!(generator().resolve("flag", &spec).is_err());
    }

    #[test]
    fn test_date_rejects_timezone_format() {
        for format in ["%Z", "%Y %Z", "%z", "%:z"] {
            let spec = PropertySpec::with_params("date", vec![json!(format)]);
            assert!(
                matches!(
                    generator().resolve("day", &spec),
                    Err(ConfigurationError::InvalidParams { .. })
                ),
                "{format} was accepted"
            );
        }
    }

    #[test]
    fn test_float_range_too_wide() {
        let values = generator();
        let wide = PropertySpec::with_params(
            "randomFloat",
            vec![json!(2), json!(-1e308), json!(1e308)],
        );
        assert!(matches!(
            values.resolve("amount", &wide),
            Err(ConfigurationError::InvalidParams { .. })
        ));

        let lat = PropertySpec::with_params("latitude", vec![json!(-1.7e308), json!(1.7e308)]);
        assert!(matches!(
            values.resolve("lat", &lat),
            Err(ConfigurationError::InvalidParams { .. })
        ));

        let mut rng = StdRng::seed_from_u64(42);
        let wide_but_finite =
            PropertySpec::with_params("randomFloat", vec![json!(2), json!(-1e300), json!(1e300)]);
        assert!(values.generate("amount", &wide_but_finite, &mut rng).is_ok());
    }

    #[test]
    fn test_text_minimum_length() {
        let spec = PropertySpec::with_params("text", vec![json!(4)]);
        assert!(generator().resolve("bio", &spec).is_err());
    }

    #[test]
    fn test_normalize_nested_datetime() {
        let dt = NaiveDate::from_ymd_opt(2021, 2, 3)
            .unwrap()
            .and_hms_opt(4, 5, 6)
            .unwrap();
        let value = GeneratedValue::List(vec![GeneratedValue::DateTime(dt)]).normalize();
        assert_eq!(
            value,
            GraphValue::List(vec![GraphValue::String("2021-02-03 04:05:06".into())])
        );
    }

    #[test]
    fn test_deterministic_generation() {
        let values = generator();
        let spec = PropertySpec::named("email");

        let mut rng1 = StdRng::seed_from_u64(9);
        let mut rng2 = StdRng::seed_from_u64(9);
        assert_eq!(
            values.generate("e", &spec, &mut rng1).unwrap(),
            values.generate("e", &spec, &mut rng2).unwrap()
        );
    }
}
