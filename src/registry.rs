//! Locale-scoped generator registry.
//!
//! A [`Registry`] binds the catalog's producers to one [`Locale`] and turns a
//! [`DataType`] into a single generated value. Registries are cheap to build
//! and are constructed fresh per request, so no generator state is ever shared
//! between in-flight requests.
//!
//! Most scalar producers delegate to the `fake` crate's locale-aware fakers.
//! Values the backend has no direct faker for (years, expiry dates, ISO
//! timestamps) are composed here from `rand` and `chrono`, keeping the same
//! zero-argument producer contract.

use chrono::{Datelike, Duration, Utc};
use fake::faker::address::raw::{
    BuildingNumber, CityName, CountryName, Latitude, Longitude, StateAbbr, StateName, StreetName,
    StreetSuffix, ZipCode,
};
use fake::faker::color::raw::{Color, HexColor, RgbColor};
use fake::faker::company::raw::CompanyName;
use fake::faker::creditcard::raw::CreditCardNumber;
use fake::faker::currency::raw::{CurrencyCode, CurrencyName};
use fake::faker::filesystem::raw::{FileExtension, FileName, MimeType};
use fake::faker::internet::raw::{
    DomainSuffix, FreeEmail, IPv4, IPv6, MACAddress, Password, UserAgent, Username,
};
use fake::faker::job::raw::Title as JobTitle;
use fake::faker::lorem::raw::{Paragraph, Sentence, Word};
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::faker::number::raw::NumberWithFormat;
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{Data, AR_SA, EN, FR_FR, JA_JP, PT_BR, ZH_CN, ZH_TW};
use fake::Fake;
use rand::Rng;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::catalog::DataType;
use crate::locale::Locale;

const CARD_PROVIDERS: &[&str] = &[
    "American Express",
    "Diners Club",
    "Discover",
    "JCB",
    "Maestro",
    "Mastercard",
    "Visa",
];

/// A generator registry bound to one locale.
///
/// Owned by the request that built it; read-only after construction.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    locale: Locale,
}

impl Registry {
    /// Build a registry for the given locale.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The locale this registry generates data for.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Produce one value of the given type.
    ///
    /// The `fake` backend selects its word lists through a locale type
    /// parameter, so the runtime locale is dispatched here and the catalog
    /// match is monomorphized per locale.
    pub fn produce(&self, kind: DataType) -> Value {
        match self.locale {
            Locale::EnUs => produce(kind, EN),
            Locale::FrFr => produce(kind, FR_FR),
            Locale::ZhCn => produce(kind, ZH_CN),
            Locale::ZhTw => produce(kind, ZH_TW),
            Locale::JaJp => produce(kind, JA_JP),
            Locale::PtBr => produce(kind, PT_BR),
            Locale::ArSa => produce(kind, AR_SA),
        }
    }
}

fn produce<L: Data + Copy>(kind: DataType, l: L) -> Value {
    let mut rng = rand::thread_rng();
    match kind {
        // Personal
        DataType::Name => json!(Name(l).fake::<String>()),
        DataType::FirstName => json!(FirstName(l).fake::<String>()),
        DataType::LastName => json!(LastName(l).fake::<String>()),
        DataType::Email => json!(FreeEmail(l).fake::<String>()),
        DataType::Phone => json!(PhoneNumber(l).fake::<String>()),
        DataType::Ssn => json!(NumberWithFormat(l, "###-##-####").fake::<String>()),
        DataType::Username => json!(Username(l).fake::<String>()),
        DataType::Password => json!(Password(l, 8..16).fake::<String>()),
        // Address
        DataType::Address => json!(postal_address(l)),
        DataType::StreetAddress => json!(street_address(l)),
        DataType::City => json!(CityName(l).fake::<String>()),
        DataType::State => json!(StateName(l).fake::<String>()),
        DataType::Zipcode => json!(ZipCode(l).fake::<String>()),
        DataType::Country => json!(CountryName(l).fake::<String>()),
        DataType::Latitude => json!(round6(Latitude(l).fake::<f64>())),
        DataType::Longitude => json!(round6(Longitude(l).fake::<f64>())),
        // Company
        DataType::Company => json!(CompanyName(l).fake::<String>()),
        DataType::Job => json!(JobTitle(l).fake::<String>()),
        DataType::CompanyEmail => json!(company_email(l)),
        // Internet
        DataType::Url => json!(format!("https://www.{}/", domain_name(l))),
        DataType::DomainName => json!(domain_name(l)),
        DataType::Ipv4 => json!(IPv4(l).fake::<String>()),
        DataType::Ipv6 => json!(IPv6(l).fake::<String>()),
        DataType::MacAddress => json!(MACAddress(l).fake::<String>()),
        DataType::UserAgent => json!(UserAgent(l).fake::<String>()),
        // Text
        DataType::Text => json!(Paragraph(l, 2..5).fake::<String>()),
        DataType::Sentence => json!(Sentence(l, 4..10).fake::<String>()),
        DataType::Paragraph => json!(Paragraph(l, 3..7).fake::<String>()),
        DataType::Word => json!(Word(l).fake::<String>()),
        // Date/Time
        DataType::Date => json!(iso_date()),
        DataType::Time => json!(iso_time()),
        DataType::DateTime => json!(iso_datetime()),
        DataType::Year => json!(rng.gen_range(1970..=Utc::now().year()).to_string()),
        // Numbers
        DataType::RandomInt => json!(rng.gen_range(0..=1000)),
        DataType::RandomDigit => json!(rng.gen_range(0..=9)),
        // Credit card
        DataType::CreditCardNumber => json!(CreditCardNumber(l).fake::<String>()),
        DataType::CreditCardProvider => {
            json!(CARD_PROVIDERS[rng.gen_range(0..CARD_PROVIDERS.len())])
        }
        DataType::CreditCardExpire => json!(credit_card_expire()),
        // Currency
        DataType::CurrencyCode => json!(CurrencyCode(l).fake::<String>()),
        DataType::CurrencyName => json!(CurrencyName(l).fake::<String>()),
        // File
        DataType::FileName => json!(FileName(l).fake::<String>()),
        DataType::FileExtension => json!(FileExtension(l).fake::<String>()),
        DataType::MimeType => json!(MimeType(l).fake::<String>()),
        // Color
        DataType::ColorName => json!(Color(l).fake::<String>()),
        DataType::HexColor => json!(HexColor(l).fake::<String>()),
        DataType::RgbColor => json!(RgbColor(l).fake::<String>()),
        // Identifier
        DataType::Uuid4 => json!(Uuid::new_v4().to_string()),
        // Composite
        DataType::Profile => profile(l),
        DataType::User => user(l),
    }
}

/// Complete user profile, assembled from independent scalar producers.
fn profile<L: Data + Copy>(l: L) -> Value {
    json!({
        "username": Username(l).fake::<String>(),
        "name": Name(l).fake::<String>(),
        "email": FreeEmail(l).fake::<String>(),
        "phone": PhoneNumber(l).fake::<String>(),
        "address": postal_address(l),
        "job": JobTitle(l).fake::<String>(),
        "company": CompanyName(l).fake::<String>(),
        "birthdate": birthdate(),
        "website": format!("https://www.{}/", domain_name(l)),
    })
}

/// Simple user record with a numeric id.
fn user<L: Data + Copy>(l: L) -> Value {
    let mut rng = rand::thread_rng();
    json!({
        "id": rng.gen_range(1..=100_000),
        "username": Username(l).fake::<String>(),
        "email": FreeEmail(l).fake::<String>(),
        "name": Name(l).fake::<String>(),
        "created_at": iso_datetime(),
    })
}

fn street_address<L: Data + Copy>(l: L) -> String {
    format!(
        "{} {} {}",
        BuildingNumber(l).fake::<String>(),
        StreetName(l).fake::<String>(),
        StreetSuffix(l).fake::<String>(),
    )
}

fn postal_address<L: Data + Copy>(l: L) -> String {
    format!(
        "{}\n{}, {} {}",
        street_address(l),
        CityName(l).fake::<String>(),
        StateAbbr(l).fake::<String>(),
        ZipCode(l).fake::<String>(),
    )
}

fn domain_name<L: Data + Copy>(l: L) -> String {
    format!(
        "{}.{}",
        Word(l).fake::<String>().to_lowercase(),
        DomainSuffix(l).fake::<String>(),
    )
}

fn company_email<L: Data + Copy>(l: L) -> String {
    let company: String = CompanyName(l).fake();
    let mut slug: String = company
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if slug.is_empty() {
        slug.push_str("example");
    }
    format!(
        "{}@{}.com",
        Username(l).fake::<String>().to_lowercase(),
        slug
    )
}

fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}

/// Random past date within roughly the last 30 years, `%Y-%m-%d`.
fn iso_date() -> String {
    let days = rand::thread_rng().gen_range(0..=10_957);
    (Utc::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

fn iso_time() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{:02}:{:02}:{:02}",
        rng.gen_range(0..24),
        rng.gen_range(0..60),
        rng.gen_range(0..60),
    )
}

/// Random datetime between the epoch and now, ISO-8601 without offset.
fn iso_datetime() -> String {
    let now = Utc::now().timestamp();
    let ts = rand::thread_rng().gen_range(0..=now);
    chrono::DateTime::from_timestamp(ts, 0)
        .unwrap_or_default()
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
}

/// Birth date for an adult between 18 and 80 years old, `%Y-%m-%d`.
fn birthdate() -> String {
    let days = rand::thread_rng().gen_range(6_570..=29_200);
    (Utc::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// `MM/YY` expiry one to five years in the future.
fn credit_card_expire() -> String {
    let mut rng = rand::thread_rng();
    let month = rng.gen_range(1..=12);
    let year = (Utc::now().year() + rng.gen_range(1..=5)) % 100;
    format!("{month:02}/{year:02}")
}
