//! The closed catalog of generatable data types.
//!
//! Every type the API can produce is a variant of [`DataType`]. The catalog is
//! fixed at compile time: lookup is an exhaustive `match`, not a runtime map,
//! so adding a type without wiring its producer is a compile error.

use std::fmt;

/// A data type the generator can produce.
///
/// Variants are grouped by informal category (personal, address, company,
/// internet, text, date/time, numeric, financial, file, color, identifier,
/// composite). The grouping has no runtime behavior; [`DataType::ALL`] is the
/// stable order exposed by the `/api/types` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    // Personal
    Name,
    FirstName,
    LastName,
    Email,
    Phone,
    Ssn,
    Username,
    Password,
    // Address
    Address,
    StreetAddress,
    City,
    State,
    Zipcode,
    Country,
    Latitude,
    Longitude,
    // Company
    Company,
    Job,
    CompanyEmail,
    // Internet
    Url,
    DomainName,
    Ipv4,
    Ipv6,
    MacAddress,
    UserAgent,
    // Text
    Text,
    Sentence,
    Paragraph,
    Word,
    // Date/Time
    Date,
    Time,
    DateTime,
    Year,
    // Numbers
    RandomInt,
    RandomDigit,
    // Credit card
    CreditCardNumber,
    CreditCardProvider,
    CreditCardExpire,
    // Currency
    CurrencyCode,
    CurrencyName,
    // File
    FileName,
    FileExtension,
    MimeType,
    // Color
    ColorName,
    HexColor,
    RgbColor,
    // Identifier
    Uuid4,
    // Composite
    Profile,
    User,
}

impl DataType {
    /// Full catalog in the stable order returned by `/api/types`.
    pub const ALL: [DataType; 49] = [
        DataType::Name,
        DataType::FirstName,
        DataType::LastName,
        DataType::Email,
        DataType::Phone,
        DataType::Ssn,
        DataType::Username,
        DataType::Password,
        DataType::Address,
        DataType::StreetAddress,
        DataType::City,
        DataType::State,
        DataType::Zipcode,
        DataType::Country,
        DataType::Latitude,
        DataType::Longitude,
        DataType::Company,
        DataType::Job,
        DataType::CompanyEmail,
        DataType::Url,
        DataType::DomainName,
        DataType::Ipv4,
        DataType::Ipv6,
        DataType::MacAddress,
        DataType::UserAgent,
        DataType::Text,
        DataType::Sentence,
        DataType::Paragraph,
        DataType::Word,
        DataType::Date,
        DataType::Time,
        DataType::DateTime,
        DataType::Year,
        DataType::RandomInt,
        DataType::RandomDigit,
        DataType::CreditCardNumber,
        DataType::CreditCardProvider,
        DataType::CreditCardExpire,
        DataType::CurrencyCode,
        DataType::CurrencyName,
        DataType::FileName,
        DataType::FileExtension,
        DataType::MimeType,
        DataType::ColorName,
        DataType::HexColor,
        DataType::RgbColor,
        DataType::Uuid4,
        DataType::Profile,
        DataType::User,
    ];

    /// The wire name of this type, as accepted by `/api/generate?type=`.
    pub const fn as_str(self) -> &'static str {
        match self {
            DataType::Name => "name",
            DataType::FirstName => "first_name",
            DataType::LastName => "last_name",
            DataType::Email => "email",
            DataType::Phone => "phone",
            DataType::Ssn => "ssn",
            DataType::Username => "username",
            DataType::Password => "password",
            DataType::Address => "address",
            DataType::StreetAddress => "street_address",
            DataType::City => "city",
            DataType::State => "state",
            DataType::Zipcode => "zipcode",
            DataType::Country => "country",
            DataType::Latitude => "latitude",
            DataType::Longitude => "longitude",
            DataType::Company => "company",
            DataType::Job => "job",
            DataType::CompanyEmail => "company_email",
            DataType::Url => "url",
            DataType::DomainName => "domain_name",
            DataType::Ipv4 => "ipv4",
            DataType::Ipv6 => "ipv6",
            DataType::MacAddress => "mac_address",
            DataType::UserAgent => "user_agent",
            DataType::Text => "text",
            DataType::Sentence => "sentence",
            DataType::Paragraph => "paragraph",
            DataType::Word => "word",
            DataType::Date => "date",
            DataType::Time => "time",
            DataType::DateTime => "datetime",
            DataType::Year => "year",
            DataType::RandomInt => "random_int",
            DataType::RandomDigit => "random_digit",
            DataType::CreditCardNumber => "credit_card_number",
            DataType::CreditCardProvider => "credit_card_provider",
            DataType::CreditCardExpire => "credit_card_expire",
            DataType::CurrencyCode => "currency_code",
            DataType::CurrencyName => "currency_name",
            DataType::FileName => "file_name",
            DataType::FileExtension => "file_extension",
            DataType::MimeType => "mime_type",
            DataType::ColorName => "color_name",
            DataType::HexColor => "hex_color",
            DataType::RgbColor => "rgb_color",
            DataType::Uuid4 => "uuid4",
            DataType::Profile => "profile",
            DataType::User => "user",
        }
    }

    /// Resolve a wire name to its catalog entry. Aliases are not accepted.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// Whether this type produces a structured record instead of a scalar.
    pub const fn is_composite(self) -> bool {
        matches!(self, DataType::Profile | DataType::User)
    }

    /// Catalog wire names in stable order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_stable() {
        let names = DataType::names();
        assert_eq!(names.first(), Some(&"name"));
        assert_eq!(names.get(3), Some(&"email"));
        assert_eq!(names.last(), Some(&"user"));
        assert_eq!(names[names.len() - 3], "uuid4");
    }

    #[test]
    fn test_wire_names_round_trip() {
        for t in DataType::ALL {
            assert_eq!(DataType::from_name(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_wire_names_are_unique() {
        let mut names = DataType::names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DataType::ALL.len());
    }

    #[test]
    fn test_unknown_names_rejected() {
        assert_eq!(DataType::from_name("not_a_real_type"), None);
        assert_eq!(DataType::from_name(""), None);
        // no aliasing or case folding
        assert_eq!(DataType::from_name("Name"), None);
        assert_eq!(DataType::from_name("e-mail"), None);
    }

    #[test]
    fn test_composite_flags() {
        assert!(DataType::Profile.is_composite());
        assert!(DataType::User.is_composite());
        let composites = DataType::ALL.iter().filter(|t| t.is_composite()).count();
        assert_eq!(composites, 2);
    }
}
