//! Locale tags and their mapping onto the `fake` backend's bundled locales.

/// A locale controlling the flavor of generated values.
///
/// The request's `locale` parameter is free-form; [`Locale::parse`] maps it
/// onto the locales the `fake` crate ships data for. Tags that do not match a
/// bundled locale fall back to [`Locale::EnUs`], mirroring the backend's own
/// default-locale policy, so parsing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    EnUs,
    FrFr,
    ZhCn,
    ZhTw,
    JaJp,
    PtBr,
    ArSa,
}

impl Locale {
    /// Parse a locale tag. Case-insensitive; `-` and `_` separators are both
    /// accepted (`fr_FR`, `fr-fr`, `FR`). Unknown tags fall back to `en_US`.
    pub fn parse(tag: &str) -> Self {
        let norm = tag.trim().replace('-', "_").to_ascii_lowercase();
        match norm.as_str() {
            "fr" | "fr_fr" => Locale::FrFr,
            "zh" | "zh_cn" => Locale::ZhCn,
            "zh_tw" => Locale::ZhTw,
            "ja" | "ja_jp" => Locale::JaJp,
            "pt" | "pt_br" => Locale::PtBr,
            "ar" | "ar_sa" => Locale::ArSa,
            _ => Locale::EnUs,
        }
    }

    /// Canonical tag for this locale.
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::FrFr => "fr_FR",
            Locale::ZhCn => "zh_CN",
            Locale::ZhTw => "zh_TW",
            Locale::JaJp => "ja_JP",
            Locale::PtBr => "pt_BR",
            Locale::ArSa => "ar_SA",
        }
    }
}
