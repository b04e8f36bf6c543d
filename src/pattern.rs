//! Locale pattern provider.
//!
//! A [`LocalePattern`] bundles everything locale-dependent the formatter
//! needs: separator literals, affix placement, compact-magnitude ladders,
//! unit and currency wording, plural classification and digit rendering.
//! Patterns are built once per `(locale, grouping, numbering system)` key
//! and shared read-only behind an `Arc`; population happens outside the
//! cache lock and the first writer wins, so a cached pattern is always
//! fully populated even when two threads race the same miss.
//!
//! Lookups never fail. A locale with no data falls back to root patterns;
//! the result is always well-formed even when it is not the most idiomatic
//! rendering for that locale.

use std::sync::{Arc, Mutex, OnceLock};

use fixed_decimal::Decimal;
use icu::decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::locale::Locale;
use icu::plurals::{
    PluralCategory, PluralOperands, PluralRuleType, PluralRules, PluralRulesOptions,
    PluralRulesPreferences,
};
use rustc_hash::FxHashMap;

use crate::options::{CompactDisplay, CurrencyDisplay, Grouping, Unit, UnitDisplay};

/// One rung of a compact-notation magnitude ladder. Display forms embed
/// their own leading spacing; an empty form means the rung does not exist
/// for that display width (German has no short form below a million).
pub(crate) struct CompactEntry {
    pub exponent: i16,
    short: &'static str,
    long_one: &'static str,
    long_other: &'static str,
}

impl CompactEntry {
    pub fn form(&self, display: CompactDisplay, plural: PluralCategory) -> &'static str {
        match display {
            CompactDisplay::Short => self.short,
            CompactDisplay::Long => match plural {
                PluralCategory::One => self.long_one,
                _ => self.long_other,
            },
        }
    }

    fn exists_for(&self, display: CompactDisplay) -> bool {
        !self.form(display, PluralCategory::Other).is_empty()
    }
}

const LADDER_EN: &[CompactEntry] = &[
    CompactEntry { exponent: 3, short: "K", long_one: " thousand", long_other: " thousand" },
    CompactEntry { exponent: 6, short: "M", long_one: " million", long_other: " million" },
    CompactEntry { exponent: 9, short: "B", long_one: " billion", long_other: " billion" },
    CompactEntry { exponent: 12, short: "T", long_one: " trillion", long_other: " trillion" },
];

// Indian English counts in lakh and crore above ten thousand.
const LADDER_EN_IN: &[CompactEntry] = &[
    CompactEntry { exponent: 3, short: "K", long_one: " thousand", long_other: " thousand" },
    CompactEntry { exponent: 5, short: "L", long_one: " lakh", long_other: " lakh" },
    CompactEntry { exponent: 7, short: "Cr", long_one: " crore", long_other: " crore" },
    CompactEntry { exponent: 9, short: "B", long_one: " billion", long_other: " billion" },
];

const LADDER_DE: &[CompactEntry] = &[
    CompactEntry { exponent: 3, short: "", long_one: " Tausend", long_other: " Tausend" },
    CompactEntry { exponent: 6, short: "\u{00A0}Mio.", long_one: " Million", long_other: " Millionen" },
    CompactEntry { exponent: 9, short: "\u{00A0}Mrd.", long_one: " Milliarde", long_other: " Milliarden" },
    CompactEntry { exponent: 12, short: "\u{00A0}Bio.", long_one: " Billion", long_other: " Billionen" },
];

const LADDER_JA: &[CompactEntry] = &[
    CompactEntry { exponent: 4, short: "\u{4E07}", long_one: "\u{4E07}", long_other: "\u{4E07}" },
    CompactEntry { exponent: 8, short: "\u{5104}", long_one: "\u{5104}", long_other: "\u{5104}" },
];

const LADDER_ZH: &[CompactEntry] = &[
    CompactEntry { exponent: 4, short: "\u{4E07}", long_one: "\u{4E07}", long_other: "\u{4E07}" },
    CompactEntry { exponent: 8, short: "\u{4EBF}", long_one: "\u{4EBF}", long_other: "\u{4EBF}" },
];

const LADDER_ZH_HANT: &[CompactEntry] = &[
    CompactEntry { exponent: 4, short: "\u{842C}", long_one: "\u{842C}", long_other: "\u{842C}" },
    CompactEntry { exponent: 8, short: "\u{5104}", long_one: "\u{5104}", long_other: "\u{5104}" },
];

const LADDER_KO: &[CompactEntry] = &[
    CompactEntry { exponent: 3, short: "\u{CC9C}", long_one: "\u{CC9C}", long_other: "\u{CC9C}" },
    CompactEntry { exponent: 4, short: "\u{B9CC}", long_one: "\u{B9CC}", long_other: "\u{B9CC}" },
    CompactEntry { exponent: 8, short: "\u{C5B5}", long_one: "\u{C5B5}", long_other: "\u{C5B5}" },
];

/// Display forms for a sanctioned unit. Short and long forms embed their
/// leading spacing; narrow forms attach directly to the digits.
struct UnitForms {
    name: &'static str,
    narrow: &'static str,
    short_one: &'static str,
    short_other: &'static str,
    long_one: &'static str,
    long_other: &'static str,
}

macro_rules! unit {
    ($name:literal, $narrow:literal, $short:literal, $one:literal, $other:literal) => {
        UnitForms {
            name: $name,
            narrow: $narrow,
            short_one: $short,
            short_other: $short,
            long_one: $one,
            long_other: $other,
        }
    };
    ($name:literal, $narrow:literal, $short_one:literal, $short_other:literal, $one:literal, $other:literal) => {
        UnitForms {
            name: $name,
            narrow: $narrow,
            short_one: $short_one,
            short_other: $short_other,
            long_one: $one,
            long_other: $other,
        }
    };
}

const UNIT_FORMS: &[UnitForms] = &[
    unit!("acre", "ac", " ac", " acre", " acres"),
    unit!("bit", "bit", " bit", " bit", " bits"),
    unit!("byte", "B", " byte", " byte", " bytes"),
    unit!("celsius", "\u{00B0}C", " \u{00B0}C", " degree Celsius", " degrees Celsius"),
    unit!("centimeter", "cm", " cm", " centimeter", " centimeters"),
    unit!("day", "d", " day", " days", " day", " days"),
    unit!("degree", "\u{00B0}", "\u{00B0}", " degree", " degrees"),
    unit!("fahrenheit", "\u{00B0}F", " \u{00B0}F", " degree Fahrenheit", " degrees Fahrenheit"),
    unit!("fluid-ounce", "fl oz", " fl oz", " fluid ounce", " fluid ounces"),
    unit!("foot", "ft", " ft", " foot", " feet"),
    unit!("gallon", "gal", " gal", " gallon", " gallons"),
    unit!("gigabit", "Gbit", " Gbit", " gigabit", " gigabits"),
    unit!("gigabyte", "GB", " GB", " gigabyte", " gigabytes"),
    unit!("gram", "g", " g", " gram", " grams"),
    unit!("hectare", "ha", " ha", " hectare", " hectares"),
    unit!("hour", "h", " hr", " hour", " hours"),
    unit!("inch", "in", " in", " inch", " inches"),
    unit!("kilobit", "kbit", " kbit", " kilobit", " kilobits"),
    unit!("kilobyte", "kB", " kB", " kilobyte", " kilobytes"),
    unit!("kilogram", "kg", " kg", " kilogram", " kilograms"),
    unit!("kilometer", "km", " km", " kilometer", " kilometers"),
    unit!("liter", "L", " L", " liter", " liters"),
    unit!("megabit", "Mbit", " Mbit", " megabit", " megabits"),
    unit!("megabyte", "MB", " MB", " megabyte", " megabytes"),
    unit!("meter", "m", " m", " meter", " meters"),
    unit!("microsecond", "\u{03BC}s", " \u{03BC}s", " microsecond", " microseconds"),
    unit!("mile", "mi", " mi", " mile", " miles"),
    unit!("mile-scandinavian", "smi", " smi", " Scandinavian mile", " Scandinavian miles"),
    unit!("milliliter", "mL", " mL", " milliliter", " milliliters"),
    unit!("millimeter", "mm", " mm", " millimeter", " millimeters"),
    unit!("millisecond", "ms", " ms", " millisecond", " milliseconds"),
    unit!("minute", "min", " min", " minute", " minutes"),
    unit!("month", "mo", " mth", " mths", " month", " months"),
    unit!("nanosecond", "ns", " ns", " nanosecond", " nanoseconds"),
    unit!("ounce", "oz", " oz", " ounce", " ounces"),
    unit!("percent", "%", "%", " percent", " percent"),
    unit!("petabyte", "PB", " PB", " petabyte", " petabytes"),
    unit!("pound", "lb", " lb", " pound", " pounds"),
    unit!("second", "s", " sec", " second", " seconds"),
    unit!("stone", "st", " st", " stone", " stone"),
    unit!("terabit", "Tbit", " Tbit", " terabit", " terabits"),
    unit!("terabyte", "TB", " TB", " terabyte", " terabytes"),
    unit!("week", "w", " wk", " wks", " week", " weeks"),
    unit!("yard", "yd", " yd", " yard", " yards"),
    unit!("year", "y", " yr", " yrs", " year", " years"),
];

fn unit_forms(name: &str) -> &'static UnitForms {
    UNIT_FORMS
        .iter()
        .find(|f| f.name == name)
        .unwrap_or(&UNIT_FORMS[0])
}

impl UnitForms {
    fn form(&self, display: UnitDisplay, plural: PluralCategory) -> &'static str {
        let one = matches!(plural, PluralCategory::One);
        match display {
            UnitDisplay::Narrow => self.narrow,
            UnitDisplay::Short => {
                if one {
                    self.short_one
                } else {
                    self.short_other
                }
            }
            UnitDisplay::Long => {
                if one {
                    self.long_one
                } else {
                    self.long_other
                }
            }
        }
    }
}

/// Languages that place the currency symbol after the amount.
fn currency_after(lang: &str) -> bool {
    matches!(
        lang,
        "de" | "fr" | "es" | "pt" | "nl" | "it" | "ca" | "da" | "fi" | "nb" | "nn" | "no" | "sv"
            | "pl" | "cs" | "sk" | "hu" | "ro" | "bg" | "hr" | "sl" | "sr" | "tr" | "el" | "uk"
            | "ru" | "be" | "et" | "lv" | "lt" | "vi" | "id" | "ms" | "bn"
    )
}

/// Languages whose accounting pattern keeps a minus glyph instead of
/// wrapping negatives in parentheses.
fn accounting_uses_minus(lang: &str) -> bool {
    matches!(
        lang,
        "de" | "fr" | "es" | "pt" | "nl" | "it" | "ca" | "da" | "fi" | "nb" | "nn" | "no" | "sv"
            | "pl" | "cs" | "sk" | "ru" | "uk" | "tr"
    )
}

fn percent_space(lang: &str) -> bool {
    matches!(
        lang,
        "de" | "fr" | "es" | "pt" | "nl" | "it" | "ca" | "da" | "fi" | "nb" | "nn" | "no" | "sv"
            | "pl" | "cs" | "sk" | "hu" | "ro" | "bg" | "hr" | "sl" | "sr" | "tr" | "el" | "uk"
            | "ru" | "be" | "et" | "lv" | "lt" | "ar" | "he" | "fa" | "hi" | "bn" | "ta" | "te"
            | "mr" | "gu" | "kn" | "ml" | "si" | "th" | "ka" | "hy" | "az" | "kk" | "uz" | "ky"
            | "mn" | "sq" | "mk" | "bs" | "mt" | "is" | "ga" | "cy" | "eu" | "gl" | "af" | "zu"
            | "xh" | "sw" | "rw"
    )
}

fn nan_token(lang: &str, traditional_chinese: bool) -> &'static str {
    match lang {
        "zh" => {
            if traditional_chinese {
                "\u{975E}\u{6578}\u{503C}"
            } else {
                "\u{975E}\u{6570}\u{5B57}"
            }
        }
        "ar" => "\u{0644}\u{064A}\u{0633}\u{0020}\u{0631}\u{0642}\u{0645}\u{064B}\u{0627}",
        _ => "NaN",
    }
}

/// Zero digit for the numbering systems the provider has tables for.
/// Anything else transliterates as a no-op (Latin digits pass through),
/// which keeps output well-formed for data-incomplete systems.
fn numbering_system_zero(ns: &str) -> Option<char> {
    match ns {
        "arab" => Some('\u{0660}'),
        "arabext" => Some('\u{06F0}'),
        "beng" => Some('\u{09E6}'),
        "deva" => Some('\u{0966}'),
        "fullwide" => Some('\u{FF10}'),
        "gujr" => Some('\u{0AE6}'),
        "guru" => Some('\u{0A66}'),
        "khmr" => Some('\u{17E0}'),
        "knda" => Some('\u{0CE6}'),
        "laoo" => Some('\u{0ED0}'),
        "mlym" => Some('\u{0D66}'),
        "mong" => Some('\u{1810}'),
        "mymr" => Some('\u{1040}'),
        "nkoo" => Some('\u{07C0}'),
        "olck" => Some('\u{1C50}'),
        "orya" => Some('\u{0B66}'),
        "sinh" => Some('\u{0DE6}'),
        "tamldec" => Some('\u{0BE6}'),
        "telu" => Some('\u{0C66}'),
        "thai" => Some('\u{0E50}'),
        "tibt" => Some('\u{0F20}'),
        "adlm" => Some('\u{1E950}'),
        "vaii" => Some('\u{A620}'),
        _ => None,
    }
}

pub(crate) fn known_numbering_system(ns: &str) -> bool {
    ns == "latn" || ns == "hanidec" || numbering_system_zero(ns).is_some()
}

/// Removes `-u-...` extension keywords from a locale tag, leaving any
/// private-use suffix intact.
fn strip_unicode_extensions(locale_str: &str) -> String {
    let search_end = locale_str.find("-x-").unwrap_or(locale_str.len());
    let search_part = &locale_str[..search_end];
    if let Some(idx) = search_part.find("-u-") {
        let before = &locale_str[..idx];
        let after_u = &locale_str[idx + 3..];
        let tokens: Vec<&str> = after_u.split('-').collect();
        let mut end_of_u = tokens.len();
        for (i, token) in tokens.iter().enumerate() {
            if token.len() == 1 && *token != "u" {
                end_of_u = i;
                break;
            }
        }
        if end_of_u < tokens.len() {
            format!("{}-{}", before, tokens[end_of_u..].join("-"))
        } else {
            before.to_string()
        }
    } else {
        locale_str.to_string()
    }
}

fn base_locale(locale_str: &str) -> String {
    let stripped = strip_unicode_extensions(locale_str);
    match stripped.parse::<Locale>() {
        Ok(loc) => loc.to_string(),
        Err(_) => stripped,
    }
}

/// Extracts a `-u-nu-<system>` keyword from a locale tag, if present.
pub(crate) fn extract_numbering_system(locale_str: &str) -> Option<String> {
    let lower = locale_str.to_lowercase();
    let search = match lower.find("-x-") {
        Some(idx) => &lower[..idx],
        None => &lower[..],
    };
    let u_idx = search.find("-u-")?;
    let tokens: Vec<&str> = search[u_idx + 3..].split('-').collect();
    for pair in tokens.windows(2) {
        if pair[0] == "nu" {
            return Some(pair[1].to_string());
        }
    }
    None
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    base: String,
    grouping: Grouping,
    numbering_system: Option<String>,
}

pub(crate) struct LocalePattern {
    lang: String,
    tag: String,
    traditional_chinese: bool,
    pub decimal_sep: String,
    pub percent_space: bool,
    pub currency_after: bool,
    pub accounting_parens: bool,
    pub nan: &'static str,
    pub infinity: &'static str,
    pub grouped: DecimalFormatter,
    pub plain: DecimalFormatter,
    plural: Option<PluralRules>,
    numbering_system: Option<String>,
}

fn grouping_strategy(grouping: Grouping) -> GroupingStrategy {
    match grouping {
        Grouping::Auto => GroupingStrategy::Auto,
        Grouping::Always => GroupingStrategy::Always,
        Grouping::Min2 => GroupingStrategy::Min2,
        Grouping::Never => GroupingStrategy::Never,
    }
}

fn new_formatter(locale: &Locale, grouping: GroupingStrategy) -> DecimalFormatter {
    let prefs = DecimalFormatterPreferences::from(locale);
    let mut opts = DecimalFormatterOptions::default();
    opts.grouping_strategy = Some(grouping);
    DecimalFormatter::try_new(prefs, opts)
        .unwrap_or_else(|_| DecimalFormatter::try_new(Default::default(), opts).unwrap())
}

/// Reads the decimal separator back out of the formatter itself, so the
/// parts decomposition agrees with whatever digit script and separators
/// the locale data actually produced.
fn derive_decimal_separator(formatter: &DecimalFormatter) -> String {
    let probe: Decimal = match "1234567.89".parse() {
        Ok(d) => d,
        Err(_) => return ".".to_string(),
    };
    let rendered = formatter.format(&probe).to_string();
    let mut runs: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in rendered.chars() {
        if c.is_numeric() {
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    // The probe always carries two fraction digits, so the final non-digit
    // run inside the string is the decimal separator.
    runs.pop().unwrap_or_else(|| ".".to_string())
}

impl LocalePattern {
    fn build(base: &str, tag: &str, grouping: Grouping, numbering_system: Option<String>) -> Self {
        // Feed a requested numbering system back through the locale so the
        // formatter's digit substitution and the transliteration table
        // agree on the script.
        let formatter_tag = match &numbering_system {
            Some(ns) => format!("{base}-u-nu-{ns}"),
            None => base.to_string(),
        };
        let locale: Locale = formatter_tag
            .parse()
            .or_else(|_| base.parse())
            .unwrap_or_else(|_| Locale::UNKNOWN);

        let grouped = new_formatter(&locale, grouping_strategy(grouping));
        let plain = new_formatter(&locale, GroupingStrategy::Never);

        let plural_prefs = PluralRulesPreferences::from(&locale);
        let mut plural_opts = PluralRulesOptions::default();
        plural_opts.rule_type = Some(PluralRuleType::Cardinal);
        let plural = PluralRules::try_new(plural_prefs, plural_opts).ok();

        let lang = base
            .split(['-', '_'])
            .next()
            .unwrap_or(base)
            .to_string();
        let traditional_chinese = tag.contains("TW")
            || tag.contains("Hant")
            || tag.contains("HK")
            || tag.contains("MO");

        LocalePattern {
            decimal_sep: derive_decimal_separator(&grouped),
            percent_space: percent_space(&lang),
            currency_after: currency_after(&lang),
            accounting_parens: !accounting_uses_minus(&lang),
            nan: nan_token(&lang, traditional_chinese),
            infinity: "\u{221E}",
            grouped,
            plain,
            plural,
            numbering_system,
            lang,
            tag: tag.to_string(),
            traditional_chinese,
        }
    }

    /// Separator between the amount and a trailing currency symbol.
    /// European locales keep a no-break space; Bengali attaches directly.
    pub fn currency_sep(&self) -> &'static str {
        if self.lang == "bn" { "" } else { "\u{00A0}" }
    }

    /// Plural category of an already-rounded digit string; drives compact
    /// suffix wording and unit-name selection.
    pub fn plural_category(&self, dec: &Decimal) -> PluralCategory {
        match &self.plural {
            Some(rules) => rules.category_for(PluralOperands::from(dec)),
            None => PluralCategory::Other,
        }
    }

    fn ladder(&self) -> &'static [CompactEntry] {
        match self.lang.as_str() {
            "en" if self.tag.contains("IN") => LADDER_EN_IN,
            "ja" => LADDER_JA,
            "zh" if self.traditional_chinese => LADDER_ZH_HANT,
            "zh" => LADDER_ZH,
            "ko" => LADDER_KO,
            "de" => LADDER_DE,
            _ => LADDER_EN,
        }
    }

    /// Largest ladder rung not exceeding the given decimal magnitude that
    /// has a form for the requested display width.
    pub fn compact_entry(
        &self,
        magnitude: i16,
        display: CompactDisplay,
    ) -> Option<&'static CompactEntry> {
        self.ladder()
            .iter()
            .filter(|e| e.exists_for(display) && e.exponent <= magnitude)
            .max_by_key(|e| e.exponent)
    }

    pub fn currency_symbol(&self, code: &str, display: CurrencyDisplay) -> String {
        let narrow = display == CurrencyDisplay::NarrowSymbol;
        match code {
            "USD" => {
                if narrow || matches!(self.lang.as_str(), "en" | "ja" | "de" | "fr") {
                    "$".to_string()
                } else {
                    "US$".to_string()
                }
            }
            "EUR" => "\u{20AC}".to_string(),
            "GBP" => "\u{00A3}".to_string(),
            "JPY" | "CNY" => "\u{00A5}".to_string(),
            "KRW" => "\u{20A9}".to_string(),
            "INR" => "\u{20B9}".to_string(),
            "RUB" => "\u{20BD}".to_string(),
            "BRL" => "R$".to_string(),
            "CAD" | "AUD" | "NZD" | "HKD" | "SGD" | "MXN" | "ARS" | "CLP" | "COP" => {
                if narrow {
                    "$".to_string()
                } else {
                    format!("{}$", &code[..2])
                }
            }
            "CHF" => "CHF".to_string(),
            "SEK" | "NOK" | "DKK" | "ISK" | "CZK" => "kr".to_string(),
            "PLN" => "z\u{0142}".to_string(),
            "THB" => "\u{0E3F}".to_string(),
            "TRY" => "\u{20BA}".to_string(),
            "ILS" => "\u{20AA}".to_string(),
            "ZAR" => "R".to_string(),
            "TWD" => {
                if narrow {
                    "$".to_string()
                } else {
                    "NT$".to_string()
                }
            }
            other => other.to_string(),
        }
    }

    pub fn currency_name(&self, code: &str, plural: PluralCategory) -> String {
        let one = matches!(plural, PluralCategory::One);
        let (singular, other) = match code {
            "USD" => ("US dollar", "US dollars"),
            "EUR" => ("euro", "euros"),
            "GBP" => ("British pound", "British pounds"),
            "JPY" => ("Japanese yen", "Japanese yen"),
            "CNY" => ("Chinese yuan", "Chinese yuan"),
            "KRW" => ("South Korean won", "South Korean won"),
            "INR" => ("Indian rupee", "Indian rupees"),
            "CAD" => ("Canadian dollar", "Canadian dollars"),
            "AUD" => ("Australian dollar", "Australian dollars"),
            "CHF" => ("Swiss franc", "Swiss francs"),
            "BRL" => ("Brazilian real", "Brazilian reais"),
            code => return code.to_string(),
        };
        if one { singular } else { other }.to_string()
    }

    /// Affix pair for a unit style. The prefix is empty except for
    /// circumfix patterns (Japanese, Korean and Traditional Chinese long
    /// speed wording puts "per hour" before the digits).
    pub fn unit_affix(
        &self,
        unit: Unit,
        display: UnitDisplay,
        plural: PluralCategory,
    ) -> (String, String) {
        let special_kph = matches!(self.lang.as_str(), "de" | "ja" | "ko")
            || (self.lang == "zh" && self.traditional_chinese);
        match unit {
            Unit::Per("kilometer", "hour") if special_kph => self.kph_affix(display),
            Unit::Per(num, den) => {
                let num_forms = unit_forms(num);
                let den_forms = unit_forms(den);
                match display {
                    UnitDisplay::Long => {
                        let num_form = num_forms.form(UnitDisplay::Long, plural);
                        let den_singular = den_forms.form(UnitDisplay::Long, PluralCategory::One);
                        (String::new(), format!("{} per{}", num_form, den_singular))
                    }
                    UnitDisplay::Short => (
                        String::new(),
                        format!(" {}/{}", num_forms.narrow, den_forms.narrow),
                    ),
                    UnitDisplay::Narrow => (
                        String::new(),
                        format!("{}/{}", num_forms.narrow, den_forms.narrow),
                    ),
                }
            }
            Unit::Single(name) => (String::new(), self.single_unit_suffix(name, display, plural)),
        }
    }

    fn single_unit_suffix(
        &self,
        name: &str,
        display: UnitDisplay,
        plural: PluralCategory,
    ) -> String {
        if self.lang == "de" && display == UnitDisplay::Long {
            let form = match name {
                "kilometer" => Some(" Kilometer"),
                "meter" => Some(" Meter"),
                "centimeter" => Some(" Zentimeter"),
                "hour" => Some(if matches!(plural, PluralCategory::One) {
                    " Stunde"
                } else {
                    " Stunden"
                }),
                _ => None,
            };
            if let Some(form) = form {
                return form.to_string();
            }
        }
        unit_forms(name).form(display, plural).to_string()
    }

    fn kph_affix(&self, display: UnitDisplay) -> (String, String) {
        match (self.lang.as_str(), display) {
            ("de", UnitDisplay::Long) => {
                (String::new(), " Kilometer pro Stunde".to_string())
            }
            ("ja", UnitDisplay::Long) => (
                "\u{6642}\u{901F} ".to_string(),
                " \u{30AD}\u{30ED}\u{30E1}\u{30FC}\u{30C8}\u{30EB}".to_string(),
            ),
            ("ko", UnitDisplay::Long) => (
                "\u{C2DC}\u{C18D} ".to_string(),
                "\u{D0AC}\u{B85C}\u{BBF8}\u{D130}".to_string(),
            ),
            ("zh", UnitDisplay::Long) if self.traditional_chinese => (
                "\u{6BCF}\u{5C0F}\u{6642} ".to_string(),
                " \u{516C}\u{91CC}".to_string(),
            ),
            ("zh", UnitDisplay::Short) if self.traditional_chinese => {
                (String::new(), " \u{516C}\u{91CC}/\u{5C0F}\u{6642}".to_string())
            }
            ("zh", UnitDisplay::Narrow) if self.traditional_chinese => {
                (String::new(), "\u{516C}\u{91CC}/\u{5C0F}\u{6642}".to_string())
            }
            (_, UnitDisplay::Long) => (String::new(), " kilometers per hour".to_string()),
            (_, UnitDisplay::Short) => (String::new(), " km/h".to_string()),
            (_, UnitDisplay::Narrow) => (String::new(), "km/h".to_string()),
        }
    }

    /// Maps ASCII digits into the requested numbering system. A no-op when
    /// no system was requested or when the formatter already substituted
    /// native digits.
    pub fn transliterate(&self, s: &str) -> String {
        let Some(ns) = self.numbering_system.as_deref() else {
            return s.to_string();
        };
        if ns == "hanidec" {
            const HANIDEC: [char; 10] = [
                '\u{3007}', '\u{4E00}', '\u{4E8C}', '\u{4E09}', '\u{56DB}', '\u{4E94}',
                '\u{516D}', '\u{4E03}', '\u{516B}', '\u{4E5D}',
            ];
            return s
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => HANIDEC[d as usize],
                    None => c,
                })
                .collect();
        }
        let Some(zero) = numbering_system_zero(ns) else {
            return s.to_string();
        };
        let zero_val = zero as u32;
        s.chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => char::from_u32(zero_val + d).unwrap_or(c),
                None => c,
            })
            .collect()
    }
}

fn cache() -> &'static Mutex<FxHashMap<CacheKey, Arc<LocalePattern>>> {
    static CACHE: OnceLock<Mutex<FxHashMap<CacheKey, Arc<LocalePattern>>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(FxHashMap::default()))
}

fn lock_cache() -> std::sync::MutexGuard<'static, FxHashMap<CacheKey, Arc<LocalePattern>>> {
    match cache().lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Resolves the pattern for a locale tag, consulting the shared cache.
///
/// A numbering system requested via option takes precedence over a
/// `-u-nu-` locale extension; unknown systems fall back to the locale
/// default rather than failing.
pub(crate) fn lookup(
    locale_str: &str,
    grouping: Grouping,
    numbering_system: Option<&str>,
) -> Arc<LocalePattern> {
    let base = base_locale(locale_str);
    let ns = numbering_system
        .map(str::to_string)
        .or_else(|| extract_numbering_system(locale_str))
        .filter(|ns| known_numbering_system(ns))
        .filter(|ns| ns != "latn");
    let key = CacheKey {
        base: base.clone(),
        grouping,
        numbering_system: ns.clone(),
    };
    if let Some(hit) = lock_cache().get(&key) {
        return Arc::clone(hit);
    }
    let built = Arc::new(LocalePattern::build(&base, locale_str, grouping, ns));
    let mut guard = lock_cache();
    Arc::clone(guard.entry(key).or_insert(built))
}
