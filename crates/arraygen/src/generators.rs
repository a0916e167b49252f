//! Leaf generator factories.
//!
//! Each factory validates its configuration once and returns an
//! infallible zero-argument closure satisfying the generator contract, so
//! the results plug straight into [`crate::compose`] and
//! [`crate::builder::custom`].

use arraygen_core::{ArrayLength, Error, Result, validation};
use chrono::{DateTime, NaiveDateTime, Utc};
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use crate::charset;

const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "icloud.com",
    "protonmail.com",
];

const URL_TLDS: &[&str] = &[
    "com", "org", "net", "gov", "edu", "io", "co", "uk", "ca", "us", "biz", "info",
];

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Emily", "David", "Sarah", "Robert", "Megan", "William", "Olivia",
    "James", "Sophia", "Joseph", "Isabella", "Daniel", "Grace", "Matthew",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Jones", "Brown", "Davis", "Miller", "Wilson", "Moore",
    "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson",
];

/// Random integer in `[min, max]`, both inclusive.
pub fn integer(min: i64, max: i64) -> Result<impl FnMut() -> i64> {
    validation::at_least(max, min, "max")?;
    Ok(move || rand::rng().random_range(min..=max))
}

/// Random float in `[min, max)` rounded to `precision` decimal places.
pub fn decimal(min: f64, max: f64, precision: u32) -> Result<impl FnMut() -> f64> {
    validation::finite(min, "min")?;
    validation::ordered_f64(min, max, "max")?;
    let factor = 10f64.powi(precision as i32);
    Ok(move || {
        let value: f64 = rand::rng().random_range(min..max);
        (value * factor).round() / factor
    })
}

/// Random string. `length` is either fixed or an inclusive `[min, max]`
/// range re-sampled on every invocation.
pub fn string(
    length: impl Into<ArrayLength>,
    special_chars: bool,
) -> Result<impl FnMut() -> String> {
    let length = length.into();
    length.validate("length")?;
    let alphabet = charset::alphabet(special_chars);
    Ok(move || {
        let mut rng = rand::rng();
        let len = length.sample(&mut rng);
        charset::random_chars(&mut rng, len, alphabet)
    })
}

/// Random boolean, true with probability `true_chance`.
pub fn boolean(true_chance: f64) -> Result<impl FnMut() -> bool> {
    validation::probability(true_chance, "true_chance")?;
    Ok(move || rand::rng().random_bool(true_chance))
}

/// Random datetime between `min` and `max`, uniform at millisecond
/// resolution.
pub fn date(min: NaiveDateTime, max: NaiveDateTime) -> Result<impl FnMut() -> NaiveDateTime> {
    let lo = min.and_utc().timestamp_millis();
    let hi = max.and_utc().timestamp_millis();
    if hi < lo {
        return Err(Error::invalid_parameter(
            "max",
            "must not be earlier than the minimum date",
            max,
        ));
    }
    Ok(move || {
        let millis = rand::rng().random_range(lo..=hi);
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(|dt| dt.naive_utc())
            .unwrap_or(min)
    })
}

/// Random phone number: area/exchange/subscriber blocks, an optional
/// random `+NNN` country code, and optional `(AAA)-EEE-SSSS` formatting.
pub fn phone(country_code: bool, format: bool) -> impl FnMut() -> String {
    move || {
        let mut rng = rand::rng();
        let area: u32 = rng.random_range(100..=999);
        let exchange: u32 = rng.random_range(100..=999);
        let subscriber: u32 = rng.random_range(1000..=9999);
        let prefix = if country_code {
            let code: u32 = rng.random_range(1..=999);
            if format {
                format!("+{code} ")
            } else {
                format!("+{code}")
            }
        } else {
            String::new()
        };
        if format {
            format!("{prefix}({area})-{exchange}-{subscriber}")
        } else {
            format!("{prefix}{area}{exchange}{subscriber}")
        }
    }
}

/// Random v4 UUID string.
pub fn uuid() -> impl FnMut() -> String {
    move || {
        let mut bytes = [0_u8; 16];
        rand::rng().fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        uuid::Uuid::from_bytes(bytes).to_string()
    }
}

/// Random IP address: dotted quad, or eight colon-separated zero-padded
/// 16-bit hex groups when `ipv6`.
pub fn ip_address(ipv6: bool) -> impl FnMut() -> String {
    move || {
        let mut rng = rand::rng();
        if ipv6 {
            let groups: Vec<String> = (0..8)
                .map(|_| format!("{:04x}", rng.random::<u16>()))
                .collect();
            groups.join(":")
        } else {
            format!(
                "{}.{}.{}.{}",
                rng.random::<u8>(),
                rng.random::<u8>(),
                rng.random::<u8>(),
                rng.random::<u8>()
            )
        }
    }
}

/// Random email address: 5-15 character alphanumeric local part at one of
/// the stock domains.
pub fn email() -> impl FnMut() -> String {
    move || {
        let mut rng = rand::rng();
        let local_len = rng.random_range(5..=15);
        let local = charset::random_chars(&mut rng, local_len, charset::ALPHANUMERIC);
        let domain = EMAIL_DOMAINS.choose(&mut rng).unwrap_or(&"example.com");
        format!("{local}@{domain}")
    }
}

/// Random `https://www.` URL with a stock top-level domain.
pub fn url() -> impl FnMut() -> String {
    move || {
        let mut rng = rand::rng();
        let host_len = rng.random_range(5..=15);
        let host = charset::random_chars(&mut rng, host_len, charset::ALPHANUMERIC);
        let tld = URL_TLDS.choose(&mut rng).unwrap_or(&"com");
        format!("https://www.{host}.{tld}")
    }
}

/// Random full name from the stock first/last name lists.
pub fn name() -> impl FnMut() -> String {
    move || {
        let mut rng = rand::rng();
        let first = FIRST_NAMES.choose(&mut rng).unwrap_or(&"John");
        let last = LAST_NAMES.choose(&mut rng).unwrap_or(&"Smith");
        format!("{first} {last}")
    }
}
