//! Field parsers: money amounts and update timestamps.

use crate::config::STALE_AFTER_HOURS;
use crate::error::ExtractError;
use crate::extract::text::normalize;
use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Placeholder the site renders when a branch quotes no rate.
const NO_RATE: char = '—';
/// Currency suffix on rate cells.
const RUBLE_SUFFIX: &str = " ₽";
/// Wall-clock layout of the update stamp, e.g. "02.01.2024 15:04".
const UPDATED_LAYOUT: &str = "%d.%m.%Y %H:%M";

/// Parse a quoted rate.
///
/// The placeholder substitutes to "0", which then fails the positivity
/// check: a branch with no quote is excluded, never recorded as zero.
pub fn parse_rate(raw: &str) -> Result<f64, ExtractError> {
    let cleaned = raw
        .replace(NO_RATE, "0")
        .replace(',', ".")
        .replace(RUBLE_SUFFIX, "");

    let rate: f64 = cleaned
        .parse()
        .map_err(|_| ExtractError::InvalidRate(raw.to_string()))?;

    if rate <= 0.0 {
        return Err(ExtractError::InvalidRate(raw.to_string()));
    }

    Ok(rate)
}

/// Parse a card's update stamp and reject stale quotes.
///
/// The site prefixes the stamp with a weekday or "today" qualifier, but not
/// on every card; with three or more tokens only the trailing "date time"
/// pair is kept. The wall-clock time is interpreted in `tz`, the exchange's
/// zone. Anything older than the staleness window against `now` is dropped.
pub fn parse_updated(
    raw: &str,
    now: DateTime<Utc>,
    tz: Tz,
) -> Result<DateTime<FixedOffset>, ExtractError> {
    let s = normalize(raw);
    if s.is_empty() {
        return Err(ExtractError::EmptyTimestamp);
    }

    let tokens: Vec<&str> = s.split(' ').collect();
    let s = if tokens.len() >= 3 {
        tokens[tokens.len() - 2..].join(" ")
    } else {
        s
    };

    let naive = NaiveDateTime::parse_from_str(&s, UPDATED_LAYOUT)
        .map_err(|_| ExtractError::InvalidTimestamp(s.clone()))?;

    let updated = tz
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| ExtractError::InvalidTimestamp(s.clone()))?
        .fixed_offset();

    if now.signed_duration_since(updated) > Duration::hours(STALE_AFTER_HOURS) {
        return Err(ExtractError::StaleData(updated));
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EXCHANGE_TZ;

    fn msk(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        EXCHANGE_TZ
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn parses_comma_decimal_with_ruble_suffix() {
        assert_eq!(parse_rate("90,50 ₽").unwrap(), 90.50);
        assert_eq!(parse_rate("92.10").unwrap(), 92.10);
        assert_eq!(parse_rate("105 ₽").unwrap(), 105.0);
    }

    #[test]
    fn placeholder_is_always_rejected() {
        assert!(matches!(
            parse_rate("—"),
            Err(ExtractError::InvalidRate(_))
        ));
        assert!(matches!(
            parse_rate("— ₽"),
            Err(ExtractError::InvalidRate(_))
        ));
    }

    #[test]
    fn nonpositive_and_garbage_are_rejected() {
        assert!(matches!(parse_rate("0"), Err(ExtractError::InvalidRate(_))));
        assert!(matches!(
            parse_rate("-5,00 ₽"),
            Err(ExtractError::InvalidRate(_))
        ));
        assert!(matches!(
            parse_rate("n/a"),
            Err(ExtractError::InvalidRate(_))
        ));
    }

    #[test]
    fn parses_bare_stamp() {
        let now = msk(2024, 1, 2, 16, 0);
        let updated = parse_updated("02.01.2024 15:04", now, EXCHANGE_TZ).unwrap();
        assert_eq!(
            updated,
            EXCHANGE_TZ
                .with_ymd_and_hms(2024, 1, 2, 15, 4, 0)
                .unwrap()
                .fixed_offset()
        );
    }

    #[test]
    fn leading_qualifier_token_is_dropped() {
        let now = msk(2024, 1, 2, 16, 0);
        let updated = parse_updated("Today 02.01.2024 15:04", now, EXCHANGE_TZ).unwrap();
        assert_eq!(
            updated,
            EXCHANGE_TZ
                .with_ymd_and_hms(2024, 1, 2, 15, 4, 0)
                .unwrap()
                .fixed_offset()
        );

        // Multi-token prefixes collapse the same way.
        let updated = parse_updated("upd. today 02.01.2024 15:04", now, EXCHANGE_TZ).unwrap();
        assert_eq!(updated.format("%H:%M").to_string(), "15:04");
    }

    #[test]
    fn empty_after_normalization() {
        assert!(matches!(
            parse_updated("", msk(2024, 1, 2, 16, 0), EXCHANGE_TZ),
            Err(ExtractError::EmptyTimestamp)
        ));
        assert!(matches!(
            parse_updated("\n\n", msk(2024, 1, 2, 16, 0), EXCHANGE_TZ),
            Err(ExtractError::EmptyTimestamp)
        ));
    }

    #[test]
    fn bad_layout_is_invalid() {
        let now = msk(2024, 1, 2, 16, 0);
        assert!(matches!(
            parse_updated("2024-01-02 15:04", now, EXCHANGE_TZ),
            Err(ExtractError::InvalidTimestamp(_))
        ));
        assert!(matches!(
            parse_updated("yesterday", now, EXCHANGE_TZ),
            Err(ExtractError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn staleness_cutoff_is_24_hours() {
        // 56 minutes old: fresh.
        let updated = parse_updated("02.01.2024 15:04", msk(2024, 1, 2, 16, 0), EXCHANGE_TZ);
        assert!(updated.is_ok());

        // A shade under 24h: still fresh.
        let updated = parse_updated("02.01.2024 15:04", msk(2024, 1, 3, 15, 4), EXCHANGE_TZ);
        assert!(updated.is_ok());

        // More than 24h: stale.
        assert!(matches!(
            parse_updated("02.01.2024 15:04", msk(2024, 1, 4, 0, 0), EXCHANGE_TZ),
            Err(ExtractError::StaleData(_))
        ));
    }
}
