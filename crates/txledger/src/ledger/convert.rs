//! Lossy numeric and time conversions. Every function here degrades to a
//! sentinel (`0` or the empty string) instead of failing: a record with bad
//! fields is still worth a row in the output file.

use time::macros::format_description;
use time::OffsetDateTime;

/// Wei per whole unit of native currency.
pub const WEI_PER_ETH: f64 = 1e18;

/// Format a Unix epoch string as UTC `YYYY-MM-DD HH:MM:SS`. Empty string
/// when the input does not parse as an integer or is out of range.
pub fn epoch_to_utc(raw: &str) -> String {
    let Ok(ts) = raw.trim().parse::<i64>() else {
        return String::new();
    };
    let Ok(dt) = OffsetDateTime::from_unix_timestamp(ts) else {
        return String::new();
    };
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    dt.format(format).unwrap_or_default()
}

/// Parse `raw` as a decimal number and divide. 0 on any parse failure or a
/// zero divisor.
pub fn safe_div(raw: &str, divisor: f64) -> f64 {
    if divisor == 0.0 {
        return 0.0;
    }
    raw.trim().parse::<f64>().map_or(0.0, |v| v / divisor)
}

/// Gas fee in ETH: gasUsed × gasPrice ÷ 10^18. 0 when either side fails to
/// parse.
pub fn gas_fee_eth(gas_used: &str, gas_price: &str) -> f64 {
    match (
        gas_used.trim().parse::<f64>(),
        gas_price.trim().parse::<f64>(),
    ) {
        (Ok(used), Ok(price)) => used * price / WEI_PER_ETH,
        _ => 0.0,
    }
}

/// Decimal rendering for CSV cells. `Display` keeps positional notation, so
/// small fees come out as `0.000021` rather than scientific form.
pub fn fmt_amount(value: f64) -> String {
    value.to_string()
}
