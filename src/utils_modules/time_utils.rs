use crate::common::*;

#[doc = "Standard Function of Datetime"]
fn convert_date_to_str<Tz>(
    time: DateTime<Tz>,
    tz: Tz, // Timezone (Utc, Local, FixedOffset ...)
    format: &str,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.with_timezone(&tz).format(format).to_string()
}

#[doc = "Formats a datetime the same way as Javascript's 'toISOString()' - millisecond precision, Z suffix."]
pub fn convert_date_to_str_iso_millis<Tz>(time: DateTime<Tz>, tz: Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    convert_date_to_str(time, tz, "%Y-%m-%dT%H:%M:%S%.3fZ")
}

#[doc = "ISO-8601 문자열을 UTC datetime 으로 변환해주는 함수"]
/// # Arguments
/// * `time` - ISO-8601 timestamp string. CloudWatch emits offsets such as `+0000`
///   which are not strict RFC 3339, so that form is accepted as well.
///
/// # Returns
/// * anyhow::Result<DateTime<Utc>>
pub fn convert_str_to_datetime_utc(time: &str) -> anyhow::Result<DateTime<Utc>> {
    let parsed: DateTime<FixedOffset> = DateTime::parse_from_rfc3339(time)
        .or_else(|_| DateTime::parse_from_str(time, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .context("[time_utils.rs -> convert_str_to_datetime_utc] An error occurred during the conversion of time information.")?;

    Ok(parsed.with_timezone(&Utc))
}

#[doc = "Current UTC time as Unix epoch seconds."]
pub fn get_current_utc_epoch() -> i64 {
    Utc::now().timestamp()
}
