use chrono::{NaiveDate, NaiveDateTime};
use nalja::utils::date::remain_full_time;
use nalja::DurationParts;

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hh, mm, ss)
        .unwrap()
}

#[test]
fn test_day_and_hour_only() {
    let sentence = remain_full_time("2024-01-01T00:00:00", "2024-01-02T01:00:00").unwrap();
    assert_eq!(sentence, "1일 1시간");
}

#[test]
fn test_all_units() {
    let sentence = remain_full_time(
        at(2022, 1, 1, 0, 0, 0),
        at(2023, 3, 4, 5, 6, 7),
    )
    .unwrap();
    assert_eq!(sentence, "1년 2개월 3일 5시간 6분 7초");
}

#[test]
fn test_zero_components_are_omitted() {
    let sentence = remain_full_time(at(2024, 1, 1, 0, 0, 0), at(2024, 1, 1, 0, 30, 0)).unwrap();
    assert_eq!(sentence, "30분");
}

#[test]
fn test_zero_interval_is_empty_sentence() {
    let moment = at(2024, 1, 1, 12, 0, 0);
    assert_eq!(remain_full_time(moment, moment).unwrap(), "");
}

#[test]
fn test_reversed_arguments_render_the_magnitude() {
    let early = at(2024, 1, 1, 0, 0, 0);
    let late = at(2024, 1, 2, 1, 0, 0);
    assert_eq!(
        remain_full_time(late, early).unwrap(),
        remain_full_time(early, late).unwrap(),
    );
}

#[test]
fn test_accepts_plain_date_strings() {
    assert_eq!(remain_full_time("2024-01-01", "2024-01-04").unwrap(), "3일");
}

#[test]
fn test_propagates_parse_errors() {
    assert!(remain_full_time("definitely-not-a-date", "2024-01-01").is_err());
}

#[test]
fn test_parts_between_full_year() {
    let parts = DurationParts::between(at(2023, 2, 10, 0, 0, 0), at(2024, 2, 10, 0, 0, 0));
    assert_eq!(parts.years, 1);
    assert!(parts.months == 0 && parts.days == 0);
}

#[test]
fn test_parts_between_month_end_clamp() {
    // Oct 31 + 1 month clamps to Nov 30, so Dec 1 is one month and one day out
    let parts = DurationParts::between(at(2024, 10, 31, 0, 0, 0), at(2024, 12, 1, 0, 0, 0));
    assert_eq!(parts.months, 1);
    assert_eq!(parts.days, 1);
}
