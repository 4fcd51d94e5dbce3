use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use rand::Rng;

/// Expiry sentinel for credentials with no expiry date.
pub const LONG_TERM: &str = "长期";

pub const DEFAULT_MIN_AGE: i64 = 18;
pub const DEFAULT_MAX_AGE: i64 = 70;

// Year arithmetic via whole months; a Feb 29 start clamps to Feb 28.
pub(crate) fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years * 12)).unwrap_or(date)
}

/// Uniform random birthdate for someone between `min_age` and `max_age`.
///
/// Ages are approximated as exactly 365 days per year. That drifts from
/// calendar years across leap years; kept on purpose, since changing it
/// would shift the age distribution.
pub fn random_birthdate<R: Rng>(rng: &mut R, min_age: i64, max_age: i64) -> NaiveDate {
    let today = Local::now().date_naive();
    let max_birthdate = today - Duration::days(min_age * 365);
    let min_birthdate = today - Duration::days(max_age * 365);
    let span = (max_birthdate - min_birthdate).num_days();
    min_birthdate + Duration::days(rng.random_range(0..=span))
}

/// Issuance and expiry dates consistent with the holder's age.
///
/// First-eligible issuance is the 16th birthday; older holders get a random
/// issuance 1..=min(age-15, 10) years back. Out-of-range picks are clamped
/// (not reported): never before the 16th birthday, never past today, with
/// one-year-before-today as the past-today fallback. Validity length comes
/// from the age at issuance: <16 five years, <25 ten, <46 twenty, else
/// indefinite (`长期`). Returns `(issue, expiry)` as `YYYY.MM.DD` strings.
pub fn issuance_window<R: Rng>(rng: &mut R, birthdate: NaiveDate) -> (String, String) {
    let today = Local::now().date_naive();
    let age = today.year() - birthdate.year();
    let min_issue_date = add_years(birthdate, 16);

    let mut issue_date = if age < 16 {
        min_issue_date
    } else {
        let years_ago = rng.random_range(1..=(age - 15).min(10)) as i64;
        today - Duration::days(years_ago * 365)
    };

    if issue_date < min_issue_date {
        issue_date = min_issue_date;
    }
    if issue_date > today {
        issue_date = today - Duration::days(365);
    }

    let issue_age = issue_date.year() - birthdate.year();
    let expiry_years = if issue_age < 16 {
        5
    } else if issue_age < 25 {
        10
    } else if issue_age < 46 {
        20
    } else {
        0 // indefinite
    };

    let expiry = if expiry_years == 0 {
        LONG_TERM.to_string()
    } else {
        add_years(issue_date, expiry_years)
            .format("%Y.%m.%d")
            .to_string()
    };
    (issue_date.format("%Y.%m.%d").to_string(), expiry)
}
