//! Input validation and normalization rules.
//!
//! These are the rules applied while prompting: the prompt re-asks until the
//! validator accepts, so by the time a value reaches the database it already
//! satisfies them.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ValidationError;

/// Lowest salary accepted for a role.
pub const SALARY_MIN: Decimal = dec!(10000.00);

/// Highest salary accepted for a role.
pub const SALARY_MAX: Decimal = dec!(1000000.00);

/// Accept a role title consisting solely of letters and whitespace.
pub fn validate_title(input: &str) -> Result<(), ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field: "title" });
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace())
    {
        return Err(ValidationError::TitleCharset);
    }
    Ok(())
}

/// Accept any name that is non-empty after trimming.
pub fn validate_name(input: &str, field: &'static str) -> Result<(), ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Parse a salary string and check it against the accepted range.
pub fn parse_salary(input: &str) -> Result<Decimal, ValidationError> {
    let salary: Decimal = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::SalaryNotNumeric)?;
    if salary < SALARY_MIN || salary > SALARY_MAX {
        return Err(ValidationError::SalaryOutOfRange {
            min: SALARY_MIN,
            max: SALARY_MAX,
        });
    }
    Ok(salary)
}

/// Normalize entered text for storage: first letter upper, remainder lower.
///
/// Cosmetic only, not a uniqueness constraint.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Substring heuristic for "is a manager": the role title contains
/// "anager" or "ead". Matches the LIKE patterns used when building the
/// manager choice list.
pub fn is_manager_title(title: &str) -> bool {
    title.contains("anager") || title.contains("ead")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_accepts_letters_and_spaces() {
        assert!(validate_title("Software Engineer").is_ok());
        assert!(validate_title("  Account Manager  ").is_ok());
    }

    #[test]
    fn title_rejects_digits_and_punctuation() {
        assert_eq!(validate_title("Eng1neer"), Err(ValidationError::TitleCharset));
        assert_eq!(
            validate_title("Sales-Lead"),
            Err(ValidationError::TitleCharset)
        );
    }

    #[test]
    fn title_rejects_whitespace_only() {
        assert_eq!(
            validate_title("   "),
            Err(ValidationError::Empty { field: "title" })
        );
    }

    #[test]
    fn name_rejects_empty_after_trim() {
        assert_eq!(
            validate_name("   ", "department name"),
            Err(ValidationError::Empty {
                field: "department name"
            })
        );
        assert!(validate_name("Sales", "department name").is_ok());
    }

    #[test]
    fn salary_accepts_range_boundaries() {
        assert_eq!(parse_salary("10000.00"), Ok(dec!(10000.00)));
        assert_eq!(parse_salary("1000000.00"), Ok(dec!(1000000.00)));
        assert_eq!(parse_salary("123456.89"), Ok(dec!(123456.89)));
    }

    #[test]
    fn salary_rejects_out_of_range() {
        assert!(matches!(
            parse_salary("9999.99"),
            Err(ValidationError::SalaryOutOfRange { .. })
        ));
        assert!(matches!(
            parse_salary("1000000.01"),
            Err(ValidationError::SalaryOutOfRange { .. })
        ));
    }

    #[test]
    fn salary_rejects_non_numeric() {
        assert_eq!(parse_salary("a lot"), Err(ValidationError::SalaryNotNumeric));
        assert_eq!(parse_salary(""), Err(ValidationError::SalaryNotNumeric));
    }

    #[test]
    fn capitalize_normalizes_case() {
        assert_eq!(capitalize("sales"), "Sales");
        assert_eq!(capitalize("SOFTWARE ENGINEER"), "Software engineer");
        assert_eq!(capitalize("  marketing  "), "Marketing");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn manager_heuristic_matches_title_substrings() {
        assert!(is_manager_title("Engineering Manager"));
        assert!(is_manager_title("Team Lead"));
        assert!(is_manager_title("Head of Operations"));
        assert!(!is_manager_title("Engineer"));
    }
}
