use once_cell::sync::Lazy;
use regex::Regex;

static ANSWER_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]$").expect("Invalid answer letter regex"));

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    // 标题长度校验：1 <= x <= 200
    if title.trim().is_empty() {
        return Err("Title must not be empty");
    }
    if title.chars().count() > 200 {
        return Err("Title must not exceed 200 characters");
    }
    Ok(())
}

pub fn validate_date_range(
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
) -> Result<(), &'static str> {
    // 截止日期不得早于开始日期
    if end < start {
        return Err("End date must not be earlier than start date");
    }
    Ok(())
}

/// 提交字母是否为单个拉丁字母（去除首尾空白后）
///
/// 仅用于保存/提交时的数据体检告警；非法字母不拒收，
/// 判分阶段按答错处理。
pub fn is_well_formed_answer_letter(letter: &str) -> bool {
    ANSWER_LETTER_RE.is_match(letter.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("期中测评").is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_date_range() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 27).unwrap();
        assert!(validate_date_range(start, end).is_ok());
        assert!(validate_date_range(start, start).is_ok());
        assert!(validate_date_range(end, start).is_err());
    }

    #[test]
    fn test_answer_letter_shape() {
        assert!(is_well_formed_answer_letter("A"));
        assert!(is_well_formed_answer_letter(" b "));
        assert!(!is_well_formed_answer_letter("AB"));
        assert!(!is_well_formed_answer_letter("3"));
        assert!(!is_well_formed_answer_letter(""));
    }
}
