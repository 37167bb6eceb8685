//! 判分引擎
//!
//! 将提交的字母选项逐题解析为选项值，与题目存储的正确值比对后
//! 折算为百分制整数得分。纯函数，结果持久化由调用方负责。

use std::collections::HashMap;

use tracing::warn;

use crate::models::reviews::entities::Question;

/// 将提交的字母解析为本题的选项值
///
/// 字母按 0 起始字母表位置映射到题目自身的选项表（A -> options[0]），
/// 逐题解析，绝不使用全局字母表。大小写不敏感，首尾空白忽略。
/// 字母格式非法或越界时返回 None，由调用方按答错处理。
pub fn resolve_choice<'a>(question: &'a Question, letter: &str) -> Option<&'a str> {
    let trimmed = letter.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let index = (first.to_ascii_uppercase() as u8 - b'A') as usize;
    question.options.get(index).map(|s| s.as_str())
}

/// 统计答对题数
///
/// 答案映射中缺失的题、无法解析的字母一律计为答错，不抛错；
/// 无法解析时输出警告，避免单题数据问题中断整卷判分。
pub fn count_correct(answers: &HashMap<i64, String>, questions: &[Question]) -> i64 {
    let mut correct = 0i64;
    for question in questions {
        let Some(letter) = answers.get(&question.id) else {
            continue;
        };
        match resolve_choice(question, letter) {
            Some(value) => {
                if value == question.answer {
                    correct += 1;
                }
            }
            None => {
                warn!(
                    question_id = question.id,
                    letter = %letter,
                    "Submitted letter does not resolve to an option, counted as wrong"
                );
            }
        }
    }
    correct
}

/// 计算百分制整数得分，四舍五入
///
/// 题目数为 0 时得分定义为 0；该情况属于数据错误，由调用方告警
/// （测评创建前已要求题组至少一题）。
pub fn score_submission(answers: &HashMap<i64, String>, questions: &[Question]) -> i64 {
    if questions.is_empty() {
        return 0;
    }
    let correct = count_correct(answers, questions);
    ((correct as f64 / questions.len() as f64) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, options: &[&str], answer: &str) -> Question {
        Question {
            id,
            review_id: 1,
            prompt: format!("question {id}"),
            options: options.iter().map(|s| s.to_string()).collect(),
            answer: answer.to_string(),
            explanation: None,
            hint: None,
        }
    }

    fn answers(pairs: &[(i64, &str)]) -> HashMap<i64, String> {
        pairs
            .iter()
            .map(|(id, letter)| (*id, letter.to_string()))
            .collect()
    }

    #[test]
    fn test_correct_first_option_scores_full() {
        let key = vec![question(1, &["Paris", "Lyon", "Nice"], "Paris")];
        assert_eq!(score_submission(&answers(&[(1, "A")]), &key), 100);
    }

    #[test]
    fn test_wrong_option_scores_zero() {
        let key = vec![question(1, &["Paris", "Lyon", "Nice"], "Paris")];
        assert_eq!(score_submission(&answers(&[(1, "B")]), &key), 0);
    }

    #[test]
    fn test_resolution_is_per_question() {
        // 两题选项顺序不同，同一正确值落在不同字母上
        let key = vec![
            question(1, &["Paris", "Lyon"], "Paris"),
            question(2, &["Lyon", "Paris"], "Paris"),
        ];
        let submitted = answers(&[(1, "A"), (2, "B")]);
        assert_eq!(score_submission(&submitted, &key), 100);
    }

    #[test]
    fn test_missing_answer_counts_as_wrong() {
        let key = vec![
            question(1, &["Paris", "Lyon"], "Paris"),
            question(2, &["Rome", "Oslo"], "Oslo"),
        ];
        assert_eq!(score_submission(&answers(&[(1, "A")]), &key), 50);
    }

    #[test]
    fn test_malformed_letter_counts_as_wrong() {
        let key = vec![question(1, &["Paris", "Lyon"], "Paris")];
        for letter in ["1", "AB", "", "%", "Z"] {
            assert_eq!(score_submission(&answers(&[(1, letter)]), &key), 0);
        }
    }

    #[test]
    fn test_letter_case_and_whitespace_tolerated() {
        let key = vec![question(1, &["Paris", "Lyon"], "Paris")];
        assert_eq!(score_submission(&answers(&[(1, "a")]), &key), 100);
        assert_eq!(score_submission(&answers(&[(1, " A ")]), &key), 100);
    }

    #[test]
    fn test_out_of_range_letter_counts_as_wrong() {
        let key = vec![question(1, &["Paris", "Lyon"], "Paris")];
        assert_eq!(score_submission(&answers(&[(1, "C")]), &key), 0);
    }

    #[test]
    fn test_rounding_half_up() {
        // 3 题对 1 题 => 33.33 -> 33；3 题对 2 题 => 66.67 -> 67
        let key = vec![
            question(1, &["x", "y"], "x"),
            question(2, &["x", "y"], "x"),
            question(3, &["x", "y"], "x"),
        ];
        assert_eq!(score_submission(&answers(&[(1, "A")]), &key), 33);
        assert_eq!(score_submission(&answers(&[(1, "A"), (2, "A")]), &key), 67);

        // 8 题对 1 题 => 12.5 -> 13（逢半进位）
        let key8: Vec<Question> = (1..=8).map(|id| question(id, &["x", "y"], "x")).collect();
        assert_eq!(score_submission(&answers(&[(1, "A")]), &key8), 13);
    }

    #[test]
    fn test_empty_key_scores_zero() {
        assert_eq!(score_submission(&answers(&[(1, "A")]), &[]), 0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let key = vec![
            question(1, &["Paris", "Lyon", "Nice"], "Nice"),
            question(2, &["Rome", "Oslo"], "Rome"),
        ];
        let submitted = answers(&[(1, "C"), (2, "B")]);
        let first = score_submission(&submitted, &key);
        let second = score_submission(&submitted, &key);
        assert_eq!(first, second);
        assert_eq!(first, 50);
    }

    #[test]
    fn test_resolve_choice() {
        let q = question(1, &["Paris", "Lyon", "Nice"], "Paris");
        assert_eq!(resolve_choice(&q, "A"), Some("Paris"));
        assert_eq!(resolve_choice(&q, "c"), Some("Nice"));
        assert_eq!(resolve_choice(&q, "D"), None);
        assert_eq!(resolve_choice(&q, "2"), None);
    }
}
