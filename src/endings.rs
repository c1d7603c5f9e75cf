//! Видалення закінчень у межах області слова
use crate::suffix_table::{Precondition, SuffixGroup, SuffixRule};

/// Повертає довжину закінчення (у символах), якщо `tail` ним закінчується
pub fn ends_with_suffix(tail: &[char], suffix: &str) -> Option<usize> {
    let mut len = 0;
    let mut tail_chars = tail.iter().rev();

    for expected in suffix.chars().rev() {
        match tail_chars.next() {
            Some(&actual) if actual == expected => len += 1,
            _ => return None,
        }
    }

    Some(len)
}

/// Шукає перше правило групи, що підходить до кінця слова після `region`, і видаляє
/// його закінчення. Символи до `region` ніколи не змінюються.
///
/// Видаляється лише саме закінчення, голосна з умови "після а/я" залишається.
/// Перед закінченням (і перед голосною з умови) у хвості має лишатися хоча б один
/// символ, тому хвіст ніколи не зникає повністю.
/// Повертає правило, що спрацювало, або `None`, якщо слово не змінилось.
pub fn remove_ending<'a>(word: &mut Vec<char>, region: usize, group: &'a SuffixGroup) -> Option<&'a SuffixRule> {
    let region = region.min(word.len());
    let tail = &word[region..];

    for rule in group.rules() {
        let Some(suffix_len) = ends_with_suffix(tail, &rule.suffix) else {
            continue;
        };
        if tail.len() <= suffix_len {
            continue;
        }

        let preceding = match rule.precondition {
            Precondition::None => None,
            // голосна з умови не може бути першим символом хвоста
            Precondition::AfterAOrYa => match tail.len() - suffix_len - 1 {
                0 => continue,
                i => Some(tail[i]),
            },
        };
        if rule.precondition.allows(preceding) {
            word.truncate(word.len() - suffix_len);
            return Some(rule);
        }
    }

    None
}
