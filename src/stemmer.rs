//! Стемер Портера для російської мови.
//!
//! Кожен виклик працює зі своєю копією слова, тому стемер не має спільного
//! змінного стану і може використовуватись з багатьох потоків одночасно.
use serde::{Deserialize, Serialize};

use crate::endings::remove_ending;
use crate::regions::{Regions, find_regions};
use crate::suffix_table::{
    ADJECTIVE, DERIVATIONAL, DOUBLE_N, NOUN, PARTICIPLE, PERFECTIVE_GERUND, REFLEXIVE,
    SOFT_SIGN, SUPERLATIVE, SuffixCategory, SuffixGroup, TRAILING_I, VERB,
};

/// Крок алгоритму, на якому видалено закінчення
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    One,
    Two,
    Three,
    Four,
}

/// Одне видалене закінчення
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub step: Step,
    pub category: SuffixCategory,
    pub suffix: String,
}

/// Докладний звіт про стемінг одного слова
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StemTrace {
    pub word: String,
    pub stem: String,
    pub regions: Regions,
    pub removals: Vec<Removal>,
}

/// Стемер без стану: кожен виклик працює лише зі своїм словом
#[derive(Debug, Clone, Copy, Default)]
pub struct RussianStemmer;

impl RussianStemmer {
    pub fn new() -> Self {
        Self
    }

    /// Повертає основу слова
    pub fn get_word_base(&self, word: &str) -> String {
        let (stem, _) = run(word, |_, _, _| {});
        stem
    }

    /// Те саме, що `get_word_base`, але з переліком усіх видалених закінчень
    pub fn trace(&self, word: &str) -> StemTrace {
        let mut removals = Vec::new();
        let (stem, regions) = run(word, |step, category, suffix| {
            removals.push(Removal {
                step,
                category,
                suffix: suffix.to_string(),
            });
        });

        StemTrace {
            word: word.to_string(),
            stem,
            regions,
            removals,
        }
    }
}

/// Повертає основу слова ("вазы" -> "ваз")
pub fn get_word_base(word: &str) -> String {
    RussianStemmer.get_word_base(word)
}

/// Стемінг слова з переліком видалених закінчень
pub fn trace_word(word: &str) -> StemTrace {
    RussianStemmer.trace(word)
}

fn run<F>(word: &str, observe: F) -> (String, Regions)
where
    F: FnMut(Step, SuffixCategory, &str),
{
    let chars: Vec<char> = word.chars().collect();
    let regions = find_regions(&chars);

    let mut pass = Pass {
        word: chars,
        regions,
        observe,
    };
    pass.step_one();
    pass.step_two();
    pass.step_three();
    pass.step_four();

    (pass.word.into_iter().collect(), regions)
}

struct Pass<F> {
    word: Vec<char>,
    regions: Regions,
    observe: F,
}

impl<F> Pass<F>
where
    F: FnMut(Step, SuffixCategory, &str),
{
    fn strip(&mut self, step: Step, region: usize, group: &SuffixGroup) -> bool {
        match remove_ending(&mut self.word, region, group) {
            Some(rule) => {
                (self.observe)(step, group.category(), &rule.suffix);
                true
            }
            None => false,
        }
    }

    fn step_one(&mut self) {
        let rv = self.regions.rv;

        // Дієприслівник доконаного виду: якщо знайдено, крок завершено
        if self.strip(Step::One, rv, &PERFECTIVE_GERUND) {
            return;
        }

        // Зворотне закінчення знімається незалежно від подальших правил
        self.strip(Step::One, rv, &REFLEXIVE);

        let adjectival = self.strip(Step::One, rv, &PARTICIPLE) || self.strip(Step::One, rv, &ADJECTIVE);
        if !adjectival && !self.strip(Step::One, rv, &VERB) {
            self.strip(Step::One, rv, &NOUN);
        }
    }

    fn step_two(&mut self) {
        let rv = self.regions.rv;
        self.strip(Step::Two, rv, &TRAILING_I);
    }

    fn step_three(&mut self) {
        let r2 = self.regions.r2;
        self.strip(Step::Three, r2, &DERIVATIONAL);
    }

    fn step_four(&mut self) {
        let rv = self.regions.rv;

        // "нн" -> "н"
        if self.strip(Step::Four, rv, &DOUBLE_N) {
            self.word.push('н');
        }
        self.strip(Step::Four, rv, &SUPERLATIVE);
        self.strip(Step::Four, rv, &SOFT_SIGN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn removals(word: &str) -> Vec<(Step, SuffixCategory, String)> {
        trace_word(word)
            .removals
            .into_iter()
            .map(|r| (r.step, r.category, r.suffix))
            .collect()
    }

    #[test]
    fn test_stem_basic() {
        assert_eq!(get_word_base("вазы"), "ваз");
        assert_eq!(get_word_base("красивая"), "красив");
        assert_eq!(get_word_base("бегущий"), "бегущ");
        assert_eq!(get_word_base("Москва"), "Москв");
        assert_eq!(get_word_base("Полярная"), "Полярн");
    }

    #[test]
    fn test_deterministic() {
        let stemmer = RussianStemmer::new();
        for word in ["вазы", "читающий", "ответственность", "", "31А"] {
            assert_eq!(stemmer.get_word_base(word), stemmer.get_word_base(word));
            assert_eq!(stemmer.get_word_base(word), get_word_base(word));
        }
    }

    #[test]
    fn test_perfective_gerund_ends_step_one() {
        assert_eq!(get_word_base("прочитав"), "прочита");
        assert_eq!(
            removals("прочитав"),
            vec![(Step::One, SuffixCategory::PerfectiveGerund, "в".to_string())]
        );
    }

    #[test]
    fn test_participle() {
        assert_eq!(get_word_base("читающий"), "чита");
        assert_eq!(
            removals("читающий"),
            vec![(Step::One, SuffixCategory::Participle, "ющий".to_string())]
        );
    }

    #[test]
    fn test_reflexive_then_verb() {
        assert_eq!(get_word_base("улыбаться"), "улыба");
        assert_eq!(
            removals("улыбаться"),
            vec![
                (Step::One, SuffixCategory::Reflexive, "ся".to_string()),
                (Step::One, SuffixCategory::Verb, "ть".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_i() {
        assert_eq!(get_word_base("лилией"), "лил");
        assert_eq!(
            removals("лилией"),
            vec![
                (Step::One, SuffixCategory::Adjective, "ей".to_string()),
                (Step::Two, SuffixCategory::TrailingI, "и".to_string()),
            ]
        );
    }

    #[test]
    fn test_derivational_and_double_n() {
        let trace = trace_word("ответственность");
        assert_eq!(trace.stem, "ответствен");
        assert_eq!(trace.regions, Regions { rv: 4, r2: 10 });
        assert_eq!(
            removals("ответственность"),
            vec![
                (Step::One, SuffixCategory::Noun, "ь".to_string()),
                (Step::Three, SuffixCategory::Derivational, "ост".to_string()),
                (Step::Four, SuffixCategory::DoubleN, "нн".to_string()),
            ]
        );
    }

    #[test]
    fn test_double_n_shortens_by_one() {
        // після першого кроку залишається "старинн"
        assert_eq!(get_word_base("старинная"), "старин");
        assert_eq!("старинн".chars().count() - get_word_base("старинная").chars().count(), 1);
        assert_eq!(
            removals("старинная"),
            vec![
                (Step::One, SuffixCategory::Adjective, "ая".to_string()),
                (Step::Four, SuffixCategory::DoubleN, "нн".to_string()),
            ]
        );
    }

    #[test]
    fn test_participle_without_vowel_before() {
        // "ющий" і "щий" не підходять (перед ними немає "а/я"), спрацьовує "ующий"
        assert_eq!(get_word_base("организующий"), "организ");
        assert_eq!(
            removals("организующий"),
            vec![(Step::One, SuffixCategory::Participle, "ующий".to_string())]
        );
    }

    #[test]
    fn test_perfective_gerund_without_vowel_before() {
        assert_eq!(get_word_base("закрывшись"), "закр");
        assert_eq!(
            removals("закрывшись"),
            vec![(Step::One, SuffixCategory::PerfectiveGerund, "ывшись".to_string())]
        );
    }

    #[test]
    fn test_superlative() {
        assert_eq!(get_word_base("красивейший"), "красив");
        assert_eq!(
            removals("красивейший"),
            vec![
                (Step::One, SuffixCategory::Adjective, "ий".to_string()),
                (Step::Four, SuffixCategory::Superlative, "ейш".to_string()),
            ]
        );
    }

    #[test]
    fn test_soft_sign() {
        assert_eq!(get_word_base("жизнью"), "жизн");
        assert_eq!(
            removals("жизнью"),
            vec![
                (Step::One, SuffixCategory::Verb, "ю".to_string()),
                (Step::Four, SuffixCategory::SoftSign, "ь".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_r2_covers_whole_word() {
        // R2 не знайдено, тому "ост" шукається у всьому слові
        let trace = trace_word("рост");
        assert_eq!(trace.regions, Regions { rv: 2, r2: 0 });
        assert_eq!(trace.stem, "р");
    }

    #[test]
    fn test_degenerate_input() {
        assert_eq!(get_word_base(""), "");
        assert_eq!(get_word_base("г"), "г");
        assert_eq!(get_word_base("1"), "1");
        assert_eq!(get_word_base("стр"), "стр");
        assert_eq!(get_word_base("ул"), "ул");
    }

    #[test]
    fn test_non_cyrillic() {
        assert_eq!(get_word_base("31А"), "31А");
        assert_eq!(get_word_base("test123"), "test123");
        assert!(trace_word("test123").removals.is_empty());
    }

    #[test]
    fn test_short_words_are_kept() {
        for word in ["и", "а", "я", "о", "у", "мои", "моя"] {
            assert_eq!(get_word_base(word), word);
        }
        // голосна на позиції 0 не встановлює RV, тож усе слово є хвостом,
        // але закінчення не може займати весь хвіст
        assert_eq!(get_word_base("ой"), "о");
    }

    #[test]
    fn test_stem_is_never_empty() {
        for word in ["ой", "ей", "ая", "ии", "ость", "ться", "вшись", "нн", "ь"] {
            assert!(!get_word_base(word).is_empty(), "{}", word);
        }
    }

    #[test]
    fn test_not_idempotent() {
        let once = get_word_base("ответственность");
        let twice = get_word_base(&once);
        assert_eq!(once, "ответствен");
        assert_eq!(twice, "ответств");
        assert_ne!(once, twice);

        // а для більшості слів повторний стемінг нічого не змінює
        assert_eq!(get_word_base(&get_word_base("вазы")), "ваз");
    }

    #[test]
    fn test_trace_matches_stem() {
        for word in ["вазы", "читающий", "красивейший", "жизнью", "старинная", "рост", ""] {
            let trace = trace_word(word);
            assert_eq!(trace.word, word);
            assert_eq!(trace.stem, get_word_base(word));
        }
    }

    #[test]
    fn test_trace_serializes() {
        let json = serde_json::to_value(trace_word("вазы")).unwrap();
        assert_eq!(json["stem"], "ваз");
        assert_eq!(json["regions"]["rv"], 2);
        assert_eq!(json["removals"][0]["category"], "Noun");
        assert_eq!(json["removals"][0]["step"], "One");
        assert_eq!(json["removals"][0]["suffix"], "ы");
    }
}
