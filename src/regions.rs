//! Пошук областей RV та R2 у слові
use serde::{Deserialize, Serialize};

static RUSSIAN_VOWELS: &str = "аеёиоуыэюя";

/// Межі областей слова (зсув у символах, не в байтах).
///
/// `rv` - позиція одразу після першої голосної,
/// `r2` - позиція після другого переходу "голосна -> приголосна".
/// Нуль означає, що межу не знайдено, і все слово доступне для правил.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Regions {
    pub rv: usize,
    pub r2: usize,
}

/// Чи є символ голосною (лише малі російські голосні)
pub fn is_vowel(c: char) -> bool {
    RUSSIAN_VOWELS.contains(c)
}

enum ScanState {
    // Шукаємо першу голосну
    FirstVowel,
    // Шукаємо перший перехід голосна -> приголосна
    FirstTransition,
    // Шукаємо другий перехід, після нього ставимо R2
    SecondTransition,
}

/// Знаходить межі RV та R2.
///
/// Сканування починається з другого символу: кожен символ порівнюється з попереднім.
/// Тому голосна на самому початку слова не встановлює RV.
pub fn find_regions(word: &[char]) -> Regions {
    let mut regions = Regions::default();
    let mut state = ScanState::FirstVowel;

    for i in 1..word.len() {
        let prev_char = word[i - 1];
        let current = word[i];

        match state {
            ScanState::FirstVowel => {
                if is_vowel(current) {
                    regions.rv = i + 1;
                    state = ScanState::FirstTransition;
                }
            }
            ScanState::FirstTransition => {
                if is_vowel(prev_char) && !is_vowel(current) {
                    state = ScanState::SecondTransition;
                }
            }
            ScanState::SecondTransition => {
                if is_vowel(prev_char) && !is_vowel(current) {
                    regions.r2 = i + 1;
                    break;
                }
            }
        }
    }

    regions
}
