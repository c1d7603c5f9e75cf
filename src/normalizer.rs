//! Нормалізація тексту: розбиття на слова, стемінг кожного слова і з'єднання через пробіл
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::stemmer::get_word_base;

// Літери будь-якої писемності (разом з комбінованими знаками), десяткові цифри та підкреслення
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{M}\p{Nd}_]+").unwrap());

const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Налаштування нормалізатора (впливають лише на планування роботи та вивід)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Текст з такою або більшою кількістю слів обробляється паралельно (0 - завжди)
    pub parallel_threshold: usize,
    /// Виводити прогрес пакетної обробки
    pub verbose: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            verbose: false,
        }
    }
}

impl NormalizerConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json)
            .map_err(|e| format!("Помилка розбору конфігурації нормалізатора: {}", e))
    }
}

/// Розбиває текст на слова, відкидаючи пунктуацію, пробіли та інші символи
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Нормалізатор тексту: стемінг кожного слова та з'єднання через пробіл
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Нормалізує один текст.
    ///
    /// Основа слова ніколи не буває порожньою, тому кількість слів у результаті
    /// завжди дорівнює кількості слів у тексті.
    pub fn normalize(&self, text: &str) -> String {
        let words = tokenize(text);

        let stems: Vec<String> = if words.len() >= self.config.parallel_threshold {
            words.par_iter().map(|word| get_word_base(word)).collect()
        } else {
            words.iter().map(|word| get_word_base(word)).collect()
        };

        stems.join(" ")
    }

    /// Паралельно нормалізує набір текстів, зберігаючи їх порядок
    pub fn normalize_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        let start_time = std::time::Instant::now();
        if self.config.verbose {
            println!("🚀 Нормалізація {} текстів...", texts.len());
        }

        let results: Vec<String> = texts
            .par_iter()
            .map(|text| self.normalize(text.as_ref()))
            .collect();

        if self.config.verbose {
            let total_words = count_words(texts);
            println!(
                "✅ Нормалізацію завершено: {} слів за {} мс",
                total_words,
                start_time.elapsed().as_millis()
            );
        }

        results
    }
}

fn count_words<S: AsRef<str>>(texts: &[S]) -> usize {
    texts.iter().map(|text| tokenize(text.as_ref()).len()).sum()
}

/// Нормалізує текст з налаштуваннями за замовчуванням
pub fn normalize_text(text: &str) -> String {
    Normalizer::default().normalize(text)
}
