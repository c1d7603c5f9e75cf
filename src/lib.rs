//! Стемер Портера для російської мови.
//!
//! ```
//! assert_eq!(rustemmer::get_word_base("вазы"), "ваз");
//! assert_eq!(
//!     rustemmer::normalize_text("г. Москва, ул. Полярная, д. 31А, стр. 1"),
//!     "г Москв ул Полярн д 31А стр 1"
//! );
//! ```

mod endings;
mod normalizer;
mod regions;
mod stemmer;
mod suffix_table;

pub use endings::{ends_with_suffix, remove_ending};
pub use normalizer::{Normalizer, NormalizerConfig, normalize_text, tokenize};
pub use regions::{Regions, find_regions, is_vowel};
pub use stemmer::{Removal, RussianStemmer, StemTrace, Step, get_word_base, trace_word};
pub use suffix_table::{Precondition, SuffixCategory, SuffixGroup, SuffixRule};

/// Статичні таблиці закінчень
pub mod tables {
    pub use crate::suffix_table::{
        ADJECTIVE, DERIVATIONAL, DOUBLE_N, NOUN, PARTICIPLE, PERFECTIVE_GERUND, REFLEXIVE,
        SOFT_SIGN, SUPERLATIVE, TRAILING_I, VERB,
    };
}
