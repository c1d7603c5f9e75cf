//! Таблиці закінчень для російського стемера.
//!
//! Порядок у кожному списку важливий: перемагає перше закінчення, що підходить,
//! а не найдовше.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static ADJECTIVE_ENDINGS: &[&str] = &[
    "ее", "ие", "ые", "ое", "ими", "ыми", "ей", "ий", "ый", "ой", "ем", "им", "ым", "ом",
    "его", "ого", "ему", "ому", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею",
];

static REFLEXIVE_ENDINGS: &[&str] = &["ся", "сь"];

static NOUN_ENDINGS: &[&str] = &[
    "а", "ев", "ов", "ие", "ье", "е", "иями", "ями", "ами", "еи", "ии", "и", "ией", "ей",
    "ой", "ий", "й", "иям", "ям", "ием", "ем", "ам", "ом", "о", "у", "ах", "иях", "ях",
    "ы", "ь", "ию", "ью", "ю", "ия", "ья", "я",
];

static SUPERLATIVE_ENDINGS: &[&str] = &["ейш", "ейше"];
static DERIVATIONAL_ENDINGS: &[&str] = &["ост", "ость"];

static PERFECTIVE_GERUND_AFTER_A: &[&str] = &["в", "вши", "вшись"];
static PERFECTIVE_GERUND_OTHER: &[&str] = &["ив", "ивши", "ившись", "ыв", "ывши", "ывшись"];

// Суфікси дієприкметників, до яких дописуються закінчення прикметників
static PARTICIPLE_AFTER_A: &[&str] = &["ем", "нн", "вш", "ющ", "щ"];
static PARTICIPLE_OTHER: &[&str] = &["ивш", "ывш", "ующ"];

static VERB_AFTER_A: &[&str] = &[
    "ла", "на", "ете", "йте", "ли", "й", "л", "ем", "н", "ло", "но", "ет", "ют", "ны",
    "ть", "ешь", "нно",
];
static VERB_OTHER: &[&str] = &[
    "ила", "ыла", "ена", "ейте", "уйте", "ите", "или", "ыли", "ей", "уй", "ил", "ыл", "им",
    "ым", "ен", "ило", "ыло", "ено", "ят", "ует", "уют", "ит", "ыт", "ены", "ить", "ыть",
    "ишь", "ую", "ю",
];

/// Граматична категорія закінчення
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixCategory {
    PerfectiveGerund,
    Reflexive,
    Participle,
    Adjective,
    Verb,
    Noun,
    TrailingI,
    Derivational,
    DoubleN,
    Superlative,
    SoftSign,
}

/// Умова, яку має задовольнити символ перед закінченням
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    None,
    /// Закінченню має безпосередньо передувати "а" або "я"
    AfterAOrYa,
}

impl Precondition {
    /// Перевіряє символ, що стоїть перед закінченням (у межах області пошуку)
    pub fn allows(self, preceding: Option<char>) -> bool {
        match self {
            Precondition::None => true,
            Precondition::AfterAOrYa => matches!(preceding, Some('а') | Some('я')),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: String,
    pub precondition: Precondition,
}

impl SuffixRule {
    fn new(suffix: impl Into<String>, precondition: Precondition) -> Self {
        Self {
            suffix: suffix.into(),
            precondition,
        }
    }
}

/// Впорядкований список правил однієї категорії.
///
/// Група з двох списків зберігається як один список: спочатку правила з умовою
/// "після а/я", потім правила без умови. Це рівнозначно перегляду першого списку
/// з умовою і переходу до другого, якщо нічого не знайшлося.
#[derive(Debug, Clone)]
pub struct SuffixGroup {
    category: SuffixCategory,
    rules: Vec<SuffixRule>,
}

impl SuffixGroup {
    pub(crate) fn plain<S: AsRef<str>>(category: SuffixCategory, suffixes: &[S]) -> Self {
        Self {
            category,
            rules: suffixes
                .iter()
                .map(|s| SuffixRule::new(s.as_ref(), Precondition::None))
                .collect(),
        }
    }

    pub(crate) fn gated_then_plain<S: AsRef<str>>(category: SuffixCategory, gated: &[S], plain: &[S]) -> Self {
        let gated_rules = gated
            .iter()
            .map(|s| SuffixRule::new(s.as_ref(), Precondition::AfterAOrYa));
        let plain_rules = plain
            .iter()
            .map(|s| SuffixRule::new(s.as_ref(), Precondition::None));

        Self {
            category,
            rules: gated_rules.chain(plain_rules).collect(),
        }
    }

    pub fn category(&self) -> SuffixCategory {
        self.category
    }

    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }
}

/// Дописує кожне закінчення прикметника до кожного суфікса дієприкметника
fn with_adjective_endings(prefixes: &[&str]) -> Vec<String> {
    prefixes
        .iter()
        .flat_map(|prefix| {
            ADJECTIVE_ENDINGS
                .iter()
                .map(move |ending| format!("{}{}", prefix, ending))
        })
        .collect()
}

pub static PERFECTIVE_GERUND: Lazy<SuffixGroup> = Lazy::new(|| {
    SuffixGroup::gated_then_plain(
        SuffixCategory::PerfectiveGerund,
        PERFECTIVE_GERUND_AFTER_A,
        PERFECTIVE_GERUND_OTHER,
    )
});

pub static REFLEXIVE: Lazy<SuffixGroup> =
    Lazy::new(|| SuffixGroup::plain(SuffixCategory::Reflexive, REFLEXIVE_ENDINGS));

pub static PARTICIPLE: Lazy<SuffixGroup> = Lazy::new(|| {
    SuffixGroup::gated_then_plain(
        SuffixCategory::Participle,
        &with_adjective_endings(PARTICIPLE_AFTER_A),
        &with_adjective_endings(PARTICIPLE_OTHER),
    )
});

pub static ADJECTIVE: Lazy<SuffixGroup> =
    Lazy::new(|| SuffixGroup::plain(SuffixCategory::Adjective, ADJECTIVE_ENDINGS));

pub static VERB: Lazy<SuffixGroup> = Lazy::new(|| {
    SuffixGroup::gated_then_plain(SuffixCategory::Verb, VERB_AFTER_A, VERB_OTHER)
});

pub static NOUN: Lazy<SuffixGroup> =
    Lazy::new(|| SuffixGroup::plain(SuffixCategory::Noun, NOUN_ENDINGS));

pub static TRAILING_I: Lazy<SuffixGroup> =
    Lazy::new(|| SuffixGroup::plain(SuffixCategory::TrailingI, &["и"]));

pub static DERIVATIONAL: Lazy<SuffixGroup> =
    Lazy::new(|| SuffixGroup::plain(SuffixCategory::Derivational, DERIVATIONAL_ENDINGS));

pub static DOUBLE_N: Lazy<SuffixGroup> =
    Lazy::new(|| SuffixGroup::plain(SuffixCategory::DoubleN, &["нн"]));

pub static SUPERLATIVE: Lazy<SuffixGroup> =
    Lazy::new(|| SuffixGroup::plain(SuffixCategory::Superlative, SUPERLATIVE_ENDINGS));

pub static SOFT_SIGN: Lazy<SuffixGroup> =
    Lazy::new(|| SuffixGroup::plain(SuffixCategory::SoftSign, &["ь"]));
