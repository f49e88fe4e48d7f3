//! Таблицы правил классификации.
//!
//! Списки паттернов, исключений и пояснений собраны вручную и
//! воспроизводятся дословно: это предметные знания системы.
//! Таблицы неизменяемы, компилируются один раз и читаются из любого
//! количества задач без блокировок.

use regex::Regex;
use serde::Serialize;

/// Категория нежелательных ингредиентов.
///
/// Порядок вариантов задаёт порядок проверки токена.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Silicones,
    Waxes,
    Sulfates,
    Alcohols,
    Soap,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

lazy_static::lazy_static! {
    static ref SILICONE_PATTERNS: Vec<Regex> = compile(&[
        r"\w*cone\b", r"dimethi", r"\bsil", r"siloxane", r"silsesquioxane",
        r"silylate", r"botanisil", r"microsil",
    ]);
    static ref WAX_PATTERNS: Vec<Regex> = compile(&[
        r"\bcera", r"\bcire", r"wax", r"petroleum", r"petrolatum",
        r"paraffin", r"mineral jelly",
    ]);
    static ref SULFATE_PATTERNS: Vec<Regex> = compile(&[
        r"\bsulfate\b", r"\bsulphate\b",
    ]);
    static ref ALCOHOL_PATTERNS: Vec<Regex> = compile(&[
        r"\balcohol\b", r"ethyl alcohol", r"isopropyl alcohol",
        r"propyl alcohol", r"sd alcohol", r"isopropanol", r"2-propanol",
    ]);
    static ref SOAP_PATTERNS: Vec<Regex> = compile(&[
        r"saponified", r"soap", r"sodium palm", r"sodium carboxylate",
    ]);
}

const SILICONE_EXCEPTIONS: &[&str] = &["peg-12 dimethicone", "peg/ppg-18/18 dimethicone"];

const WAX_EXCEPTIONS: &[&str] = &["peg-8 beeswax", "emulsifying wax"];

const SULFATE_EXCEPTIONS: &[&str] = &["behentrimonium methosulfate"];

// Жирные спирты: не сушат волосы и не считаются нежелательными
const ALCOHOL_EXCEPTIONS: &[&str] = &[
    "cetyl alcohol",
    "stearyl alcohol",
    "cetearyl alcohol",
    "oleyl alcohol",
    "lauryl alcohol",
    "myristyl alcohol",
    "isostearyl alcohol",
    "lanolin alcohol",
    "tridecyl alcohol",
    "decyl alcohol",
    "coconut alcohol",
    "jojoba alcohol",
    "hydrogenated rapeseed alcohol",
];

impl Category {
    /// Все категории в порядке проверки.
    pub const ALL: [Category; 5] = [
        Category::Silicones,
        Category::Waxes,
        Category::Sulfates,
        Category::Alcohols,
        Category::Soap,
    ];

    /// Упорядоченный список паттернов категории.
    pub fn patterns(&self) -> &'static [Regex] {
        match self {
            Category::Silicones => &SILICONE_PATTERNS,
            Category::Waxes => &WAX_PATTERNS,
            Category::Sulfates => &SULFATE_PATTERNS,
            Category::Alcohols => &ALCOHOL_PATTERNS,
            Category::Soap => &SOAP_PATTERNS,
        }
    }

    /// Подстроки-исключения, отменяющие совпадение.
    pub fn exceptions(&self) -> &'static [&'static str] {
        match self {
            Category::Silicones => SILICONE_EXCEPTIONS,
            Category::Waxes => WAX_EXCEPTIONS,
            Category::Sulfates => SULFATE_EXCEPTIONS,
            Category::Alcohols => ALCOHOL_EXCEPTIONS,
            Category::Soap => &[],
        }
    }

    /// Пояснение, почему категория нежелательна.
    pub fn reason(&self) -> &'static str {
        match self {
            Category::Silicones => {
                "может накапливаться на волосах и требовать сильных шампуней для удаления"
            }
            Category::Waxes => "оставляют плёнку и тяжело смываются без сульфатов",
            Category::Sulfates => "могут сушить волосы и кожу головы",
            Category::Alcohols => "могут сушить волосы, особенно в больших количествах",
            Category::Soap => {
                "может вызывать накопление и пересушивать волосы, особенно в жёсткой воде"
            }
        }
    }

    /// Имя категории в ответе API.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Silicones => "silicones",
            Category::Waxes => "waxes",
            Category::Sulfates => "sulfates",
            Category::Alcohols => "alcohols",
            Category::Soap => "soap",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
