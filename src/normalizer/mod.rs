//! Нормализация текста состава.
//!
//! Текст приходит либо из OCR, либо из поля формы, и в обоих случаях
//! содержит мусор: знаки препинания, скобки, символы других алфавитов.
//! Перед классификацией всё, что не входит в написание ингредиентов,
//! заменяется пробелом.

use regex::Regex;

/// Привести текст к нижнему регистру и оставить только буквы, цифры,
/// пробельные символы, дефис и слэш. Остальное заменяется пробелом.
pub fn clean_text(text: &str) -> String {
    lazy_static::lazy_static! {
        // После to_lowercase заглавных латинских букв уже нет
        static ref NON_INGREDIENT: Regex = Regex::new(r"[^a-z0-9\s\-/]").unwrap();
    }

    NON_INGREDIENT
        .replace_all(&text.to_lowercase(), " ")
        .into_owned()
}

/// Разбить нормализованный текст на токены-слова.
///
/// Разбиение по пробелам — достаточная замена NLP-токенизатору:
/// после `clean_text` в тексте остаются только слова, дефисы и слэши.
pub fn tokenize(cleaned: &str) -> impl Iterator<Item = &str> {
    cleaned.split_whitespace()
}
