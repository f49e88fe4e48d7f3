//! Классификация состава по токенам.
//!
//! Каждый токен нормализованного текста прогоняется через все паттерны
//! всех категорий. Совпадение без применимого исключения даёт запись
//! в результате. Дедупликация не выполняется: если несколько паттернов
//! одной категории совпали с токеном, записей будет несколько.

mod rules;
mod types;

pub use rules::Category;
pub use types::Finding;

use crate::normalizer;

/// Классифицировать текст состава.
///
/// Чистая функция: детерминированна и не падает ни на каком входе,
/// включая пустые строки и не-ASCII текст.
pub fn classify(text: &str) -> Vec<Finding> {
    let cleaned = normalizer::clean_text(text);
    let mut found = Vec::new();

    for token in normalizer::tokenize(&cleaned) {
        for category in Category::ALL {
            for pattern in category.patterns() {
                if pattern.is_match(token) && !is_exception(token, &cleaned, category) {
                    found.push(Finding {
                        ingredient: token.to_string(),
                        category,
                        reason: category.reason(),
                    });
                }
            }
        }
    }

    found
}

/// Проверить, покрыт ли токен исключением категории.
///
/// Исключения в таблицах многословные ("cetearyl alcohol"), а токенизация
/// разбивает их на слова, поэтому кроме вхождения исключения в сам токен
/// проверяется фраза целиком: токен входит в исключение, а исключение —
/// в нормализованный текст.
fn is_exception(token: &str, cleaned_text: &str, category: Category) -> bool {
    category
        .exceptions()
        .iter()
        .any(|ex| token.contains(ex) || (ex.contains(token) && cleaned_text.contains(ex)))
}
