use serde::Serialize;

use super::rules::Category;

/// Одно срабатывание: токен, категория и пояснение.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub ingredient: String,
    pub category: Category,
    pub reason: &'static str,
}
