//! ingredient-ai — анализ состава косметики.
//!
//! Принимает фото и/или текст состава, прогоняет через пайплайн
//! OCR → нормализация → классификация и возвращает вердикт со списком
//! нежелательных ингредиентов.

pub mod cli;
pub mod classifier;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod ocr;
pub mod server;

pub use classifier::{classify, Category, Finding};
pub use config::Config;
pub use error::{IngredientAiError, Result};
