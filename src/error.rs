use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngredientAiError {
    #[error("Нет текста для анализа")]
    EmptyInput,

    #[error("Ошибка конфигурации: {0}")]
    Config(String),

    #[error("Файл не найден: {0}")]
    FileNotFound(String),

    #[error("Не удалось прочитать изображение: {0}")]
    ImageLoad(String),

    #[error("Ошибка OCR: {0}")]
    Ocr(String),

    #[error("OCR не уложился в {0} с")]
    OcrTimeout(u64),

    #[error("Ошибка чтения формы: {0}")]
    Multipart(String),

    #[error("Ошибка разбора JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngredientAiError>;
