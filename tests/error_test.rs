//! Тесты ошибок
//!
//! Проверяют сообщения и классификацию ошибок на границе сервиса.

use ingredient_ai::IngredientAiError;

/// Сообщение о пустом входе фиксировано: оно уходит клиенту как есть
#[test]
fn test_empty_input_message() {
    let err = IngredientAiError::EmptyInput;
    assert_eq!(err.to_string(), "Нет текста для анализа");
}

/// У всех ошибок непустой Display
#[test]
fn test_error_display() {
    let errors = vec![
        IngredientAiError::EmptyInput,
        IngredientAiError::Config("тестовая ошибка".to_string()),
        IngredientAiError::FileNotFound("label.jpg".to_string()),
        IngredientAiError::ImageLoad("битые байты".to_string()),
        IngredientAiError::Ocr("tesseract недоступен".to_string()),
        IngredientAiError::OcrTimeout(30),
        IngredientAiError::Multipart("оборванная форма".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "пустое сообщение: {:?}", err);
    }
}

/// Таймаут OCR включает лимит в секундах
#[test]
fn test_ocr_timeout_message() {
    let err = IngredientAiError::OcrTimeout(30);
    assert!(err.to_string().contains("30"));
}

/// Ошибки ввода-вывода конвертируются через From
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "нет файла");
    let err: IngredientAiError = io_err.into();
    assert!(matches!(err, IngredientAiError::Io(_)));
}
