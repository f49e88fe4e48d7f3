//! Извлечение текста из изображения через tesseract CLI.
//!
//! Tesseract используется как чёрный ящик: байты изображения подаются
//! на stdin (`tesseract stdin stdout`), распознанный текст читается из
//! stdout. Без повторов, без предобработки и без оценки качества.
//! Стоимость распознавания растёт с размером входа, поэтому вызов
//! ограничен таймаутом из конфигурации.

use crate::config::Config;
use crate::error::{IngredientAiError, Result};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Распознать текст на изображении.
///
/// Возвращает ошибку, если байты не являются корректным изображением
/// или tesseract завершился неуспешно. Пустая строка — допустимый
/// результат: текст просто не распознан.
pub async fn extract_text(image_bytes: &[u8], config: &Config) -> Result<String> {
    // Битые байты отсекаются до запуска подпроцесса
    image::load_from_memory(image_bytes)
        .map_err(|e| IngredientAiError::ImageLoad(e.to_string()))?;

    let mut child = Command::new("tesseract")
        .args(["stdin", "stdout", "-l", &config.ocr_lang])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| IngredientAiError::Ocr(format!("не удалось запустить tesseract: {}", e)))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| IngredientAiError::Ocr("stdin tesseract недоступен".into()))?;
    stdin.write_all(image_bytes).await?;
    drop(stdin);

    let output = match tokio::time::timeout(
        Duration::from_secs(config.ocr_timeout_seconds),
        child.wait_with_output(),
    )
    .await
    {
        Ok(result) => result?,
        Err(_) => return Err(IngredientAiError::OcrTimeout(config.ocr_timeout_seconds)),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(IngredientAiError::Ocr(format!(
            "tesseract завершился с кодом {:?}: {}",
            output.status.code(),
            stderr
        )));
    }

    let text = String::from_utf8_lossy(&output.stdout).to_string();
    debug!(len = text.len(), "текст извлечён из изображения");

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Некорректные байты отклоняются без запуска tesseract
    #[tokio::test]
    async fn test_invalid_image_rejected() {
        let config = Config::default();
        let result = extract_text(b"definitely not an image", &config).await;

        assert!(matches!(
            result.unwrap_err(),
            IngredientAiError::ImageLoad(_)
        ));
    }

    /// Пустой ввод — тоже не изображение
    #[tokio::test]
    async fn test_empty_bytes_rejected() {
        let config = Config::default();
        let result = extract_text(&[], &config).await;

        assert!(matches!(
            result.unwrap_err(),
            IngredientAiError::ImageLoad(_)
        ));
    }
}
