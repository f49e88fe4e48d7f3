//! Тесты классификатора
//!
//! Проверяют свойства классификации на сценариях из реальных составов.

use ingredient_ai::{classify, Category};

/// Пустой вход даёт пустой список
#[test]
fn test_empty_input() {
    assert!(classify("").is_empty());
}

/// Хороший состав не даёт срабатываний
#[test]
fn test_clean_composition() {
    let findings = classify("glycerin, water, panthenol");
    assert!(findings.is_empty());
}

/// Сценарий с этикетки: силикон и сульфат найдены, жирный спирт подавлен
#[test]
fn test_label_scenario() {
    let findings = classify("Aqua, Cetearyl Alcohol, Sodium Laureth Sulfate, Dimethicone");

    let silicones: Vec<_> = findings
        .iter()
        .filter(|f| f.category == Category::Silicones)
        .collect();
    assert!(!silicones.is_empty());
    assert!(silicones.iter().all(|f| f.ingredient == "dimethicone"));

    let sulfates: Vec<_> = findings
        .iter()
        .filter(|f| f.category == Category::Sulfates)
        .collect();
    assert_eq!(sulfates.len(), 1);
    assert_eq!(sulfates[0].ingredient, "sulfate");

    assert!(!findings.iter().any(|f| f.category == Category::Alcohols));
}

/// Регистр не влияет на результат
#[test]
fn test_case_invariance() {
    assert_eq!(classify("DIMETHICONE"), classify("dimethicone"));
    assert_eq!(
        classify("Sodium Laureth SULFATE"),
        classify("sodium laureth sulfate")
    );
}

/// Повторные вызовы дают идентичный результат, включая дубликаты
#[test]
fn test_idempotence_with_duplicates() {
    let text = "dimethicone, dimethicone";
    let first = classify(text);
    let second = classify(text);

    assert_eq!(first, second);
    // Два токена по два совпавших паттерна силиконов
    assert_eq!(first.len(), 4);
}

/// Совпадение без исключения несёт фиксированное пояснение категории
#[test]
fn test_reason_attached() {
    let findings = classify("paraffin");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].category, Category::Waxes);
    assert_eq!(
        findings[0].reason,
        "оставляют плёнку и тяжело смываются без сульфатов"
    );
}

/// Все 13 жирных спиртов подавляются исключениями
#[test]
fn test_all_fatty_alcohols_suppressed() {
    let fatty = [
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

    for name in fatty {
        let findings = classify(name);
        assert!(
            !findings.iter().any(|f| f.category == Category::Alcohols),
            "{} не должен давать категорию alcohols",
            name
        );
    }
}

/// Денатурат и изопропанол — срабатывания
#[test]
fn test_drying_alcohols_flagged() {
    assert!(classify("alcohol denat")
        .iter()
        .any(|f| f.category == Category::Alcohols));
    assert!(classify("isopropanol")
        .iter()
        .any(|f| f.category == Category::Alcohols));
    assert!(classify("2-propanol")
        .iter()
        .any(|f| f.category == Category::Alcohols));
}

/// Исключение категории восков: эмульгирующий воск не считается
#[test]
fn test_wax_exception() {
    assert!(classify("emulsifying wax").is_empty());
    assert!(!classify("carnauba wax").is_empty());
}

/// behentrimonium methosulfate не даёт категорию сульфатов
#[test]
fn test_methosulfate_not_flagged() {
    assert!(classify("behentrimonium methosulfate").is_empty());
}

/// Мыльные основы: saponified и soap
#[test]
fn test_soap_flagged() {
    let findings = classify("saponified coconut oil");
    assert!(findings.iter().any(|f| f.category == Category::Soap));

    let findings = classify("soap");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].category, Category::Soap);
}

/// Силиконовые суффиксы: -cone, -siloxane, sil-
#[test]
fn test_silicone_variants() {
    for name in ["amodimethicone", "cyclopentasiloxane", "silsesquioxane"] {
        assert!(
            classify(name)
                .iter()
                .any(|f| f.category == Category::Silicones),
            "{} должен попасть в silicones",
            name
        );
    }
}

/// Не-ASCII вход не ломает классификацию
#[test]
fn test_unicode_input_total() {
    assert!(classify("Вода, глицерин, пантенол 💚").is_empty());
    assert!(classify("水、グリセリン").is_empty());
}
