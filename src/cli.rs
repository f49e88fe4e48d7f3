use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ingredient-ai")]
#[command(about = "Анализ состава косметики: OCR и поиск нежелательных ингредиентов", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Подробный лог
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Запустить HTTP-сервер
    Serve {
        /// Адрес для прослушивания (по умолчанию из конфигурации)
        #[arg(long)]
        host: Option<String>,

        /// Порт (по умолчанию из конфигурации)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Проверить состав из командной строки
    Check {
        /// Текст состава
        text: Option<String>,

        /// Фото состава (JPG/PNG)
        #[arg(short, long)]
        image: Option<PathBuf>,
    },

    /// Показать конфигурацию
    Config {
        /// Вывести текущие настройки
        #[arg(long)]
        show: bool,
    },
}
