use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, Table};
use moviedb_models::Movie;
use owo_colors::OwoColorize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MessageKind {
    Success,
    Error,
    Info,
    Warning,
}

impl MessageKind {
    fn as_str(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
            MessageKind::Info => "info",
            MessageKind::Warning => "warning",
        }
    }
}

pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.message(MessageKind::Success, msg.as_ref());
    }

    /// Shown even in quiet mode.
    pub fn error(&self, msg: impl AsRef<str>) {
        self.message(MessageKind::Error, msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.message(MessageKind::Info, msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.message(MessageKind::Warning, msg.as_ref());
    }

    fn message(&self, kind: MessageKind, msg: &str) {
        if self.quiet && kind != MessageKind::Error {
            return;
        }

        match self.format {
            OutputFormat::Human => match kind {
                MessageKind::Success => println!("{} {}", "✓".green(), msg),
                MessageKind::Error => eprintln!("{} {}", "✗".red(), msg),
                MessageKind::Warning => println!("{} {}", "⚠".yellow(), msg),
                MessageKind::Info => println!("{}", msg),
            },
            OutputFormat::Json | OutputFormat::JsonPretty => {
                self.print_json(&json!({ "type": kind.as_str(), "message": msg }));
            }
        }
    }

    /// Movies as a table in human mode, as an array of objects otherwise.
    pub fn movies(&self, movies: &[Movie]) {
        match self.format {
            OutputFormat::Human => {
                if self.quiet {
                    return;
                }
                if movies.is_empty() {
                    println!("(no movies)");
                    return;
                }
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .set_header(vec!["Title", "Director", "Year", "Minutes"]);
                for movie in movies {
                    table.add_row(vec![
                        movie.title().to_string(),
                        movie.director().unwrap_or("-").to_string(),
                        movie.year().to_string(),
                        movie.running_time().to_string(),
                    ]);
                }
                println!("{table}");
            }
            OutputFormat::Json | OutputFormat::JsonPretty => {
                let value = serde_json::to_value(movies).unwrap_or_default();
                self.json(&value);
            }
        }
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }

        self.print_json(data);
    }

    fn print_json(&self, data: &serde_json::Value) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(data).unwrap_or_default());
            }
            OutputFormat::JsonPretty => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Human => {
                println!("{}", data);
            }
        }
    }
}
