//! `vibes scaffold` command implementation.
//!
//! Writes one page per type and language from the UI translation files:
//! `{locales}/{lang}/translation.json` becomes
//! `{content}/{lang}/types/{TYPE}.md`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Deserialize;
use vibes_catalog::TypeCode;
use vibes_config::{CliSettings, Config};
use vibes_content::{FrontMatter, Language, compose};

use crate::error::CliError;
use crate::output::Output;

/// Emoji used when a translation has none.
const DEFAULT_EMOJI: &str = "✨";

/// Arguments for the scaffold command.
#[derive(Args)]
pub(crate) struct ScaffoldArgs {
    /// Directory holding `{lang}/translation.json` files.
    #[arg(short, long)]
    locales: PathBuf,

    /// Path to configuration file (default: auto-discover vibes.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(short = 'd', long)]
    content_dir: Option<PathBuf>,

    /// Overwrite pages that already exist.
    #[arg(long)]
    force: bool,
}

impl ScaffoldArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let content_root = &config.content_resolved.root_dir;
        let extension = &config.content_resolved.extension;

        let mut total = Summary::default();
        for language in Language::ALL {
            let path = self.locales.join(language.code()).join("translation.json");
            let translations = match Translations::read(&path) {
                Ok(translations) => translations,
                Err(message) => {
                    output.warning(&format!("Skipping {language}: {message}"));
                    continue;
                }
            };

            let summary =
                scaffold_language(&translations, language, content_root, extension, self.force)?;
            output.info(&format!(
                "{language}: {} written, {} skipped",
                summary.written, summary.skipped
            ));
            total.written += summary.written;
            total.skipped += summary.skipped;
        }

        output.success(&format!(
            "Scaffolded {} pages into {} ({} existing kept)",
            total.written,
            content_root.display(),
            total.skipped
        ));
        Ok(())
    }
}

/// The `types` section of a translation file; other keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct Translations {
    #[serde(default)]
    types: HashMap<String, TypeTranslation>,
}

impl Translations {
    fn read(path: &Path) -> Result<Self, String> {
        let raw = std::fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
        serde_json::from_str(&raw).map_err(|e| format!("{}: {e}", path.display()))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TypeTranslation {
    name: Option<String>,
    emoji: Option<String>,
    description: Option<String>,
    superpowers_text: Option<String>,
    annoyances_text: Option<String>,
    relationships_text: Option<String>,
    career_text: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    written: usize,
    skipped: usize,
}

/// Write the type pages for one language.
fn scaffold_language(
    translations: &Translations,
    language: Language,
    content_root: &Path,
    extension: &str,
    force: bool,
) -> Result<Summary, CliError> {
    let dir = content_root.join(language.code()).join("types");
    std::fs::create_dir_all(&dir)?;

    let mut summary = Summary::default();
    for code in TypeCode::ALL {
        let path = dir.join(format!("{code}.{extension}"));
        if path.exists() && !force {
            tracing::debug!(path = %path.display(), "Page exists, keeping");
            summary.skipped += 1;
            continue;
        }

        let entry = translations.types.get(code.as_str());
        std::fs::write(&path, type_page(code, entry)?)?;
        tracing::info!(language = %language, code = %code, "Wrote type page");
        summary.written += 1;
    }
    Ok(summary)
}

/// Render one type page. Missing fields fall back to the code, the default
/// emoji, or an empty string.
fn type_page(code: TypeCode, entry: Option<&TypeTranslation>) -> Result<String, CliError> {
    let default = TypeTranslation::default();
    let entry = entry.unwrap_or(&default);

    let description = non_empty(entry.description.as_deref()).unwrap_or_default();
    let front_matter = FrontMatter {
        title: Some(non_empty(entry.name.as_deref()).unwrap_or_else(|| code.as_str().to_owned())),
        description: Some(description.clone()),
        emoji: Some(non_empty(entry.emoji.as_deref()).unwrap_or_else(|| DEFAULT_EMOJI.to_owned())),
        color_group: Some(code.group().as_str().to_owned()),
        superpowers_text: Some(non_empty(entry.superpowers_text.as_deref()).unwrap_or_default()),
        annoyances_text: Some(non_empty(entry.annoyances_text.as_deref()).unwrap_or_default()),
        relationships_text: Some(
            non_empty(entry.relationships_text.as_deref()).unwrap_or_default(),
        ),
        career_text: Some(non_empty(entry.career_text.as_deref()).unwrap_or_default()),
        ..FrontMatter::default()
    };

    Ok(compose(&front_matter, &format!("{description}\n"))?)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|value| !value.is_empty()).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vibes_content::{ContentIndex, FsSource, parse};

    use super::*;

    const TRANSLATION: &str = r#"{
        "nav": {"home": "Inicio"},
        "types": {
            "INTJ": {
                "name": "Arquitecto",
                "emoji": "🧠",
                "description": "Piensa en \"planes\"",
                "superpowers_text": "Estrategia",
                "career_text": ""
            }
        }
    }"#;

    fn translations() -> Translations {
        serde_json::from_str(TRANSLATION).unwrap()
    }

    #[test]
    fn test_type_page_round_trips() {
        let translations = translations();
        let text = type_page(TypeCode::Intj, translations.types.get("INTJ")).unwrap();

        let doc = parse(&text, Language::Es, "types/INTJ");
        assert_eq!(doc.title, "Arquitecto");
        assert_eq!(doc.description, "Piensa en \"planes\"");
        assert_eq!(doc.emoji.as_deref(), Some("🧠"));
        assert_eq!(doc.color_group.as_deref(), Some("analyst"));
        assert_eq!(doc.superpowers_text.as_deref(), Some("Estrategia"));
        assert_eq!(doc.career_text.as_deref(), Some(""));
        assert_eq!(doc.raw_body.trim(), "Piensa en \"planes\"");
    }

    #[test]
    fn test_type_page_defaults() {
        let text = type_page(TypeCode::Esfp, None).unwrap();

        let doc = parse(&text, Language::En, "types/ESFP");
        assert_eq!(doc.title, "ESFP");
        assert_eq!(doc.emoji.as_deref(), Some(DEFAULT_EMOJI));
        assert_eq!(doc.color_group.as_deref(), Some("explorer"));
        assert_eq!(doc.description, "");
    }

    #[test]
    fn test_scaffold_language_writes_all_types() {
        let temp_dir = tempfile::tempdir().unwrap();

        let summary =
            scaffold_language(&translations(), Language::Es, temp_dir.path(), "md", false)
                .unwrap();
        assert_eq!(summary, Summary { written: 16, skipped: 0 });

        let index = ContentIndex::load(&FsSource::new(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(index.list_pages(Language::Es).len(), 16);
        assert_eq!(index.get_page("es", "types/INTJ").unwrap().title, "Arquitecto");
        assert_eq!(index.get_page("es", "types/ISTJ").unwrap().title, "ISTJ");
    }

    #[test]
    fn test_scaffold_language_keeps_existing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("de/types");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("INTJ.md"), "custom").unwrap();

        let summary =
            scaffold_language(&translations(), Language::De, temp_dir.path(), "md", false)
                .unwrap();
        assert_eq!(summary, Summary { written: 15, skipped: 1 });
        assert_eq!(std::fs::read_to_string(dir.join("INTJ.md")).unwrap(), "custom");

        let summary =
            scaffold_language(&translations(), Language::De, temp_dir.path(), "md", true)
                .unwrap();
        assert_eq!(summary, Summary { written: 16, skipped: 0 });
        assert_ne!(std::fs::read_to_string(dir.join("INTJ.md")).unwrap(), "custom");
    }

    #[test]
    fn test_translations_read_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = Translations::read(&temp_dir.path().join("translation.json")).unwrap_err();
        assert!(err.contains("translation.json"));
    }
}
