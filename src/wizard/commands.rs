//! Command handling for the wizard

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use thiserror::Error;

use super::app::run_wizard;
use super::assets::AssetStatus;
use super::config::WizardConfig;
use super::context::AppContext;
use super::navigator::PageNavigator;
use super::pages::{Element, PageCatalog};
use super::view::{self, FRAME_HEIGHT, FRAME_WIDTH, Focus};
use crate::common::config::DocumentedConfig;
use crate::common::terminal;
use crate::ui::prelude::*;

#[derive(Subcommand, Debug, Clone)]
pub enum WizardCommands {
    /// Run the onboarding wizard (default)
    Run {
        /// Open the wizard in a new terminal window
        #[arg(long)]
        gui: bool,
    },
    /// List the wizard pages
    Pages,
    /// Print a page without starting the interactive wizard
    Show {
        /// Page number (starting at 1) or page id
        page: String,
        /// Print the rendered wizard frame instead of the page text
        #[arg(long)]
        frame: bool,
    },
    /// Step through the pages without a terminal and print each position
    Walk {
        #[arg(required = true, value_enum)]
        steps: Vec<Step>,
    },
    /// Check that the images used by the pages are present
    Assets,
    /// Manage the wizard config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Print the effective config
    Show,
    /// Write a documented config file with the defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Step {
    #[value(alias = "n")]
    Next,
    #[value(aliases = ["prev", "p"])]
    Previous,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageLookupError {
    #[error("page {number} does not exist (the wizard has {count} pages)")]
    OutOfRange { number: usize, count: usize },
    #[error("no page with id '{0}'")]
    UnknownId(String),
}

/// Resolve a 1-based page number or a page id to a page index.
pub fn resolve_page(catalog: &PageCatalog, page: &str) -> Result<usize, PageLookupError> {
    if let Ok(number) = page.parse::<usize>() {
        if number == 0 || number > catalog.len() {
            return Err(PageLookupError::OutOfRange {
                number,
                count: catalog.len(),
            });
        }
        return Ok(number - 1);
    }

    catalog
        .find(page)
        .map(|(index, _)| index)
        .ok_or_else(|| PageLookupError::UnknownId(page.to_string()))
}

/// Apply `steps` to a fresh navigator, returning the index after each step
/// and whether it moved.
pub fn walk(page_count: usize, steps: &[Step]) -> Result<Vec<(usize, bool)>> {
    let mut navigator = PageNavigator::new(page_count)?;
    Ok(steps
        .iter()
        .map(|step| {
            let moved = match step {
                Step::Next => navigator.next(),
                Step::Previous => navigator.previous(),
            };
            (navigator.current_index(), moved)
        })
        .collect())
}

/// A fresh navigator stepped forward to `index`.
fn navigator_at(page_count: usize, index: usize) -> Result<PageNavigator> {
    let mut navigator = PageNavigator::new(page_count)?;
    for _ in 0..index {
        navigator.next();
    }
    Ok(navigator)
}

pub fn handle_wizard_command(command: Option<WizardCommands>, debug: bool) -> Result<()> {
    match command.unwrap_or(WizardCommands::Run { gui: false }) {
        WizardCommands::Run { gui: true } => launch_wizard_in_terminal(debug),
        WizardCommands::Run { gui: false } => {
            let ctx = AppContext::load()?;
            ctx.assets.check_all(&ctx.catalog);
            run_wizard(ctx)
        }
        WizardCommands::Pages => {
            list_pages(&PageCatalog::builtin());
            Ok(())
        }
        WizardCommands::Show { page, frame } => show_page(&AppContext::load()?, &page, frame),
        WizardCommands::Walk { steps } => walk_pages(&steps),
        WizardCommands::Assets => check_assets(&AppContext::load()?),
        WizardCommands::Config { command } => handle_config_command(command),
    }
}

/// Launch the wizard in its own terminal window
///
/// The window closes when the wizard exits.
fn launch_wizard_in_terminal(debug: bool) -> Result<()> {
    let config = WizardConfig::load()?;
    let mut args: Vec<String> = vec![];

    if debug {
        args.push("--debug".to_string());
    }
    args.push("run".to_string());

    emit(
        Level::Debug,
        "wizard.gui.launch",
        "Launching wizard in a terminal window",
        None,
    );

    terminal::launch_gui_terminal(config.terminal.as_deref(), "sundial", "Sundial", &args)
}

fn list_pages(catalog: &PageCatalog) {
    for (index, page) in catalog.iter().enumerate() {
        emit(
            Level::Info,
            "wizard.page",
            &format!("{}. {:<10} {}", index + 1, page.id, page.title),
            Some(serde_json::json!({
                "index": index,
                "id": page.id,
                "title": page.title,
            })),
        );
    }
}

fn show_page(ctx: &AppContext, page: &str, frame: bool) -> Result<()> {
    let index = resolve_page(&ctx.catalog, page)?;

    if frame {
        let navigator = navigator_at(ctx.catalog.len(), index)?;
        let lines =
            view::render_to_lines(ctx, &navigator, Focus::Next, FRAME_WIDTH, FRAME_HEIGHT)?;
        match get_output_format() {
            OutputFormat::Json => emit(
                Level::Info,
                "wizard.frame",
                &format!("Rendered page {}", index + 1),
                Some(serde_json::json!({ "index": index, "lines": lines })),
            ),
            OutputFormat::Text => {
                for line in lines {
                    println!("{line}");
                }
            }
        }
        return Ok(());
    }

    let Some(page) = ctx.catalog.get(index) else {
        return Ok(());
    };

    if matches!(get_output_format(), OutputFormat::Json) {
        emit(
            Level::Info,
            "wizard.page",
            page.title,
            Some(serde_json::json!({ "index": index, "page": page })),
        );
        return Ok(());
    }

    emit(Level::Info, "wizard.page.title", page.title, None);
    separator(true);
    for element in &page.elements {
        match element {
            Element::Paragraph { text } => {
                for line in view::wrap_words(text, 72) {
                    emit(Level::Info, "wizard.page.text", &line, None);
                }
                emit(Level::Info, "wizard.page.text", "", None);
            }
            Element::BulletColumns { items, per_column } => {
                for row in view::bullet_rows(items, *per_column) {
                    emit(Level::Info, "wizard.page.bullets", &row, None);
                }
                emit(Level::Info, "wizard.page.bullets", "", None);
            }
            Element::Image(image) => {
                let (icon, note) = match ctx.asset_status(image.file) {
                    AssetStatus::Found => (NerdFont::Image, ""),
                    AssetStatus::Missing => (NerdFont::Warning, " (missing)"),
                };
                emit(
                    Level::Info,
                    "wizard.page.image",
                    &format!("{} {}: {}{}", char::from(icon), image.label, image.file, note),
                    None,
                );
            }
        }
    }
    separator(true);
    emit(
        Level::Info,
        "wizard.page.footer",
        &view::step_indicator(index, ctx.catalog.len()),
        None,
    );
    Ok(())
}

fn walk_pages(steps: &[Step]) -> Result<()> {
    let catalog = PageCatalog::builtin();
    let visited = walk(catalog.len(), steps)?;

    for (step, (index, moved)) in steps.iter().zip(visited) {
        let title = catalog.get(index).map_or("", |p| p.title);
        let (icon, bound) = match step {
            Step::Next => (NerdFont::ArrowRight, " (last page)"),
            Step::Previous => (NerdFont::ArrowLeft, " (first page)"),
        };
        let note = if moved { "" } else { bound };
        emit(
            Level::Info,
            "wizard.walk.step",
            &format!("{} {} {}{}", char::from(icon), index + 1, title, note),
            Some(serde_json::json!({
                "step": step.to_possible_value().map(|v| v.get_name().to_string()),
                "index": index,
                "moved": moved,
            })),
        );
    }
    Ok(())
}

fn check_assets(ctx: &AppContext) -> Result<()> {
    emit(
        Level::Info,
        "wizard.assets.dir",
        &format!(
            "{} Static directory: {}",
            char::from(NerdFont::Folder),
            ctx.assets.static_dir().display()
        ),
        Some(serde_json::json!({ "dir": ctx.assets.static_dir().display().to_string() })),
    );

    let reports = ctx.assets.check_all(&ctx.catalog);
    for report in reports.iter().filter(|r| r.status == AssetStatus::Found) {
        emit(
            Level::Success,
            "wizard.asset.found",
            &format!("{} {}", char::from(NerdFont::Check), report.file),
            Some(serde_json::json!({ "asset": report.file })),
        );
    }

    let missing = reports
        .iter()
        .filter(|r| r.status == AssetStatus::Missing)
        .count();
    emit(
        if missing == 0 { Level::Success } else { Level::Warn },
        "wizard.assets.summary",
        &format!(
            "{} of {} images found; missing images are drawn as placeholders",
            reports.len() - missing,
            reports.len()
        ),
        Some(serde_json::json!({ "total": reports.len(), "missing": missing })),
    );
    Ok(())
}

fn handle_config_command(command: ConfigCommands) -> Result<()> {
    let path = WizardConfig::config_path()?;
    match command {
        ConfigCommands::Path => {
            emit(
                Level::Info,
                "config.path",
                &path.display().to_string(),
                Some(serde_json::json!({ "path": path.display().to_string() })),
            );
        }
        ConfigCommands::Show => {
            let config = WizardConfig::load_from_path(&path)?;
            match get_output_format() {
                OutputFormat::Json => emit(
                    Level::Info,
                    "config.show",
                    &path.display().to_string(),
                    Some(serde_json::to_value(&config)?),
                ),
                OutputFormat::Text => print!("{}", config.to_documented_string()),
            }
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                emit(
                    Level::Warn,
                    "config.exists",
                    &format!(
                        "{} Config already exists at {} (use --force to overwrite)",
                        char::from(NerdFont::Warning),
                        path.display()
                    ),
                    None,
                );
                return Ok(());
            }
            WizardConfig::default().save_with_documentation(&path)?;
            emit(
                Level::Success,
                "config.init",
                &format!("{} Wrote {}", char::from(NerdFont::Check), path.display()),
                Some(serde_json::json!({ "path": path.display().to_string() })),
            );
        }
    }
    Ok(())
}
