//! Layout CLI commands.
//!
//! `displays`, `templates`, `resolve` and `apply` drive the layout engine
//! against a snapshot environment file.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::output;
use crate::config::{self, TilepadConfig};
use crate::constants::{SNAPSHOT_ENV_VAR, messages};
use crate::error::{TilepadError, TilepadResult};
use crate::layout::{
    Display, ExecutionSummary, LayoutAction, LayoutTemplate, Rect, Session, Snapshot,
    SnapshotHost, TemplateCatalog, WindowState,
};

/// Maximum description width in the template table.
const DESCRIPTION_WIDTH: usize = 60;

/// Arguments of `tilepad displays`.
#[derive(Args, Debug)]
pub struct DisplaysArgs {
    /// Snapshot environment file describing displays and windows.
    #[arg(long, short, env = SNAPSHOT_ENV_VAR, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Output in JSON format instead of table format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Arguments of `tilepad templates`.
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Output in JSON format instead of table format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Template and display selection shared by `resolve` and `apply`.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Template name. Defaults to `defaultTemplate` from the configuration.
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Snapshot environment file describing displays and windows.
    #[arg(long, short, env = SNAPSHOT_ENV_VAR, value_name = "PATH")]
    pub snapshot: PathBuf,

    /// Display id to arrange on, instead of the display of the focused window.
    #[arg(long, short, value_name = "ID")]
    pub display: Option<String>,

    /// Output in JSON format instead of table format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// Arguments of `tilepad apply`.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print the plan without changing any window.
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

// ============================================================================
// Output Types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveOutput<'a> {
    template: &'a str,
    display: Option<&'a str>,
    work_area: Option<Rect>,
    frames: &'a [Rect],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApplyOutput<'a> {
    template: &'a str,
    display: Option<&'a str>,
    dry_run: bool,
    plan: &'a [LayoutAction],
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ExecutionSummary>,
    /// Environment after the run, in snapshot file format.
    result: Snapshot,
}

#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "Selected")]
    selected: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Bounds")]
    bounds: String,
    #[tabled(rename = "Work area")]
    work_area: String,
}

#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slots")]
    slots: usize,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct FrameRow {
    #[tabled(rename = "Slot")]
    slot: usize,
    #[tabled(rename = "Top")]
    top: i32,
    #[tabled(rename = "Left")]
    left: i32,
    #[tabled(rename = "Width")]
    width: i32,
    #[tabled(rename = "Height")]
    height: i32,
}

#[derive(Tabled)]
struct ActionRow {
    #[tabled(rename = "#")]
    step: usize,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Window")]
    window: String,
    #[tabled(rename = "Frame")]
    frame: String,
}

#[derive(Tabled)]
struct WindowRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Frame")]
    frame: String,
}

// ============================================================================
// Commands
// ============================================================================

/// Lists the display picker entries.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded.
pub async fn execute_displays(args: &DisplaysArgs) -> TilepadResult<()> {
    let session = match &args.snapshot {
        Some(path) => {
            let host = SnapshotHost::load(path)?;
            open_session(&host, None).await?
        }
        None => {
            tracing::debug!("layout: no snapshot given, no displays to read");
            Session::default()
        }
    };

    if args.json {
        return output::print_json(&session.options());
    }

    if session.displays().is_empty() {
        println!("{}", messages::NO_DISPLAY.dimmed());
        return Ok(());
    }

    let selected = session.selected().map(|d| d.id.as_str());
    let rows = session.displays().iter().map(|d| DisplayRow {
        selected: output::format_bool(selected == Some(d.id.as_str())),
        id: d.id.clone(),
        label: d.label(),
        bounds: d.bounds.to_string(),
        work_area: d.work_area.to_string(),
    });
    output::print_table(rows);

    Ok(())
}

/// Lists the template catalog.
///
/// # Errors
///
/// Returns an error if a configured template is malformed.
pub fn execute_templates(args: &TemplatesArgs) -> TilepadResult<()> {
    let catalog = config::get_config().catalog()?;

    if args.json {
        let templates: Vec<&LayoutTemplate> = catalog.iter().collect();
        return output::print_json(&templates);
    }

    let rows = catalog.iter().map(|t| TemplateRow {
        name: t.name.clone(),
        slots: t.slot_count(),
        description: output::truncate(&t.description, DESCRIPTION_WIDTH),
    });
    output::print_table(rows);

    Ok(())
}

/// Prints the frames a template resolves to.
///
/// # Errors
///
/// Returns an error if the template or display is unknown, or the snapshot
/// cannot be loaded.
pub async fn execute_resolve(args: &TargetArgs) -> TilepadResult<()> {
    let config = config::get_config();
    let template = lookup_template(&config.catalog()?, args.template.as_deref(), config)?;
    let host = SnapshotHost::load(&args.snapshot)?;
    let session = open_session(&host, args.display.as_deref()).await?;

    let frames = session.resolve(&template).unwrap_or_default();
    let display = session.selected();

    if args.json {
        return output::print_json(&ResolveOutput {
            template: &template.name,
            display: display.map(|d| d.id.as_str()),
            work_area: session.work_area(),
            frames: &frames,
        });
    }

    let Some(display) = display else {
        println!("{}", messages::NO_DISPLAY.dimmed());
        return Ok(());
    };

    print_heading(&template, display);
    let rows = frames.iter().enumerate().map(|(i, frame)| FrameRow {
        slot: i + 1,
        top: frame.top,
        left: frame.left,
        width: frame.width,
        height: frame.height,
    });
    output::print_table(rows);

    Ok(())
}

/// Plans a template and, unless `--dry-run` is set, applies it to the snapshot.
///
/// # Errors
///
/// Returns an error if the template or display is unknown, or the snapshot
/// cannot be loaded.
pub async fn execute_apply(args: &ApplyArgs) -> TilepadResult<()> {
    let target = &args.target;
    let config = config::get_config();
    let template = lookup_template(&config.catalog()?, target.template.as_deref(), config)?;
    let host = SnapshotHost::load(&target.snapshot)?;
    let session = open_session(&host, target.display.as_deref()).await?;

    let (plan, summary) = if args.dry_run {
        (session.plan(&template, &host).await, None)
    } else {
        match session.apply(&template, &host, &host).await {
            Some(applied) => (Some(applied.plan), Some(applied.summary)),
            None => (None, None),
        }
    };

    let display = session.selected();

    if target.json {
        return output::print_json(&ApplyOutput {
            template: &template.name,
            display: display.map(|d| d.id.as_str()),
            dry_run: args.dry_run,
            plan: plan.as_deref().unwrap_or_default(),
            summary,
            result: host.snapshot(),
        });
    }

    let (Some(display), Some(plan)) = (display, plan) else {
        println!("{}", messages::NO_DISPLAY.dimmed());
        return Ok(());
    };

    print_heading(&template, display);
    let rows = plan.iter().enumerate().map(|(i, action)| action_row(i + 1, action));
    output::print_table(rows);

    match summary {
        Some(summary) => println!(
            "{} {} resized, {} created, {} minimized\n",
            "Applied:".green().bold(),
            summary.resized,
            summary.created,
            summary.minimized
        ),
        None => println!("{}\n", "Dry run: no window was changed.".dimmed()),
    }

    let rows = host.windows_now().into_iter().map(|w| WindowRow {
        id: w.id,
        state: match w.state {
            WindowState::Normal => "normal".to_string(),
            WindowState::Minimized => "minimized".dimmed().to_string(),
        },
        frame: w.bounds.to_string(),
    });
    output::print_table(rows);

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Opens a session over the snapshot and selects the target display.
async fn open_session(host: &SnapshotHost, display: Option<&str>) -> TilepadResult<Session> {
    let mut session = Session::open(host).await;
    session.preselect(host).await;

    if let Some(id) = display {
        session.select_display(id)?;
    }

    Ok(session)
}

/// Picks the template named on the command line, or the configured default.
fn lookup_template(
    catalog: &TemplateCatalog,
    name: Option<&str>,
    config: &TilepadConfig,
) -> TilepadResult<LayoutTemplate> {
    let name = name.or(config.default_template.as_deref()).ok_or_else(|| {
        TilepadError::InvalidArguments(
            "No template given and no defaultTemplate configured. \
            Run 'tilepad templates' to list the available templates."
                .to_string(),
        )
    })?;

    Ok(catalog.get(name)?.clone())
}

fn print_heading(template: &LayoutTemplate, display: &Display) {
    println!(
        "{} {} on {} ({})",
        "Template".bold(),
        template.name.cyan(),
        display.label().cyan(),
        display.work_area
    );
}

fn action_row(step: usize, action: &LayoutAction) -> ActionRow {
    let (name, window) = match action {
        LayoutAction::Resize { window_id, .. } => ("resize".green(), window_id.to_string()),
        LayoutAction::Create { .. } => ("create".cyan(), "new".to_string()),
        LayoutAction::Minimize { window_id } => ("minimize".yellow(), window_id.to_string()),
    };

    ActionRow {
        step,
        action: name.to_string(),
        window,
        frame: action.frame().map(|f| f.to_string()).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_template_by_name() {
        let template =
            lookup_template(&TemplateCatalog::builtin(), Some("thirds"), &TilepadConfig::default())
                .unwrap();
        assert_eq!(template.slot_count(), 3);
    }

    #[test]
    fn test_lookup_template_falls_back_to_default() {
        let config = TilepadConfig {
            default_template: Some("quarters".to_string()),
            ..TilepadConfig::default()
        };
        let template = lookup_template(&TemplateCatalog::builtin(), None, &config).unwrap();
        assert_eq!(template.name, "quarters");
    }

    #[test]
    fn test_lookup_template_without_name_or_default() {
        let err =
            lookup_template(&TemplateCatalog::builtin(), None, &TilepadConfig::default()).unwrap_err();
        assert!(matches!(err, TilepadError::InvalidArguments(_)));
    }

    #[test]
    fn test_lookup_template_unknown_name() {
        let err = lookup_template(&TemplateCatalog::builtin(), Some("spiral"), &TilepadConfig::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Layout error: Template 'spiral' not found");
    }

    #[test]
    fn test_action_row_labels() {
        colored::control::set_override(false);
        let frame = Rect::new(0, 0, 100, 100);

        let row = action_row(1, &LayoutAction::Create { frame });
        assert_eq!(row.action, "create");
        assert_eq!(row.window, "new");
        assert_eq!(row.frame, "100x100 at (0, 0)");

        let row = action_row(2, &LayoutAction::Minimize { window_id: 4 });
        assert_eq!(row.action, "minimize");
        assert_eq!(row.window, "4");
        assert!(row.frame.is_empty());
    }
}
