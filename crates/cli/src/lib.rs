//! # Pagecraft CLI
//!
//! Command-line interface for Pagecraft.
//!
//! This crate provides CLI tools for working with saved builder
//! projects without the GUI.
//!
//! ## Commands
//!
//! - `new` - Create and save a fresh project
//! - `list` - List saved projects
//! - `info` - Display a project's pages and components
//! - `components` - Browse the built-in component catalog
//! - `show` - Print a catalog component's source code
//! - `add` - Place a component onto a page of a saved project
//! - `remove` - Remove a placed component from a page
//! - `validate` - Validate a project against the catalog
//! - `export` - Generate JSX for a project
//! - `delete` - Remove a saved project
//!

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pagecraft_builder::BuilderState;
use pagecraft_codegen::{GenerationContext, Generator, GeneratorConfig, generate_page};
use pagecraft_model::{FileStore, Project, ProjectStore, validate_project};
use pagecraft_registry::{Category, FsSourceLoader, Registry, builtin};
use std::path::PathBuf;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Argument Types
// ============================================================================

/// Page builder engine for animated UI component catalogs
#[derive(Debug, Parser)]
#[command(name = "pagecraft", version, about)]
pub struct Cli {
    /// Directory holding saved projects
    #[arg(long, global = true, default_value = "./projects", env = "PAGECRAFT_DIR")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create and save a fresh single-page project
    New {
        /// Project name (also the storage key)
        name: String,
    },

    /// List saved projects
    List,

    /// Display a project's pages and placed components
    Info {
        /// Project name
        name: String,
    },

    /// Browse the built-in component catalog
    Components {
        /// Only show one category (e.g. "buttons")
        #[arg(long)]
        category: Option<String>,

        /// Filter by name, description, or tag
        #[arg(long)]
        search: Option<String>,

        /// Print descriptors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a catalog component's source code
    Show {
        /// Component id from the catalog (e.g. "shimmer-button")
        component: String,

        /// Directory a local component checkout lives in, for
        /// components whose source is not bundled
        #[arg(long, default_value = ".")]
        source_root: PathBuf,
    },

    /// Place a component onto a page of a saved project
    Add {
        /// Project name
        name: String,

        /// Component id from the catalog (e.g. "shimmer-button")
        component: String,

        /// Position on the page (default: 0, the top)
        #[arg(long, default_value_t = 0)]
        index: usize,

        /// Target page name (default: the home page)
        #[arg(long)]
        page: Option<String>,
    },

    /// Remove the placed component at an index from a page
    Remove {
        /// Project name
        name: String,

        /// Index of the component on the page
        index: usize,

        /// Target page name (default: the home page)
        #[arg(long)]
        page: Option<String>,
    },

    /// Validate a saved project against the catalog
    Validate {
        /// Project name
        name: String,
    },

    /// Generate JSX for a saved project
    Export {
        /// Project name
        name: String,

        /// Write files under this directory instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Only export the page with this name
        #[arg(long)]
        page: Option<String>,
    },

    /// Remove a saved project
    Delete {
        /// Project name
        name: String,
    },
}

// ============================================================================
// Entry Point
// ============================================================================

/// Parse arguments and run the requested command
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(cli)
}

/// Run an already parsed command
pub fn execute(cli: Cli) -> Result<()> {
    let registry = builtin();
    let mut store = FileStore::new(&cli.dir);
    tracing::debug!(dir = %cli.dir.display(), "using project store");

    match cli.command {
        Command::New { name } => cmd_new(&mut store, &name),
        Command::List => cmd_list(&store),
        Command::Info { name } => cmd_info(&store, &name),
        Command::Components {
            category,
            search,
            json,
        } => cmd_components(&registry, category.as_deref(), search.as_deref(), json),
        Command::Show {
            component,
            source_root,
        } => cmd_show(&registry, &component, &source_root),
        Command::Add {
            name,
            component,
            index,
            page,
        } => cmd_add(&mut store, &registry, &name, &component, index, page.as_deref()),
        Command::Remove { name, index, page } => {
            cmd_remove(&mut store, &name, index, page.as_deref())
        }
        Command::Validate { name } => cmd_validate(&store, &registry, &name),
        Command::Export { name, out, page } => {
            cmd_export(&store, &registry, &name, out.as_deref(), page.as_deref())
        }
        Command::Delete { name } => cmd_delete(&mut store, &name),
    }
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_new(store: &mut dyn ProjectStore, name: &str) -> Result<()> {
    if store.load(name).is_some() {
        bail!("project '{}' already exists", name);
    }

    let project = Project::new(name);
    let saved = store.save(name, &project)?;
    println!(
        "{} project '{}' with {} page",
        "Created".green().bold(),
        saved.name,
        saved.pages.len(),
    );
    Ok(())
}

fn cmd_list(store: &dyn ProjectStore) -> Result<()> {
    let projects = store.list();
    if projects.is_empty() {
        println!("No saved projects.");
        return Ok(());
    }

    println!(
        "{:<24} {:>6} {:>11}  {}",
        "NAME".bold(),
        "PAGES".bold(),
        "COMPONENTS".bold(),
        "SAVED".bold(),
    );
    for saved in projects {
        println!(
            "{:<24} {:>6} {:>11}  {}",
            saved.name,
            saved.pages.len(),
            saved.component_count(),
            saved.saved_at.format("%Y-%m-%d %H:%M"),
        );
    }
    Ok(())
}

fn cmd_info(store: &dyn ProjectStore, name: &str) -> Result<()> {
    let Some(saved) = store.load(name) else {
        bail!("project '{}' not found", name);
    };

    println!(
        "{} (saved {})",
        saved.name.bold(),
        saved.saved_at.format("%Y-%m-%d %H:%M"),
    );
    for (index, page) in saved.pages.iter().enumerate() {
        let route = if index == 0 { " (home)" } else { "" };
        println!("  {}{}", page.name.cyan(), route);
        for placed in &page.components {
            let overrides = if placed.has_overrides() {
                format!(" ({} overrides)", placed.props.len())
            } else {
                String::new()
            };
            println!("    - {}{}", placed.component_id, overrides.dimmed());
        }
        if page.is_empty() {
            println!("    {}", "(empty)".dimmed());
        }
    }
    Ok(())
}

fn cmd_components(
    registry: &Registry,
    category: Option<&str>,
    search: Option<&str>,
    json: bool,
) -> Result<()> {
    let category = match category {
        Some(slug) => match Category::from_slug(slug) {
            Some(category) => Some(category),
            None => {
                let valid: Vec<&str> = Category::all().iter().map(|c| c.slug()).collect();
                bail!("unknown category '{}' (expected one of: {})", slug, valid.join(", "));
            }
        },
        None => None,
    };

    let descriptors: Vec<_> = match search {
        Some(query) => registry.search(query),
        None => registry.components().collect(),
    };
    let descriptors: Vec<_> = descriptors
        .into_iter()
        .filter(|d| category.is_none_or(|c| d.category == c))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
        return Ok(());
    }

    if descriptors.is_empty() {
        println!("No matching components.");
        return Ok(());
    }

    for descriptor in descriptors {
        let badge = if descriptor.pro {
            " [pro]".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{:<24} {:<12} {}{}",
            descriptor.id.bold(),
            descriptor.category.slug(),
            descriptor.description,
            badge,
        );
    }
    Ok(())
}

fn cmd_show(registry: &Registry, component: &str, source_root: &std::path::Path) -> Result<()> {
    if registry.component_by_id(component).is_none() {
        bail!("component '{}' not found (try `pagecraft components`)", component);
    }

    let loader = FsSourceLoader::new(source_root);
    let source = registry.component_source(component, &loader)?;
    print!("{}", source);
    Ok(())
}

/// Load a saved project into a builder, optionally switching the active
/// page by name
fn open_builder(
    store: &dyn ProjectStore,
    name: &str,
    page_name: Option<&str>,
) -> Result<BuilderState> {
    let Some(saved) = store.load(name) else {
        bail!("project '{}' not found", name);
    };

    let mut state = BuilderState::new();
    state.load_project(saved);

    if let Some(page_name) = page_name {
        let Some(page_id) = state
            .project()
            .pages
            .iter()
            .find(|p| p.name == page_name)
            .map(|p| p.id)
        else {
            bail!("page '{}' not found in project '{}'", page_name, name);
        };
        state.select_page(page_id);
    }

    Ok(state)
}

/// Persist a builder's working project, surfacing its status on failure
fn save_builder(state: &mut BuilderState, store: &mut dyn ProjectStore, name: &str) -> Result<()> {
    if state.save(name, store).is_none() {
        let reason = state
            .status()
            .map(|s| s.text.clone())
            .unwrap_or_else(|| "unknown error".to_string());
        bail!("{}", reason);
    }
    Ok(())
}

fn cmd_add(
    store: &mut dyn ProjectStore,
    registry: &Registry,
    name: &str,
    component: &str,
    index: usize,
    page_name: Option<&str>,
) -> Result<()> {
    let mut state = open_builder(store, name, page_name)?;

    if state.add_component(registry, component, index).is_none() {
        bail!("unknown component '{}' (try `pagecraft components`)", component);
    }
    save_builder(&mut state, store, name)?;

    println!(
        "{} {} to '{}' at position {}",
        "Added".green().bold(),
        component,
        state.active_page().name,
        index.min(state.active_page().len().saturating_sub(1)),
    );
    Ok(())
}

fn cmd_remove(
    store: &mut dyn ProjectStore,
    name: &str,
    index: usize,
    page_name: Option<&str>,
) -> Result<()> {
    let mut state = open_builder(store, name, page_name)?;

    let Some(placed) = state.active_page().components.get(index) else {
        bail!(
            "no component at index {} on page '{}' ({} placed)",
            index,
            state.active_page().name,
            state.active_page().len(),
        );
    };
    let instance_id = placed.instance_id;
    let component_id = placed.component_id.clone();

    state.remove_component(instance_id);
    save_builder(&mut state, store, name)?;

    println!(
        "{} {} from '{}'",
        "Removed".green().bold(),
        component_id,
        state.active_page().name,
    );
    Ok(())
}

fn cmd_validate(store: &dyn ProjectStore, registry: &Registry, name: &str) -> Result<()> {
    let Some(saved) = store.load(name) else {
        bail!("project '{}' not found", name);
    };

    let project = saved.into_project();
    let report = validate_project(&project, Some(registry));

    if report.is_clean() {
        println!("{} no issues found", "OK".green().bold());
        return Ok(());
    }

    for issue in &report.issues {
        println!("{}", issue);
    }

    let error_count = report.errors().count();
    if error_count > 0 {
        bail!("validation failed with {} error(s)", error_count);
    }
    println!(
        "{} {} warning(s)",
        "OK".green().bold(),
        report.warnings().count(),
    );
    Ok(())
}

fn cmd_export(
    store: &dyn ProjectStore,
    registry: &Registry,
    name: &str,
    out: Option<&std::path::Path>,
    page_name: Option<&str>,
) -> Result<()> {
    let Some(saved) = store.load(name) else {
        bail!("project '{}' not found", name);
    };
    let project = saved.into_project();

    // Single-page export goes straight to stdout
    if let Some(page_name) = page_name {
        let Some(page) = project.pages.iter().find(|p| p.name == page_name) else {
            bail!("page '{}' not found in project '{}'", page_name, name);
        };
        let ctx = GenerationContext::with_defaults(registry);
        print!("{}", generate_page(&ctx, page));
        return Ok(());
    }

    let output = match out {
        Some(dir) => {
            let generator =
                Generator::new(GeneratorConfig::new().with_output_dir(dir));
            let output = generator.generate_and_write(registry, &project)?;
            println!(
                "{} {} file(s) to {}",
                "Exported".green().bold(),
                output.file_count(),
                dir.display(),
            );
            output
        }
        None => {
            let output = Generator::with_defaults().generate(registry, &project);
            for file in &output.files {
                println!("{}", format!("// {}", file.path.display()).dimmed());
                print!("{}", file.content);
                println!();
            }
            output
        }
    };

    for warning in &output.warnings {
        eprintln!("{} {}", "warning:".yellow().bold(), warning);
    }
    Ok(())
}

fn cmd_delete(store: &mut dyn ProjectStore, name: &str) -> Result<()> {
    if !store.delete(name) {
        bail!("project '{}' not found", name);
    }
    println!("{} project '{}'", "Deleted".green().bold(), name);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
