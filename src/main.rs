use anyhow::{bail, Context, Result};
use serde::Serialize;
use skyriver::{
    build_galaxy,
    card::{route_card, system_card},
    cli::{Cli, Commands},
    filter::resolve_sources,
    schema::ALL_SOURCES,
    source::{ensure_fetched, CacheManager},
    Galaxy, GalaxySummary, LoadReport, SilentUi, Sources, UiApp,
};
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct LoadOutput<'a> {
    summary: GalaxySummary,
    report: &'a LoadReport,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_quietly(input: &Path) -> Result<Galaxy> {
    let mut ui = SilentUi::new();
    let sources = Sources::open(input, &mut ui)?;
    Ok(Galaxy::from_sources(&sources))
}

fn summary_lines(summary: &GalaxySummary, report: &LoadReport) -> Vec<String> {
    vec![
        format!(
            "{} regions, {} sectors, {} systems ({} plottable)",
            summary.regions, summary.sectors, summary.systems, summary.plottable_systems
        ),
        format!(
            "{} stars, {} planets, {} moons, {} asteroids, {} space stations",
            summary.stars, summary.planets, summary.moons, summary.asteroids, summary.space_stations
        ),
        format!(
            "{} hyperlanes ({} loops)",
            summary.hyperlanes, summary.looped_hyperlanes
        ),
        if report.is_clean() {
            "All references resolved".to_string()
        } else {
            format!(
                "{} unresolved references, {} duplicate identifiers",
                report.total_unresolved(),
                report.total_duplicates()
            )
        },
    ]
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // The terminal view owns the screen; logs would tear it
    let tui = matches!(cli.command, Commands::Load { tui: true, .. });
    if !tui {
        init_logging(cli.verbose);
    }

    match cli.command {
        Commands::Load {
            input,
            include,
            exclude,
            json,
            tui,
        } => {
            let start = Instant::now();
            let plan = resolve_sources(include, exclude)?;

            let (galaxy, report) = if tui {
                let mut ui = UiApp::new()?;
                let sources = Sources::open(&input, &mut ui)?;
                let (galaxy, report) = build_galaxy(&sources, &plan, &mut ui);
                ui.finish(galaxy.summary())?;
                (galaxy, report)
            } else {
                let mut ui = SilentUi::new();
                let sources = Sources::open(&input, &mut ui)?;
                build_galaxy(&sources, &plan, &mut ui)
            };

            let summary = galaxy.summary();
            if json {
                let output = LoadOutput {
                    summary,
                    report: &report,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if !tui {
                for line in summary_lines(&summary, &report) {
                    println!("{}", line);
                }
                println!(
                    "\nLoaded {:?} in {:.1}s",
                    input,
                    start.elapsed().as_secs_f64()
                );
            }
        }

        Commands::Fetch {
            base_url,
            force,
            cache_dir,
            timeout,
            prune,
        } => {
            let mut ui = SilentUi::new();
            let dir = ensure_fetched(&base_url, cache_dir.clone(), force, timeout, &mut ui)?;
            if prune {
                CacheManager::new(cache_dir)?.cleanup_other_datasets(&base_url)?;
            }
            println!("Sources from {} stored in {:?}", base_url, dir);
        }

        Commands::Show {
            input,
            system,
            wiki_url,
            json,
        } => {
            let galaxy = load_quietly(&input)?;
            let Some(found) = galaxy.system(&system) else {
                bail!("No system with wiki link {:?}", system);
            };

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(found).context("Failed to encode system")?
                );
            } else {
                for line in system_card(&galaxy, found, wiki_url.as_deref()) {
                    println!("{}", line);
                }
            }
        }

        Commands::Route { input, hyperlane } => {
            let galaxy = load_quietly(&input)?;
            let Some(found) = galaxy.hyperlane(&hyperlane) else {
                bail!("No hyperlane with wiki link {:?}", hyperlane);
            };

            for line in route_card(&galaxy, found) {
                println!("{}", line);
            }
        }

        Commands::ListSources => {
            println!("Sources in load order:\n");
            for source in ALL_SOURCES {
                let columns: Vec<String> = source
                    .columns
                    .iter()
                    .map(|c| format!("{}:{}", c.name, c.col_type))
                    .collect();
                let trailing = source
                    .trailing_links
                    .map(|target| format!(" [{}...]", target))
                    .unwrap_or_default();
                println!(
                    "  {:<15} {:<18} '{}'  {}{}",
                    source.name,
                    source.source_file,
                    source.delimiter,
                    columns.join(" "),
                    trailing
                );
            }
        }
    }

    Ok(())
}
