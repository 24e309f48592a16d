// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fabrik CLI entrypoint.
//!
//! By default this opens the interactive TUI on a factory snapshot. `--summary`, `--svg-dir` and
//! `--export` run without a terminal UI and exit once their output is written.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fabrik::instructions::SequentialInstructions;
use fabrik::layout::LayoutConfig;
use fabrik::model::{fixtures, FactoryGraph};
use fabrik::render::render_step_svg;
use fabrik::store::{JsonSerializer, StoreError};
use fabrik::summary::render_summary_unicode;
use fabrik::view::FactoryView;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_ENV: &str = "FABRIK_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<factory.json>] [--config <layout.json>] [--max-links <n>]\n  {program} --demo [--config <layout.json>] [--max-links <n>]\n  {program} [<factory.json> | --demo] [--summary] [--svg-dir <dir>] [--export <dir>]\n\nWithout --summary/--svg-dir/--export the interactive TUI starts; downloads land in the current directory.\n--summary prints the equipment tables, --svg-dir writes one SVG per build step, --export writes factory.json.\n--demo uses a built-in factory and cannot be combined with <factory.json>.\n\nLogging goes to stderr; set {LOG_ENV} (e.g. {LOG_ENV}=debug) to change the level."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    factory: Option<String>,
    demo: bool,
    summary: bool,
    svg_dir: Option<String>,
    export_dir: Option<String>,
    config: Option<String>,
    max_links: Option<usize>,
}

impl CliOptions {
    fn is_batch(&self) -> bool {
        self.summary || self.svg_dir.is_some() || self.export_dir.is_some()
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--summary" => {
                if options.summary {
                    return Err(());
                }
                options.summary = true;
            }
            "--svg-dir" => {
                if options.svg_dir.is_some() {
                    return Err(());
                }
                options.svg_dir = Some(args.next().ok_or(())?);
            }
            "--export" => {
                if options.export_dir.is_some() {
                    return Err(());
                }
                options.export_dir = Some(args.next().ok_or(())?);
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--max-links" => {
                if options.max_links.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let max_links: usize = raw.parse().map_err(|_| ())?;
                if max_links == 0 {
                    return Err(());
                }
                options.max_links = Some(max_links);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.factory.is_some() {
                    return Err(());
                }
                options.factory = Some(arg);
            }
        }
    }

    if options.demo && options.factory.is_some() {
        return Err(());
    }

    Ok(options)
}

fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);
    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}

fn load_config(options: &CliOptions) -> Result<LayoutConfig, Box<dyn Error>> {
    let mut config = match options.config.as_deref() {
        Some(path) => LayoutConfig::load(Path::new(path))?,
        None => LayoutConfig::default(),
    };
    if let Some(max_links) = options.max_links {
        config.max_container_links = max_links;
    }
    config.validate()?;
    Ok(config)
}

fn load_graph(
    options: &CliOptions,
    config: &LayoutConfig,
) -> Result<Option<FactoryGraph>, Box<dyn Error>> {
    if options.demo {
        return Ok(Some(fixtures::ore_to_parts()?));
    }
    let Some(path) = options.factory.as_deref() else {
        return Ok(None);
    };
    let raw = fs::read_to_string(path)
        .map_err(|source| StoreError::Io { path: PathBuf::from(path), source })?;
    let graph = JsonSerializer::with_limits(config.graph_limits()).parse(&raw)?;
    tracing::info!(path, nodes = graph.node_count(), "loaded factory");
    Ok(Some(graph))
}

fn run_batch(
    options: &CliOptions,
    config: &LayoutConfig,
    view: &FactoryView,
) -> Result<(), Box<dyn Error>> {
    if options.summary {
        println!("{}", render_summary_unicode(view.summary())?);
    }

    if let Some(dir) = options.svg_dir.as_deref() {
        let dir = Path::new(dir);
        fs::create_dir_all(dir)
            .map_err(|source| StoreError::Io { path: dir.to_path_buf(), source })?;
        match view.pager() {
            Some(pager) => {
                for (idx, step) in pager.steps().iter().enumerate() {
                    let path = dir.join(format!("step-{:03}.svg", idx + 1));
                    fs::write(&path, render_step_svg(step.as_ref()))
                        .map_err(|source| StoreError::Io { path: path.clone(), source })?;
                }
                eprintln!("wrote {} step diagrams to {}", pager.len(), dir.display());
            }
            None => tracing::warn!("factory has no build steps; no diagrams written"),
        }
    }

    if let Some(dir) = options.export_dir.as_deref() {
        let serializer = JsonSerializer::with_limits(config.graph_limits());
        let path = view.download(&serializer)?.write_to(Path::new(dir))?;
        eprintln!("wrote {}", path.display());
    }

    Ok(())
}

fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}

fn main() {
    setup_logging();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "fabrik".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let config = load_config(&options)?;
        let graph = load_graph(&options, &config)?.map(Arc::new);
        let view = FactoryView::new(graph, Box::new(SequentialInstructions::new(config)))?;

        if options.is_batch() {
            return run_batch(&options, &config, &view);
        }
        fabrik::tui::run(view, PathBuf::from("."))
    })();

    if let Err(err) = result {
        eprintln!("fabrik: {}", error_chain(err.as_ref()));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{error_chain, load_config, parse_options, CliOptions};

    fn args(raw: &[&str]) -> impl Iterator<Item = String> {
        raw.iter().map(|arg| (*arg).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_empty_args() {
        let options = parse_options(std::iter::empty()).expect("parse options");
        assert_eq!(options, CliOptions::default());
        assert!(!options.is_batch());
    }

    #[test]
    fn parses_positional_factory() {
        let options = parse_options(args(&["plant.json"])).expect("parse options");
        assert_eq!(options.factory.as_deref(), Some("plant.json"));
        assert!(!options.demo);
    }

    #[test]
    fn parses_batch_flags_in_any_order() {
        let options = parse_options(args(&[
            "--export",
            "out",
            "plant.json",
            "--summary",
            "--svg-dir",
            "svgs",
        ]))
        .expect("parse options");
        assert!(options.summary);
        assert_eq!(options.svg_dir.as_deref(), Some("svgs"));
        assert_eq!(options.export_dir.as_deref(), Some("out"));
        assert_eq!(options.factory.as_deref(), Some("plant.json"));
        assert!(options.is_batch());
    }

    #[test]
    fn parses_config_and_max_links() {
        let options =
            parse_options(args(&["--demo", "--config", "layout.json", "--max-links", "4"]))
                .expect("parse options");
        assert!(options.demo);
        assert_eq!(options.config.as_deref(), Some("layout.json"));
        assert_eq!(options.max_links, Some(4));
    }

    #[test]
    fn rejects_bad_max_links() {
        parse_options(args(&["--max-links", "0"])).unwrap_err();
        parse_options(args(&["--max-links", "many"])).unwrap_err();
        parse_options(args(&["--max-links"])).unwrap_err();
    }

    #[test]
    fn rejects_demo_with_factory() {
        parse_options(args(&["--demo", "plant.json"])).unwrap_err();
        parse_options(args(&["plant.json", "--demo"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_duplicate_and_extra_args() {
        parse_options(args(&["--nope"])).unwrap_err();
        parse_options(args(&["--summary", "--summary"])).unwrap_err();
        parse_options(args(&["--export", "a", "--export", "b"])).unwrap_err();
        parse_options(args(&["one.json", "two.json"])).unwrap_err();
        parse_options(args(&["--svg-dir"])).unwrap_err();
    }

    #[test]
    fn max_links_overrides_default_config() {
        let options = parse_options(args(&["--max-links", "3"])).expect("parse options");
        let config = load_config(&options).expect("config");
        assert_eq!(config.max_container_links, 3);
        assert_eq!(config.node_size, 50.0);
    }

    #[test]
    fn error_chain_includes_sources() {
        let err = fabrik::layout::LayoutConfig::from_json_str("{").unwrap_err();
        let rendered = error_chain(&err);
        assert!(rendered.starts_with("invalid layout config: "));
    }
}
