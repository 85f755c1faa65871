//! `inject` and `extract` command drivers.

use anyhow::Result;

use crate::config::ManualConfig;
use crate::{debug, log};
use crate::pipeline::{PageExtractor, PageTransform, StylesheetInjector, WalkSummary, walk_pages};
use crate::utils::plural::plural_count;

use super::Commands;

/// Run the pipeline selected by `command` over the configured directory.
pub fn run(command: &Commands, config: &ManualConfig) -> Result<WalkSummary> {
    match command {
        Commands::Inject { .. } => run_transform(&StylesheetInjector::new(&config.inject), config),
        Commands::Extract { .. } => run_transform(&PageExtractor::new(&config.extract), config),
    }
}

fn run_transform<T: PageTransform>(transform: &T, config: &ManualConfig) -> Result<WalkSummary> {
    let name = transform.name();
    let dry = config.walk.dry;

    let summary = walk_pages(config.dir(), name, config.walk.parallel, |path| {
        transform.apply(path, dry)
    })?;
    debug!(name; "left {} other entries alone", summary.skipped);

    if summary.pages == 0 {
        log!(name; "no .html pages in {}", config.dir().display());
    } else {
        log!(
            name;
            "{} {} in {}",
            if dry { "checked" } else { "processed" },
            plural_count(summary.pages, "page"),
            config.dir().display()
        );
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const PAGE: &str = "<html>\n<head>\n<link href=\"gen.css\">\n</head>\n<body>\n<a href=\"b.html\">b</a>\n</body>\n</html>\n";

    fn config_for(dir: &TempDir, dry: bool) -> ManualConfig {
        let mut config = ManualConfig::default();
        config.walk.dir = dir.path().to_path_buf();
        config.walk.dry = dry;
        config
    }

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.html"), PAGE).unwrap();
        fs::write(dir.path().join("b.html"), PAGE).unwrap();
        fs::write(dir.path().join("manual.css"), "body {}").unwrap();
        dir
    }

    #[test]
    fn test_run_inject() {
        let dir = setup();
        let cli = Cli::parse_from(["manpost", "inject"]);

        let summary = run(&cli.command, &config_for(&dir, false)).unwrap();

        assert_eq!(summary.pages, 2);
        assert_eq!(summary.skipped, 1);
        for name in ["a.html", "b.html"] {
            let html = fs::read_to_string(dir.path().join(name)).unwrap();
            assert!(html.contains("<link href=\"manual.css\" rel=\"stylesheet\" type=\"text/css\">"));
        }
        assert_eq!(fs::read_to_string(dir.path().join("manual.css")).unwrap(), "body {}");
    }

    #[test]
    fn test_run_extract() {
        let dir = setup();
        let cli = Cli::parse_from(["manpost", "extract"]);

        run(&cli.command, &config_for(&dir, false)).unwrap();

        let mut names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.php", "b.php", "manual.css"]);

        let php = fs::read_to_string(dir.path().join("a.php")).unwrap();
        assert!(php.contains("<a href=\"b.php\">b</a>"));
    }

    #[test]
    fn test_run_extract_stops_at_malformed_page() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.html"), "<html>\n</html>\n").unwrap();

        let cli = Cli::parse_from(["manpost", "extract"]);
        let err = run(&cli.command, &config_for(&dir, false)).unwrap_err();

        assert!(format!("{err:#}").contains("broken.html"));
        assert!(dir.path().join("broken.html").exists());
    }

    #[test]
    fn test_run_dry_changes_nothing() {
        let dir = setup();
        let cli = Cli::parse_from(["manpost", "extract", "--dry"]);

        let summary = run(&cli.command, &config_for(&dir, true)).unwrap();

        assert_eq!(summary.pages, 2);
        assert_eq!(fs::read_to_string(dir.path().join("a.html")).unwrap(), PAGE);
        assert!(!dir.path().join("a.php").exists());
    }
}
