use is_terminal::IsTerminal;

use crate::{
    consts::MISSING_PROJECT,
    controllers::{cache::CacheStore, catalog, launcher, refresh, url::UrlResolver},
    util::prompt::prompt_dashboard,
};

use super::*;

/// Fuzzy-find a Cloud Monitoring dashboard and open it in the browser
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Google Cloud project id
    #[clap(short = 'p', long = "project")]
    project: Option<String>,

    /// Update the dashboards list from gcloud
    #[clap(short = 'u', long = "update")]
    update: bool,

    /// Print the URL instead of opening it
    #[clap(long)]
    print: bool,
}

/// Runs one selection and returns the process exit code.
pub fn command(args: Args) -> Result<i32> {
    let Some(project_id) = args.project.filter(|p| !p.is_empty()) else {
        eprintln!("{}", MISSING_PROJECT.yellow());
        return Ok(0);
    };
    let configs = Configs::new(project_id, args.update, args.print)?;
    let store = CacheStore::from_configs(&configs);

    ensure_cache(&configs, &store)?;

    let dashboards = catalog::load(&store, &configs.project_id)?;
    let Some(selected) = prompt_dashboard(&dashboards)? else {
        return Ok(0);
    };

    let url = UrlResolver::new(configs.console_base.as_str())
        .context("Failed to build dashboard URL matcher")?
        .resolve(selected, &configs.project_id);

    if configs.print_only || !std::io::stdout().is_terminal() {
        println!("{url}");
        return Ok(0);
    }

    eprintln!("{} {}", "Opening".dimmed(), url.cyan());
    let status = launcher::open(&url);
    if !status.success() {
        eprintln!(
            "{}",
            format!("Failed to open the browser ({status:?}). Visit {url}").yellow()
        );
    }
    Ok(status.code())
}

fn ensure_cache(configs: &Configs, store: &CacheStore) -> Result<()> {
    let cache_path = store.cache_path(&configs.project_id);
    if !refresh::should_refresh(configs.force_refresh, &cache_path) {
        return Ok(());
    }

    let reason = if CacheStore::exists(&cache_path) {
        "Updating"
    } else {
        "No cache found, fetching"
    };
    eprintln!(
        "{}",
        format!(
            "{reason} dashboards for {} from {}",
            configs.project_id, configs.gcloud_bin
        )
        .dimmed()
    );
    refresh::refresh(store, &configs.gcloud_bin, &configs.project_id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_project_exits_cleanly() {
        let args = Args::parse_from(["cmdig"]);
        assert_eq!(command(args).unwrap(), 0);
    }

    #[test]
    fn test_empty_project_exits_cleanly() {
        let args = Args::parse_from(["cmdig", "-p", ""]);
        assert_eq!(command(args).unwrap(), 0);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from(["cmdig", "-p", "demo", "-u", "--print"]);
        assert_eq!(args.project.as_deref(), Some("demo"));
        assert!(args.update);
        assert!(args.print);

        let args = Args::parse_from(["cmdig", "--project", "demo"]);
        assert!(!args.update);
        assert!(!args.print);
    }
}
