use crate::core::{
    ensure_root,
    error::{PacrepoError, Result},
    load_repositories, print_info, print_success, run_sync, save_repositories, Repository,
    Settings,
};

/// Enable the named repositories and save
pub fn execute_enable(settings: &Settings, names: Vec<String>, sync: bool) -> Result<()> {
    execute_set_enabled(settings, names, true, sync)
}

/// Disable the named repositories and save
pub fn execute_disable(settings: &Settings, names: Vec<String>, sync: bool) -> Result<()> {
    execute_set_enabled(settings, names, false, sync)
}

fn execute_set_enabled(
    settings: &Settings,
    names: Vec<String>,
    enable: bool,
    sync: bool,
) -> Result<()> {
    if names.is_empty() {
        return Err(PacrepoError::NoRepositoriesGiven);
    }
    ensure_root()?;
    set_enabled(settings, &names, enable, sync)
}

/// Rewrite the configuration for `names`, then optionally refresh.
///
/// The file is saved before the refresh runs, so a failed refresh leaves the
/// new states on disk and still returns the sync error.
fn set_enabled(settings: &Settings, names: &[String], enable: bool, sync: bool) -> Result<()> {
    let blacklist = settings.blacklist();
    let mut repositories = load_repositories(&settings.pacman_conf, &blacklist)?;
    let changed = select_repositories(&mut repositories, names, enable)?;

    if changed.is_empty() {
        print_info("Nothing to change.");
        return Ok(());
    }

    save_repositories(&settings.pacman_conf, &repositories, &blacklist)?;
    print_success(&format!(
        "{} {} in {}",
        if enable { "Enabled" } else { "Disabled" },
        changed.join(", "),
        settings.pacman_conf.display()
    ));

    if sync {
        let command = settings.sync_command();
        print_info(&format!("Running `{command}`..."));
        run_sync(&command)?;
        print_success("Synchronized package databases.");
    }

    Ok(())
}

/// Set `enable` on every named repository, returning the names that changed.
///
/// Every name must exist before anything is modified.
fn select_repositories(
    repositories: &mut [Repository],
    names: &[String],
    enable: bool,
) -> Result<Vec<String>> {
    if let Some(unknown) = names
        .iter()
        .find(|name| !repositories.iter().any(|repo| &repo.name == *name))
    {
        return Err(PacrepoError::unknown_repository(unknown.as_str()));
    }

    let mut changed = Vec::new();
    for repository in repositories.iter_mut() {
        if names.contains(&repository.name) && repository.enabled != enable {
            repository.enabled = enable;
            changed.push(repository.name.clone());
        }
    }
    log::debug!("{} repositories change state", changed.len());
    Ok(changed)
}
