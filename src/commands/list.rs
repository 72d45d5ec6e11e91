use crate::core::{
    error::Result, format_repository_line, load_repositories, print_info, print_section_header,
    Settings,
};

pub fn execute_list(settings: &Settings, json: bool) -> Result<()> {
    let repositories = load_repositories(&settings.pacman_conf, &settings.blacklist())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&repositories)?);
        return Ok(());
    }

    if repositories.is_empty() {
        print_info(&format!(
            "No repositories found in {}.",
            settings.pacman_conf.display()
        ));
        return Ok(());
    }

    print_section_header(&format!("Repositories in {}", settings.pacman_conf.display()));
    for repository in &repositories {
        println!("{}", format_repository_line(repository));
    }
    println!();

    Ok(())
}
