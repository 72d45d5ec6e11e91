use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, config_file::*, fixtures::*};

#[cfg(test)]
mod list_command_tests {
    use super::*;

    #[test]
    fn test_list_shows_repository_states() -> anyhow::Result<()> {
        let config = setup_config(STOCK_PACMAN_CONF)?;

        config
            .command()?
            .arg("list")
            .assert()
            .success()
            .stdout(assertions::has_disabled("core-testing"))
            .stdout(assertions::has_enabled("core"))
            .stdout(assertions::has_disabled("extra-testing"))
            .stdout(assertions::has_enabled("extra"))
            .stdout(assertions::has_disabled("multilib"));

        Ok(())
    }

    #[test]
    fn test_list_hides_options_and_placeholders() -> anyhow::Result<()> {
        let config = setup_config(STOCK_PACMAN_CONF)?;

        config
            .command()?
            .arg("list")
            .assert()
            .success()
            .stdout(assertions::lacks_repository("options"))
            .stdout(assertions::lacks_repository("custom"));

        Ok(())
    }

    #[test]
    fn test_list_json_output() -> anyhow::Result<()> {
        let config = setup_config(STOCK_PACMAN_CONF)?;

        let output = config.command()?.args(["list", "--json"]).output()?;
        assert!(output.status.success());

        let repos: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(
            repos,
            serde_json::json!([
                { "name": "core-testing", "enabled": false },
                { "name": "core", "enabled": true },
                { "name": "extra-testing", "enabled": false },
                { "name": "extra", "enabled": true },
                { "name": "multilib", "enabled": false }
            ])
        );

        Ok(())
    }

    #[test]
    fn test_list_does_not_modify_file() -> anyhow::Result<()> {
        let config = setup_config(STOCK_PACMAN_CONF)?;

        config.command()?.arg("list").assert().success();
        assert_eq!(config.read(), STOCK_PACMAN_CONF);

        Ok(())
    }

    #[test]
    fn test_list_empty_config() -> anyhow::Result<()> {
        let config = setup_config("[options]\nArchitecture = auto\n")?;

        config
            .command()?
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("No repositories found"));

        Ok(())
    }

    #[test]
    fn test_list_accepts_latin1_comments() -> anyhow::Result<()> {
        let config = setup_config(b"# Maintainer: Jos\xe9\n\n[core]\nInclude = /etc/pacman.d/mirrorlist\n")?;

        config
            .command()?
            .arg("list")
            .assert()
            .success()
            .stdout(assertions::has_enabled("core"));

        Ok(())
    }

    #[test]
    fn test_list_missing_config() -> anyhow::Result<()> {
        let config = setup_missing_config()?;

        config
            .command()?
            .arg("list")
            .assert()
            .failure()
            .stderr(assertions::config_not_found());

        Ok(())
    }

    #[test]
    fn test_list_rejects_invalid_settings() -> anyhow::Result<()> {
        let config = setup_config(STOCK_PACMAN_CONF)?;
        let settings_dir = config.temp_dir.path().join("config").join("pacrepo");
        std::fs::create_dir_all(&settings_dir)?;
        std::fs::write(settings_dir.join("config.json"), "{ not json")?;

        config
            .command()?
            .arg("list")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to parse settings file"));

        Ok(())
    }

    #[test]
    fn test_list_uses_extra_blacklist_from_settings() -> anyhow::Result<()> {
        let config = setup_config(STOCK_PACMAN_CONF)?;
        let settings_dir = config.temp_dir.path().join("config").join("pacrepo");
        std::fs::create_dir_all(&settings_dir)?;
        std::fs::write(
            settings_dir.join("config.json"),
            r#"{ "extra_blacklist": ["multilib"] }"#,
        )?;

        config
            .command()?
            .arg("list")
            .assert()
            .success()
            .stdout(assertions::has_enabled("core"))
            .stdout(assertions::lacks_repository("multilib"));

        Ok(())
    }
}
