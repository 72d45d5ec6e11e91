//! Canned pacman.conf contents
//!
//! Modeled on the stock Arch Linux configuration: an `[options]` block,
//! enabled and disabled repositories and the commented `[custom]` example.

#![allow(dead_code)]

/// Stock-style configuration with testing repositories and multilib disabled
pub const STOCK_PACMAN_CONF: &str = r#"#
# /etc/pacman.conf
#
# See the pacman.conf(5) manpage for option and repository directives

[options]
HoldPkg     = pacman glibc
Architecture = auto
CheckSpace
SigLevel    = Required DatabaseOptional
LocalFileSigLevel = Optional

#
# REPOSITORIES
#

#[core-testing]
#Include = /etc/pacman.d/mirrorlist

[core]
Include = /etc/pacman.d/mirrorlist

#[extra-testing]
#Include = /etc/pacman.d/mirrorlist

[extra]
Include = /etc/pacman.d/mirrorlist

#[multilib]
#Include = /etc/pacman.d/mirrorlist

# An example of a custom package repository.  See the pacman manpage for
# tips on creating your own repositories.
#[custom]
#SigLevel = Optional TrustAll
#Server = file:///home/custompkgs
"#;

/// Minimal configuration from the toggle scenarios
pub const SCENARIO_PACMAN_CONF: &str =
    "[core]\n#Include = /etc/pacman.d/mirrorlist\n\n[extra]\nInclude = /etc/pacman.d/mirrorlist";
