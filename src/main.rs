mod config;
mod deps;
mod error;
mod provision;
mod runner;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use structopt::StructOpt;

use crate::config::{program_dir, Config};
use crate::provision::provision;
use crate::runner::SystemRunner;

/// Provision a Debian chroot for cross-architecture package builds
#[derive(StructOpt, Debug)]
#[structopt(name = "mkchroot")]
pub struct Opt {
    /// Target chroot directory (must not exist yet)
    #[structopt(long, parse(from_os_str), default_value = "/var/chroot/squeeze-i386")]
    chroot: PathBuf,
    /// Build user owning the home directory inside the chroot
    #[structopt(long, default_value = "mark")]
    user: String,
    /// Group for the home directory (defaults to the user name)
    #[structopt(long)]
    group: Option<String>,
    /// Target architecture passed to debootstrap
    #[structopt(long, default_value = "i386")]
    arch: String,
    /// Distribution codename
    #[structopt(long, default_value = "squeeze")]
    suite: String,
    /// Debian mirror URL
    #[structopt(long, default_value = "http://ftp.de.debian.org/debian")]
    mirror: String,
    /// Directory containing the build-dependencies file (defaults to the
    /// directory the program is installed in)
    #[structopt(long, parse(from_os_str))]
    deps_dir: Option<PathBuf>,
}

fn build_config(opt: Opt) -> Result<Config> {
    let deps_dir = match opt.deps_dir {
        Some(dir) => dir,
        None => program_dir()?,
    };
    let group = match opt.group {
        Some(group) => group,
        None => opt.user.clone(),
    };
    Ok(Config {
        chroot_path: opt.chroot,
        user: opt.user,
        group,
        arch: opt.arch,
        suite: opt.suite,
        mirror: opt.mirror,
        deps_dir,
    })
}

fn main() {
    simple_logger::SimpleLogger::default()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();
    let opt = Opt::from_args();
    let config = build_config(opt).expect("Failed to resolve configuration");

    if let Err(err) = provision(&config, &SystemRunner) {
        log::error!("{}", err);
        process::exit(err.exit_code());
    }
}
