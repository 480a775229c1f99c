use crate::config::{path_str, Config};
use crate::deps::DependencyList;
use crate::error::ProvisionError;
use crate::runner::CommandRunner;

/// Account files seeded from the host so uids inside the chroot line up.
const IDENTITY_FILES: [&str; 3] = ["etc/passwd", "etc/shadow", "etc/group"];

/// Provision the chroot end-to-end: load the dependency list, check the
/// target does not exist, create directories, seed account files, then run
/// debootstrap. Strictly sequential; the first failure aborts the rest.
pub fn provision(config: &Config, runner: &dyn CommandRunner) -> Result<(), ProvisionError> {
    let deps = DependencyList::load(&config.deps_dir)?;
    log::info!("Loaded {} build dependencies", deps.len());

    // Advisory only; the plain mkdir below fails too if the directory shows
    // up in between.
    if config.chroot_path.exists() {
        return Err(ProvisionError::ChrootExists {
            path: config.chroot_path.clone(),
        });
    }

    let chroot = path_str(&config.chroot_path);
    let home = path_str(&config.home_in_chroot());

    runner.run("mkdir", &[chroot.clone()])?;
    runner.run("mkdir", &["-p".to_owned(), home.clone()])?;
    runner.run("chown", &["-R".to_owned(), config.owner_spec(), home])?;

    for file in &IDENTITY_FILES {
        runner.run(
            "cp",
            &[
                "-a".to_owned(),
                format!("/{}", file),
                path_str(&config.chroot_path.join(file)),
            ],
        )?;
    }

    runner.run(
        "debootstrap",
        &[
            format!("--include={}", deps.include_arg()),
            format!("--arch={}", config.arch),
            config.suite.clone(),
            chroot,
            config.mirror.clone(),
        ],
    )?;
    log::info!("Chroot ready at {:?}", config.chroot_path);
    Ok(())
}
