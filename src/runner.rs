use std::process::Command;

use crate::error::ProvisionError;

/// Seam over external command execution so the provisioning sequence can be
/// driven by a fake in tests.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<(), ProvisionError>;
}

/// Runs commands for real, inheriting stdio so the tools' own output and
/// diagnostics reach the user directly.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<(), ProvisionError> {
        log::info!(">{} {}", program, args.join(" "));
        let status = Command::new(program).args(args).status().map_err(|err| {
            log::error!("Failed to start {}: {}", program, err);
            ProvisionError::Subprocess {
                command: render(program, args),
                code: None,
            }
        })?;
        if !status.success() {
            return Err(ProvisionError::Subprocess {
                command: render(program, args),
                code: status.code(),
            });
        }
        Ok(())
    }
}

fn render(program: &str, args: &[String]) -> String {
    let mut line = program.to_owned();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
