//! Migration script generation
//!
//! Pure function over the misplaced-file list: for each finding, create
//! the suggested directory and move the file into it, emitted for bash and
//! PowerShell. `git mv` is used in both dialects when configured, keeping
//! history intact; plain `mv`/`Move-Item` otherwise. Rollback scripts are
//! the exact inverse moves and are generated only when enabled. Nothing
//! here executes anything.

use crate::config::GitConfig;
use crate::models::{MigrationScripts, MisplacedFile};
use crate::paths;

/// Single-quote a path for POSIX shells.
fn sh_quote(path: &str) -> String {
    format!("'{}'", path.replace('\'', r"'\''"))
}

/// Single-quote a path for PowerShell (embedded quotes double up).
fn ps_quote(path: &str) -> String {
    format!("'{}'", path.replace('\'', "''"))
}

fn destination(m: &MisplacedFile) -> String {
    format!("{}/{}", m.suggested_location, paths::file_name(&m.file))
}

pub fn generate_scripts(misplaced: &[MisplacedFile], git: &GitConfig) -> MigrationScripts {
    let mv_bash = if git.use_git_mv { "git mv" } else { "mv" };
    let mv_ps = if git.use_git_mv { "git mv" } else { "Move-Item" };

    let mut bash = Vec::new();
    let mut powershell = Vec::new();
    let mut rollback_bash = Vec::new();
    let mut rollback_powershell = Vec::new();

    for m in misplaced {
        let dest = destination(m);
        bash.push(format!("mkdir -p {}", sh_quote(&m.suggested_location)));
        bash.push(format!("{mv_bash} {} {}", sh_quote(&m.file), sh_quote(&dest)));
        powershell.push(format!(
            "New-Item -ItemType Directory -Force -Path {} | Out-Null",
            ps_quote(&m.suggested_location)
        ));
        powershell.push(format!("{mv_ps} {} {}", ps_quote(&m.file), ps_quote(&dest)));

        if git.generate_rollback {
            rollback_bash.push(format!("{mv_bash} {} {}", sh_quote(&dest), sh_quote(&m.file)));
            rollback_powershell.push(format!(
                "{mv_ps} {} {}",
                ps_quote(&dest),
                ps_quote(&m.file)
            ));
        }
    }

    MigrationScripts {
        bash: bash.join("\n"),
        powershell: powershell.join("\n"),
        rollback_bash: git.generate_rollback.then(|| rollback_bash.join("\n")),
        rollback_powershell: git.generate_rollback.then(|| rollback_powershell.join("\n")),
    }
}
