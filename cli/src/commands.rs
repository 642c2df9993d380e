use anyhow::Result;
use console::style;
use skilldock_core::skills::{self, InstallOutcome, SkillStore, SystemGit};
use std::path::Path;

pub fn list(store: &SkillStore, local_root: &Path) -> Result<()> {
    let local = skills::scan(local_root);
    println!(
        "{} Local skills ({})",
        style("→").cyan(),
        style(local.len()).bold()
    );
    if local.is_empty() {
        println!(
            "  {}",
            style("none found — run from a checkout containing skill bundles").dim()
        );
    }
    for id in &local {
        println!("  {}", style(id).white().bold());
    }

    println!();
    let installed = store.list();
    println!(
        "{} Installed skills ({})",
        style("→").cyan(),
        style(installed.len()).bold()
    );
    if installed.is_empty() {
        println!(
            "  {}",
            style("none installed — try `skilldock sync` or `skilldock add <path|url>`").dim()
        );
    }
    for id in &installed {
        println!("  {}", style(id).white().bold());
    }

    Ok(())
}

pub fn sync(store: &SkillStore, local_root: &Path) -> Result<()> {
    let found = skills::scan(local_root);
    if found.is_empty() {
        println!(
            "{} No skills found under {}",
            style("!").yellow(),
            local_root.display()
        );
        return Ok(());
    }

    let mut installed = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for id in &found {
        match skills::install(store, local_root, id) {
            Ok(InstallOutcome::Installed) => {
                installed += 1;
                println!("  {} {}", style("✓").green().bold(), id);
            }
            Ok(InstallOutcome::AlreadyInstalled) => {
                skipped += 1;
                println!(
                    "  {} {} {}",
                    style("-").dim(),
                    id,
                    style("(already installed)").dim()
                );
            }
            // One bad skill must not abort the rest of the batch.
            Err(e) => {
                failed += 1;
                eprintln!("  {} {}: {}", style("✗").red().bold(), id, e);
            }
        }
    }

    println!();
    let mark = if failed == 0 {
        style("✓").green().bold()
    } else {
        style("!").yellow().bold()
    };
    println!("{mark} {installed} installed, {skipped} skipped, {failed} failed");

    Ok(())
}

pub fn add(
    store: &SkillStore,
    local_root: &Path,
    source: &str,
    name: Option<&str>,
    subpath: Option<&str>,
) -> Result<()> {
    if is_remote(source) {
        println!("{} Fetching {}", style("→").cyan(), source);
        let (id, outcome) = skills::fetch_and_install(store, &SystemGit, source, name, subpath)?;
        report_outcome(&id, outcome);
    } else {
        if name.is_some() || subpath.is_some() {
            anyhow::bail!("--skill and --path only apply to repository URLs");
        }
        let outcome = skills::install(store, local_root, source)?;
        report_outcome(source, outcome);
    }

    Ok(())
}

pub fn remove(store: &SkillStore, name: &str) -> Result<()> {
    store.remove(name)?;
    println!("{} Removed {}", style("✓").green().bold(), name);
    Ok(())
}

fn report_outcome(id: &str, outcome: InstallOutcome) {
    match outcome {
        InstallOutcome::Installed => {
            println!("{} Installed {}", style("✓").green().bold(), id);
        }
        InstallOutcome::AlreadyInstalled => {
            println!(
                "{} {} is already installed, keeping the existing copy",
                style("-").dim(),
                id
            );
        }
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("https://") || source.starts_with("http://") || source.starts_with("git@")
}
