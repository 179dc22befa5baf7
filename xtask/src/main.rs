//! Build automation tasks for Pixelopolis
//!
//! Usage:
//!   cargo xtask package               # Release build plus assets in dist/<platform>/
//!   cargo xtask package --zip         # Same, then zip it up for upload
//!   cargo xtask check-assets          # Make sure every asset the game loads is present

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const BINARY: &str = "pixelopolis";

/// Files the game refuses to start without
const REQUIRED_ASSETS: &[&str] = &[
    "assets/sprites/projectmute.png",
    "assets/sprites/mega.png",
    "assets/buildings/slum/1.json",
    "assets/buildings/slum/2.json",
    "assets/buildings/slum/church.json",
];

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Pixelopolis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a native release and copy it with its assets into dist/
    Package {
        /// Target platform: windows, macos, linux
        #[arg(long)]
        platform: Option<String>,
        /// Also produce dist/pixelopolis-<platform>.zip
        #[arg(long)]
        zip: bool,
    },
    /// Verify the asset tree
    CheckAssets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Package { platform, zip } => package(platform, zip),
        Commands::CheckAssets => check_assets(&project_root()?),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src).with_context(|| format!("reading {}", src.display()))? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

fn check_assets(root: &Path) -> Result<()> {
    let missing: Vec<_> = REQUIRED_ASSETS
        .iter()
        .filter(|path| !root.join(path).exists())
        .collect();
    if !missing.is_empty() {
        for path in &missing {
            eprintln!("missing: {}", path);
        }
        anyhow::bail!("{} required asset(s) missing", missing.len());
    }
    if !root.join("assets/config.ron").exists() {
        println!("Note: no assets/config.ron, the game will use default settings");
    }
    println!("All {} required assets present", REQUIRED_ASSETS.len());
    Ok(())
}

fn host_platform() -> String {
    if cfg!(target_os = "windows") {
        "windows".to_string()
    } else if cfg!(target_os = "macos") {
        "macos".to_string()
    } else {
        "linux".to_string()
    }
}

/// Native release build with assets alongside the binary
fn package(platform: Option<String>, zip: bool) -> Result<()> {
    let root = project_root()?;
    check_assets(&root)?;

    let platform = platform.unwrap_or_else(host_platform);
    let dist = root.join(format!("dist/{}", platform));

    println!("Building native release for {}...", platform);

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--bin", BINARY]),
    )?;

    let binary_name = if platform == "windows" {
        format!("{}.exe", BINARY)
    } else {
        BINARY.to_string()
    };
    std::fs::copy(
        root.join("target/release").join(&binary_name),
        dist.join(&binary_name),
    )
    .with_context(|| format!("copying {}", binary_name))?;

    // The game resolves assets relative to its working directory
    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    println!("Package ready: dist/{}/", platform);

    if zip {
        let zip_name = format!("{}-{}.zip", BINARY, platform);
        let zip_path = root.join("dist").join(&zip_name);
        if zip_path.exists() {
            std::fs::remove_file(&zip_path)?;
        }

        println!("Creating {}...", zip_name);
        run_cmd(
            Command::new("zip")
                .current_dir(&dist)
                .args(["-r", &format!("../{}", zip_name), "."]),
        )?;
        println!("Zip ready: dist/{}", zip_name);
    }

    Ok(())
}
