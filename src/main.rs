use case_archive_rust::{cli, classifier, config, error, pipeline, preflight};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use pipeline::{ArchiveStats, RunOptions};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    let pause = wants_pause(&cli.command);

    if let Err(e) = run(&cli) {
        println!("发生未预期的错误: {}", e);
    }

    // 双击运行时防止窗口瞬间关闭
    if pause {
        wait_for_enter();
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load()?;

    match &cli.command {
        None => run_archive(&config, None, cli.verbose),
        Some(Commands::Run { dir, .. }) => run_archive(&config, dir.clone(), cli.verbose),

        Some(Commands::Scan { dir }) => {
            println!("🔎 case-archive - 归档预览\n");

            let scan_dir = resolve_scan_dir(&config, dir.clone())?;
            println!("📂 正在扫描目录: {}", scan_dir.display());

            let classifier = classifier::Classifier::for_categories(&config.categories)?;
            let opts = RunOptions { verbose: cli.verbose, dry_run: true };
            let stats = pipeline::process_dir(
                &scan_dir,
                &config.remote_root(),
                &classifier,
                &config.categories,
                &opts,
            )?;

            println!("{}", "-".repeat(30));
            println!("🔎 预览完毕！可归档 {} 个文件。", stats.planned);
            print_skipped(&stats);
            Ok(())
        }

        Some(Commands::Config { set_host, set_share, show }) => {
            let mut config = config;

            if let Some(host) = set_host {
                config.set_host(host.clone())?;
                println!("✔ 已设置 NAS 地址: {}", config.host);
            }

            if let Some(share) = set_share {
                config.set_share(share.clone())?;
                println!("✔ 已设置共享目录名: {}", config.share);
            }

            if *show || (set_host.is_none() && set_share.is_none()) {
                println!("配置:");
                println!("  NAS 地址: {}", config.host);
                println!("  共享目录: {}", config.share);
                println!("  归档根目录: {}", config.remote_root().display());
                println!("  分类表:");
                for c in &config.categories {
                    match &c.extra {
                        Some(extra) => println!("    {} → {}/{}", c.keyword, c.folder, extra),
                        None => println!("    {} → {}", c.keyword, c.folder),
                    }
                }
            }

            Ok(())
        }
    }
}

/// 完整归档流程：连接预检 → 扫描处理 → 汇总
fn run_archive(config: &Config, dir: Option<PathBuf>, verbose: bool) -> Result<()> {
    println!("📦 case-archive - 案件文件归档\n");

    let root = config.remote_root();
    println!("🔌 正在连接共享目录: {} ...", root.display());

    // 预检失败则整个运行终止，不进入归档流程
    if let Err(e) = preflight::connect(&config.host, &root) {
        println!("❌ 连接失败: {}", root.display());
        println!("错误信息: {}", e);
        return Ok(());
    }
    println!("✅ NAS 连接成功！");

    let scan_dir = resolve_scan_dir(config, dir)?;
    println!("📂 正在扫描目录: {}", scan_dir.display());

    let classifier = classifier::Classifier::for_categories(&config.categories)?;
    let opts = RunOptions { verbose, dry_run: false };
    let stats = pipeline::process_dir(&scan_dir, &root, &classifier, &config.categories, &opts)?;

    println!("{}", "-".repeat(30));
    println!("🎉 处理完毕！共成功归档 {} 个文件。", stats.archived);
    print_skipped(&stats);

    Ok(())
}

fn print_skipped(stats: &ArchiveStats) {
    if stats.unknown_category > 0 {
        println!("⚠️ 未知分类跳过: {} 个", stats.unknown_category);
    }
    if stats.size_mismatch > 0 {
        println!("⚠️ 大小不一致保留: {} 个", stats.size_mismatch);
    }
    if stats.failed > 0 {
        println!("❌ 失败: {} 个", stats.failed);
    }
    if stats.unmatched > 0 {
        println!("   非目标文件: {} 个", stats.unmatched);
    }
}

fn resolve_scan_dir(config: &Config, dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir.or_else(|| config.scan_dir.clone()) {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

/// run 子命令（含省略子命令）结束后等待回车，除非指定 --no-pause
fn wants_pause(command: &Option<Commands>) -> bool {
    match command {
        None => true,
        Some(Commands::Run { no_pause, .. }) => !no_pause,
        Some(_) => false,
    }
}

fn wait_for_enter() {
    let _ = dialoguer::Input::<String>::new()
        .with_prompt("\n按回车键退出程序")
        .allow_empty(true)
        .interact_text();
}
