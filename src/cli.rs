use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "case-archive")]
#[command(about = "鉴定案件文件NAS归档工具", long_about = None)]
pub struct Cli {
    /// 省略子命令时等同于 run（支持双击直接运行）
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 输出详细日志（包括被静默跳过的文件）
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 连接共享目录并归档扫描目录下的案件文件
    Run {
        /// 扫描目录（默认: 配置中的目录或当前目录）
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// 结束后不等待回车（脚本化运行用）
        #[arg(long)]
        no_pause: bool,
    },

    /// 预览分类结果，不连接、不复制、不删除
    Scan {
        /// 扫描目录（默认: 配置中的目录或当前目录）
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// 显示/修改配置
    Config {
        /// NAS 地址
        #[arg(long)]
        set_host: Option<String>,

        /// 共享目录名
        #[arg(long)]
        set_share: Option<String>,

        /// 显示当前配置
        #[arg(long)]
        show: bool,
    },
}
