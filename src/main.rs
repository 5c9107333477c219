use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;

use lsb_veil::{
    cli::{Cli, Commands},
    handler::{handle_hide, handle_recover},
};

/// 程序的主入口点
///
/// 负责初始化日志与线程池、解析命令行参数，并根据指定的子命令（`hide` 或 `recover`）
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    init_logger(cli.verbose);
    init_thread_pool(cli.threads);

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Recover(args) => handle_recover(args),
    }
}

/// `RUST_LOG` 未设置时默认只输出警告，`--verbose` 提升到调试级别。
fn init_logger(verbose: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn init_thread_pool(threads: Option<usize>) {
    if let Some(threads) = threads {
        // 全局线程池已初始化时保持原样
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .ok();
    }
}
