//! fact.rip
//!
//! fact.rip 落地页的终端版本

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use fr_shell::Cli;

// 重新导出常用类型
pub use fr_app::App;
pub use fr_core::AppConfig;

/// Parse arguments, run the command and map the outcome to an exit code.
pub fn run() -> ExitCode {
    match run_cli(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("fact-rip: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_cli(cli: Cli) -> anyhow::Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;
    runtime.block_on(fr_shell::run(cli))
}
