mod cli;
mod logging;
mod workflow;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // コマンドライン引数を解析します
    let args = cli::Args::parse();
    logging::init(args.verbose);

    // エラーはここで一括して分類・表示する
    match workflow::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", workflow::error_message(&e));
            ExitCode::FAILURE
        }
    }
}
