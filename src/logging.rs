use tracing_subscriber::EnvFilter;

/// ロギングを初期化する。
///
/// 通常は `info` レベル固定。`--verbose` 指定時は `debug` になり、
/// さらに `RUST_LOG` 環境変数でフィルタを上書きできる。
/// 標準出力は変換結果の表示に使うため、ログは標準エラー出力に書く。
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
