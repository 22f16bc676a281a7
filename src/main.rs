use clap::{Parser, Subcommand};
use golinks::config::AppConfig;
use golinks::runtime::run_server;
use golinks::system::init_logging;

#[derive(Parser)]
#[command(name = "golinks", version, about = "go-links style URL shortener")]
struct Cli {
    /// 配置文件路径（默认 config.toml）
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 启动 HTTP 服务（默认）
    Serve,
    /// 输出示例配置，指定 `--output` 时写入文件
    Config {
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Some(Command::Config { output }) = cli.command {
        match output {
            Some(path) => {
                AppConfig::default()
                    .save_to_file(&path)
                    .map_err(|e| anyhow::anyhow!(e.format_simple()))?;
                println!("Sample configuration written to {}", path);
            }
            None => println!("{}", AppConfig::generate_sample_config()),
        }
        return Ok(());
    }

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            std::process::exit(1);
        }
    };

    let _guard = init_logging(&config.logging)?;

    run_server(config).await
}
