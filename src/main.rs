use log::info;
use recipeshare::{server, ServerConfig};
use std::env;

fn usage() -> &'static str {
    "Usage: recipeshare [--bind <addr>]"
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = ServerConfig::load()?;

    // Command-line flags override file and environment settings
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bind" => {
                config.bind_addr = args.next().ok_or(usage())?;
            }
            "-h" | "--help" => {
                println!("{}", usage());
                return Ok(());
            }
            other => return Err(format!("Unknown argument: {}\n{}", other, usage()).into()),
        }
    }

    info!("Using bind address {}", config.bind_addr);
    server::run_server(config).await?;
    Ok(())
}
