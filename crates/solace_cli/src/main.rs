use clap::{Parser, Subcommand};
use solace_core::{lock_session, Reply, SolaceConfig};
use solace_reasoning::ReplyEngine;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "solace.toml")]
    config: String,

    /// User id for the terminal conversation
    #[arg(short, long, default_value = "terminal")]
    user: String,

    /// Fixed RNG seed (overrides config)
    #[arg(long, env = "SOLACE_RNG_SEED")]
    seed: Option<u64>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Chat on stdin/stdout (default)
    Chat,
    /// Serve the HTTP gateway
    #[cfg(feature = "gateway")]
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json);

    let mut config = SolaceConfig::load_or_default(&args.config);
    if let Some(seed) = args.seed {
        config.engine.rng_seed = Some(seed);
    }

    info!("Initializing Solace...");
    let engine = Arc::new(ReplyEngine::from_config(&config.engine));

    match args.command.unwrap_or(Command::Chat) {
        Command::Chat => chat_loop(&engine, &args.user),
        #[cfg(feature = "gateway")]
        Command::Serve { host, port } => {
            let host = host.unwrap_or(config.gateway.host);
            let port = port.unwrap_or(config.gateway.port);
            let server = solace_gateway::GatewayServer::new(engine, &host, port);
            server.start().await?
        }
    }
}

fn chat_loop(engine: &ReplyEngine, user_id: &str) -> anyhow::Result<()> {
    println!("Solace is here. Type 'quit' to exit, 'reset' to start over, 'session' to inspect.");
    print!("> ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let trimmed = input.trim();

        match trimmed {
            "quit" | "exit" => break,
            "reset" => {
                engine.clear_session(user_id);
                println!("Session cleared.");
            }
            "session" => match engine.find_session(user_id) {
                Some(handle) => {
                    let snapshot = lock_session(&handle).clone();
                    println!("{}", serde_json::to_string_pretty(&snapshot)?);
                }
                None => println!("No session yet."),
            },
            "" => {}
            message => {
                let reply = engine.generate_reply(message, user_id);
                print_reply(&reply);
            }
        }

        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}

fn print_reply(reply: &Reply) {
    println!("\nSolace: {}", reply.text);
    if let Some(video) = &reply.video {
        println!(
            "  [video] {} (https://www.youtube.com/watch?v={})",
            video.title, video.video_id
        );
    }
    if let Some(follow_up) = &reply.follow_up {
        println!("  {}", follow_up);
    }
    if let Some(actions) = reply.multi_modal.as_ref().filter(|a| !a.is_empty()) {
        let labels: Vec<&str> = actions.iter().map(|a| a.label.as_str()).collect();
        println!("  Try: {}", labels.join(" | "));
    }
    println!();
}
