use std::process;

use glitchtip_mcp_cli::cli::{Cli, Commands};
use glitchtip_mcp_cli::error::{handle_cli_result, CliResult};
use glitchtip_mcp_cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_WARNING};
use glitchtip_mcp_cli::logging::{init_logging, log_level};
use glitchtip_mcp_cli::mcp_integration::{response_formatting, tool_catalog, CliToolContext};
use glitchtip_mcp_cli::{completions, doctor, serve};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    let serving = matches!(cli.command, None | Some(Commands::Serve));
    init_logging(log_level(cli.verbose, cli.quiet, serving));

    let Cli {
        command,
        host,
        token,
        ..
    } = cli;

    let exit_code = match command.unwrap_or(Commands::Serve) {
        Commands::Serve => handle_cli_result(run_server(host, token).await),
        Commands::Tool { name, args } => {
            tracing::debug!("Running tool {}", name);
            run_tool(host, token, &name, args.as_deref()).await
        }
        Commands::Tools => run_tools(),
        Commands::Doctor => {
            tracing::info!("Running diagnostics");
            run_doctor(host, token).await
        }
        Commands::Completion { shell } => {
            tracing::info!("Generating completion for {:?}", shell);
            run_completions(shell)
        }
    };

    process::exit(exit_code);
}

async fn run_server(host: Option<String>, token: Option<String>) -> CliResult<()> {
    let config = serve::load_config(host, token)?;
    serve::run_server(config).await
}

async fn run_tool(
    host: Option<String>,
    token: Option<String>,
    name: &str,
    args: Option<&str>,
) -> i32 {
    let result = async {
        let config = serve::load_config(host, token)?;
        CliToolContext::new(config).run_tool(name, args).await
    }
    .await;

    match result {
        Ok(text) => {
            println!("{text}");
            EXIT_SUCCESS
        }
        Err(e) => handle_cli_result::<()>(Err(e)),
    }
}

fn run_tools() -> i32 {
    println!(
        "{}",
        response_formatting::format_tool_list(&tool_catalog(), Cli::should_use_color())
    );
    EXIT_SUCCESS
}

async fn run_doctor(host: Option<String>, token: Option<String>) -> i32 {
    let mut doctor = doctor::Doctor::new(host, token);
    match doctor.run_diagnostics().await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::error!("Doctor error: {}", e);
            EXIT_ERROR
        }
    }
}

fn run_completions(shell: clap_complete::Shell) -> i32 {
    match completions::print_completion(shell) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("Completion error: {}", e);
            EXIT_WARNING
        }
    }
}
