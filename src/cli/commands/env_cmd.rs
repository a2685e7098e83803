//! env command - Show the active environment settings

use crate::cli::error::CliError;
use crate::cli::Context;

/// Print the resolved environment: namespace, API base and config source.
pub fn env(ctx: &Context) -> Result<(), CliError> {
    println!("namespace: {}", ctx.env.namespace);
    println!("api-base:  {}", ctx.env.api_base);
    println!(
        "token:     {}",
        if ctx.env.token.is_some() { "(set)" } else { "(not set)" }
    );
    match &ctx.env.config_path {
        Some(path) => println!("config:    {}", path.display()),
        None => println!("config:    (defaults)"),
    }
    Ok(())
}
