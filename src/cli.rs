//! Server side command line interface
//!
//! Besides launching the application, the binary can inspect the routing
//! table without starting a server.

#![cfg(feature = "server")]

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print the route table as JSON and exit
    #[arg(long, default_value_t = false)]
    pub print_routes: bool,
    /// Print the view selected for a location path and exit
    #[arg(long)]
    pub resolve: Option<String>,
}

/// What the binary should do after parsing its arguments
#[derive(Debug, PartialEq)]
pub enum Command {
    PrintRoutes,
    Resolve(String),
    Launch,
}

impl Args {
    pub fn command(&self) -> Command {
        if self.print_routes {
            Command::PrintRoutes
        } else if let Some(path) = &self.resolve {
            Command::Resolve(path.clone())
        } else {
            Command::Launch
        }
    }
}

/// Renders the output of a one-shot command, `None` when the app should launch
pub fn run_command(command: &Command) -> Result<Option<String>, Box<dyn std::error::Error>> {
    use crate::routing::{resolve, route_entries};

    match command {
        Command::PrintRoutes => Ok(Some(serde_json::to_string_pretty(&route_entries())?)),
        Command::Resolve(path) => {
            let view = resolve(path)?;
            Ok(Some(format!("{} -> {}", path, view)))
        }
        Command::Launch => Ok(None),
    }
}
