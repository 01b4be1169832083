//! Gadget Grove Storefront - interactive in-memory storefront demo.
//!
//! Runs the storefront against an in-memory page buffer and drives it from
//! stdin; each accepted line plays the role of one click on the page.
//!
//! # Usage
//!
//! ```bash
//! # Select a customer (enables the buy buttons)
//! customer 1
//!
//! # Buy a device for the selected customer
//! buy 3
//!
//! # Reprint the page, show help, leave
//! page
//! help
//! quit
//! ```
//!
//! All state is volatile: restarting the binary resets the demo.

#![cfg_attr(not(test), forbid(unsafe_code))]
// The terminal stands in for the hosting page, so the page is printed.
#![allow(clippy::print_stdout)]

use std::io::{self, BufRead, Write};

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gadget_grove_core::{CustomerId, DeviceId};
use gadget_grove_storefront::app::Storefront;
use gadget_grove_storefront::config::StorefrontConfig;
use gadget_grove_storefront::error::Result;
use gadget_grove_storefront::surface::{PageBuffer, Region};

/// One line of user input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    SelectCustomer(i32),
    Buy(i32),
    Page,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match (words.next()?, words.next()) {
        ("customer", Some(id)) => Command::SelectCustomer(id.parse().ok()?),
        ("buy", Some(id)) => Command::Buy(id.parse().ok()?),
        ("page", None) => Command::Page,
        ("help", None) => Command::Help,
        ("quit" | "exit", None) => Command::Quit,
        _ => return None,
    };
    // trailing junk means the line wasn't a command
    if words.next().is_some() {
        return None;
    }
    Some(command)
}

fn print_help() {
    println!("commands:");
    println!("  customer <id>  select a customer");
    println!("  buy <id>       buy a device for the selected customer");
    println!("  page           reprint the page");
    println!("  help           show this help");
    println!("  quit           leave the shop");
}

fn print_page(page: &PageBuffer) {
    for region in Region::ALL {
        println!("── #{} ──", region.element_id());
        println!("{}", page.region(region).unwrap_or(""));
    }
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let config = StorefrontConfig::from_env()?;

    let mut app = Storefront::new(config, PageBuffer::new())?;
    app.mount()?;
    print_page(app.surface());
    print_help();
    prompt();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let now = Utc::now();
        app.tick(now)?;

        match parse_command(&line) {
            Some(Command::SelectCustomer(id)) => {
                app.select_customer(CustomerId::new(id))?;
                print_page(app.surface());
            }
            Some(Command::Buy(id)) => {
                app.purchase(DeviceId::new(id), now)?;
                print_page(app.surface());
            }
            Some(Command::Page) => print_page(app.surface()),
            Some(Command::Help) => print_help(),
            Some(Command::Quit) => break,
            None => {
                if !line.trim().is_empty() {
                    println!("unrecognized command: {line}");
                }
                print_help();
            }
        }
        prompt();
    }

    info!("storefront closed");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_command("customer 1").unwrap(),
            Command::SelectCustomer(1)
        );
        assert_eq!(parse_command("buy 4").unwrap(), Command::Buy(4));
        assert_eq!(parse_command("  page  ").unwrap(), Command::Page);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(parse_command("").is_none());
        assert!(parse_command("buy").is_none());
        assert!(parse_command("buy one").is_none());
        assert!(parse_command("customer 1 2").is_none());
        assert!(parse_command("steal 1").is_none());
    }
}
