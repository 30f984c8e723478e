use std::io::{self, Write};

use anyhow::{Context, Result};

use summonstat_core::UniqueDistribution;

use crate::config::ChartConfig;
use crate::display::annotation;

#[derive(Debug, PartialEq)]
enum InspectCommand {
    Bar(u32),
    OutOfRange(u32),
    All,
    Quit,
}

fn parse_command(input: &str, max_unique: u32) -> Option<InspectCommand> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "a" | "all" | "*" => return Some(InspectCommand::All),
        "q" | "quit" | "exit" => return Some(InspectCommand::Quit),
        _ => {}
    }

    let k: u32 = input.strip_prefix("k=").unwrap_or(input.as_str()).trim().parse().ok()?;
    if (1..=max_unique).contains(&k) {
        Some(InspectCommand::Bar(k))
    } else {
        Some(InspectCommand::OutOfRange(k))
    }
}

/// `None` on end of input.
fn prompt(msg: &str) -> Result<Option<String>> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Terminal stand-in for hovering over a bar: each entered k prints that bar's annotation.
pub fn run_interactive(dist: &UniqueDistribution, config: &ChartConfig) -> Result<()> {
    let max_unique = *dist.support().end();
    let digits = config.significant_digits;

    println!("\nInspect a bar: enter k (1-{max_unique}), 'all' to list every bar, 'q' to quit.");

    loop {
        let input = match prompt("> ")? {
            Some(s) => s,
            None => break,
        };

        if input.is_empty() {
            continue;
        }

        match parse_command(&input, max_unique) {
            Some(InspectCommand::Quit) => break,
            Some(InspectCommand::Bar(k)) => {
                if let Some(p) = dist.get(k) {
                    println!("{}\n", annotation(k, p, digits));
                }
            }
            Some(InspectCommand::All) => {
                for (k, p) in dist.iter() {
                    println!("{}\n", annotation(k, p, digits));
                }
            }
            Some(InspectCommand::OutOfRange(k)) => {
                println!("No bar at k = {k}: reachable counts are 1 to {max_unique}.");
            }
            None => {
                println!("Unknown input: '{}'. Enter a number, 'all' or 'q'.", input);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_bar() {
        assert_eq!(parse_command("1", 10), Some(InspectCommand::Bar(1)));
        assert_eq!(parse_command(" 10 ", 10), Some(InspectCommand::Bar(10)));
        assert_eq!(parse_command("k=4", 10), Some(InspectCommand::Bar(4)));
        assert_eq!(parse_command("K= 4", 10), Some(InspectCommand::Bar(4)));
    }

    #[test]
    fn test_parse_command_out_of_range() {
        assert_eq!(parse_command("0", 10), Some(InspectCommand::OutOfRange(0)));
        assert_eq!(parse_command("11", 10), Some(InspectCommand::OutOfRange(11)));
    }

    #[test]
    fn test_parse_command_keywords() {
        assert_eq!(parse_command("all", 3), Some(InspectCommand::All));
        assert_eq!(parse_command("*", 3), Some(InspectCommand::All));
        assert_eq!(parse_command("Q", 3), Some(InspectCommand::Quit));
        assert_eq!(parse_command("exit", 3), Some(InspectCommand::Quit));
    }

    #[test]
    fn test_parse_command_unknown() {
        assert_eq!(parse_command("foo", 3), None);
        assert_eq!(parse_command("-1", 3), None);
        assert_eq!(parse_command("2.5", 3), None);
        assert_eq!(parse_command("", 3), None);
    }
}
