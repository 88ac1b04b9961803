use anyhow::Result;

use crate::api::{ApiClient, CreateLimitRequest};
use crate::config::Config;
use crate::models::{validate_submission, LimitProgress, Period};
use crate::session::CurrentUser;
use crate::ui::util::format_amount;

pub(crate) async fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "status" | "s" => cli_status().await,
        "set" => cli_set(&args[2..]).await,
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("limitui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("LimiTUI — terminal client for periodic spending limits");
    println!();
    println!("Usage: limitui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  status                        Show the active limit and current-period spending");
    println!("  set <amount> <period>         Set a new spending limit (daily, weekly, monthly)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn connect() -> Result<(ApiClient, CurrentUser)> {
    let cfg = Config::load()?;
    Ok((
        ApiClient::new(&cfg.api_url),
        CurrentUser::new(cfg.user_id),
    ))
}

async fn cli_status() -> Result<()> {
    let (client, user) = connect()?;

    // The two reads are independent; fire both and take whatever answers.
    let (limit, spending) = tokio::join!(
        client.fetch_active_limit(user.id()),
        client.fetch_current_spending(user.id()),
    );

    println!("LimiTUI — {}", user.id());
    println!("{}", "─".repeat(40));

    let total = match spending {
        Ok(s) => Some(s.total_spending),
        Err(err) => {
            println!("  Spent:      unavailable ({err})");
            None
        }
    };

    match limit {
        Ok(limit) => {
            let total = total.unwrap_or_default();
            let progress = LimitProgress::derive(&limit, total);
            println!("  Limit:      {} ({})", format_amount(limit.amount), limit.period);
            if let Some(start) = &limit.start_date {
                println!("  Since:      {start}");
            }
            println!("  Spent:      {}", format_amount(total));
            println!("  Progress:   {:.0}%", progress.percentage);
        }
        Err(err) if err.is_status() => {
            if let Some(total) = total {
                println!("  Spent:      {}", format_amount(total));
            }
            println!();
            println!("No active spending limit. Set one with: limitui set <amount> <period>");
        }
        Err(err) => anyhow::bail!("Failed to reach the limit service: {err}"),
    }

    Ok(())
}

async fn cli_set(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        anyhow::bail!("Usage: limitui set <amount> <period>");
    }

    let period = Period::parse(&args[1]).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown period: {} (expected daily, weekly, or monthly)",
            args[1]
        )
    })?;
    let (amount, period) = validate_submission(&args[0], Some(period))?;

    let (client, user) = connect()?;
    let request = CreateLimitRequest::new(amount, period);
    client.create_limit(user.id(), &request).await?;

    println!(
        "Spending limit set: {} {}",
        format_amount(amount),
        period.as_str()
    );
    Ok(())
}
