use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_coherence::{
    api,
    app::{Portfolio, ranking, scoring},
    config::Settings,
    models::{AssetClass, ContributionPlan, Holding, RebalanceReport, RiskProfile, RuleTable, ScoreRecord},
};

#[derive(Debug, Parser)]
#[command(name = "portfolio-coherence", about = "Portfolio ledger and coherence scoring")]
struct Args {
    /// Transaction history CSV (id,date,type,ticker,quantity,price).
    #[arg(long)]
    transactions: Option<String>,

    /// Quote snapshot JSON from the market-data feed.
    #[arg(long)]
    quotes: Option<String>,

    /// Already ranked snapshot JSON; replaces --quotes and skips local ranking.
    #[arg(long)]
    ranked: Option<String>,

    /// Scoring rule table JSON.
    #[arg(long)]
    rules: Option<String>,

    /// Print JSON instead of tables.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Current holdings derived from the transaction history.
    Holdings,
    /// Integrity score of every ticker named by the rule table.
    Scores,
    /// Coherence score and allocation gaps.
    Report {
        #[arg(long)]
        profile: Option<RiskProfile>,
    },
    /// Buy list for a new cash contribution.
    Contribute {
        #[arg(long)]
        cash: Decimal,
        #[arg(long)]
        profile: Option<RiskProfile>,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut settings = Settings::from_env()?;
    if args.transactions.is_some() {
        settings.transactions_csv = args.transactions.clone();
    }
    if args.quotes.is_some() {
        settings.quotes_json = args.quotes.clone();
    }
    if args.rules.is_some() {
        settings.rules_json = args.rules.clone();
    }

    let rules = load_rules(&settings)?;

    if let Command::Scores = args.command {
        let scores = scoring::score_universe(&rules);
        return output(&scores, args.json, |scores| print_scores(scores));
    }

    let portfolio = load_portfolio(&settings, &rules, args.ranked.as_deref())?;

    match args.command {
        Command::Holdings => output(portfolio.holdings(), args.json, |holdings| {
            print_holdings(holdings, portfolio.total_value())
        }),
        Command::Report { profile } => {
            let profile = profile.unwrap_or(settings.risk_profile);
            let report = Report {
                coherence_score: portfolio.coherence_score(),
                rebalance: portfolio.rebalance(profile),
            };
            output(&report, args.json, print_report)
        }
        Command::Contribute { cash, profile } => {
            let profile = profile.unwrap_or(settings.risk_profile);
            let plan = portfolio.suggest_contribution(cash, profile)?;
            output(&plan, args.json, print_plan)
        }
        Command::Scores => Ok(()),
    }
}

#[derive(Serialize)]
struct Report {
    coherence_score: u8,
    rebalance: RebalanceReport,
}

fn load_rules(settings: &Settings) -> Result<RuleTable> {
    match settings.rules_json.as_deref() {
        Some(path) => api::load_rule_table(path),
        None => {
            tracing::warn!("no rule table configured; every ticker scores neutral");
            Ok(RuleTable::default())
        }
    }
}

fn load_portfolio(settings: &Settings, rules: &RuleTable, ranked: Option<&str>) -> Result<Portfolio> {
    let instruments = match ranked {
        Some(path) => api::load_ranked_instruments(path)?,
        None => {
            let quotes = api::load_quotes(settings.require_quotes_json()?)?;
            let scores = scoring::score_universe(rules);
            ranking::rank(&quotes, &scores, settings.default_score)
        }
    };

    let mut portfolio = Portfolio::new(settings.default_score);
    portfolio.set_instruments(instruments);
    portfolio.import_transactions(settings.require_transactions_csv()?)?;

    Ok(portfolio)
}

fn output<T, F>(value: &T, json: bool, print: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T),
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print(value);
    }
    Ok(())
}

fn print_holdings(holdings: &[Holding], total_value: Decimal) {
    if holdings.is_empty() {
        println!("No holdings to display. Import transactions first.");
        return;
    }

    println!(
        "{:<10} {:<13} {:>12} {:>12} {:>12} {:>14} {:>14} {:>9} {:>8}",
        "Ticker", "Class", "Quantity", "Avg. cost", "Price", "Value", "Profit", "Profit %", "Alloc %"
    );
    for holding in holdings {
        println!(
            "{:<10} {:<13} {:>12.4} {:>12.2} {:>12.2} {:>14.2} {:>14.2} {:>8.2}% {:>7.2}%",
            holding.ticker(),
            holding.asset_class().label(),
            holding.quantity(),
            holding.average_cost(),
            holding.current_price(),
            holding.total_value(),
            holding.profit(),
            holding.profit_percent(),
            holding.allocation_percent(),
        );
    }
    println!("Total value: {:.2}", total_value);
}

fn print_scores(scores: &[ScoreRecord]) {
    for record in scores {
        println!(
            "{:<10} {:>3} (raw {:>4})  {}",
            record.ticker(),
            record.clamped_score(),
            record.raw_score(),
            record.badges().join(", ")
        );
        for entry in record.evidence_log() {
            println!(
                "    {:<8} {:>+4}  {} [{}]",
                format!("{:?}", entry.kind()),
                entry.value(),
                entry.description(),
                entry.source()
            );
        }
    }
}

fn print_report(report: &Report) {
    let rebalance = &report.rebalance;
    println!("Coherence score: {}/100", report.coherence_score);
    println!("Risk profile: {}", rebalance.profile());
    println!("{:<13} {:>9} {:>9} {:>9}", "Class", "Current", "Target", "Gap");
    for asset_class in AssetClass::iter() {
        println!(
            "{:<13} {:>8.2}% {:>8.2}% {:>+8.2}",
            asset_class.label(),
            rebalance.current().get(asset_class),
            rebalance.target().get(asset_class),
            rebalance.gaps().get(asset_class),
        );
    }
    println!(
        "{} (priority: {})",
        if *rebalance.is_balanced() {
            "Balanced"
        } else {
            "Needs rebalancing"
        },
        rebalance.priority_class().label()
    );
}

fn print_plan(plan: &ContributionPlan) {
    println!("Focus: {}", plan.focus_label());
    if plan.suggestions().is_empty() {
        println!("No affordable candidates.");
        return;
    }
    for suggestion in plan.suggestions() {
        println!(
            "{:<10} {:>8} units {:>12.2}  {}",
            suggestion.ticker(),
            suggestion.quantity(),
            suggestion.cost(),
            suggestion.reason()
        );
    }
    println!("Total: {:.2}", plan.total_cost());
}
