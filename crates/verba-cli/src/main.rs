// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Verba CLI
//!
//! Looks up UI strings in the static dictionaries and translates free text
//! through the remote translation service.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use verba_cli_config::{
	load_config_with_cli,
	runtime::{LogFormat, LogLevel, LoggingConfig},
	sources::CliOverrides,
};

mod dictionary;
mod remote;

/// Verba - translation lookup and remote translation
#[derive(Parser, Debug)]
#[command(name = "verba", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long, env = "VERBA_CONFIG")]
	config: Option<PathBuf>,

	/// Log level (overrides config)
	#[arg(short, long)]
	log_level: Option<String>,

	/// Log format: pretty, compact or json (overrides config)
	#[arg(long)]
	log_format: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Look up a dictionary key
	Resolve {
		/// Dotted key, e.g. nav.services
		key: String,
		/// Language to resolve for (defaults to i18n.default_locale)
		#[arg(long)]
		lang: Option<String>,
		/// Text to use when no dictionary has the key
		#[arg(long)]
		fallback: Option<String>,
		/// Placeholder value as name=value; repeatable
		#[arg(long = "var", value_name = "NAME=VALUE")]
		vars: Vec<String>,
	},
	/// Translate free text through the remote service
	Translate {
		text: String,
		/// Target language
		#[arg(long)]
		to: String,
		/// Source language (defaults to translation.source_language)
		#[arg(long)]
		from: Option<String>,
	},
	/// Translate several texts at once; prints one result per line
	Batch {
		/// Target language
		#[arg(long)]
		to: String,
		/// Source language (defaults to translation.source_language)
		#[arg(long)]
		from: Option<String>,
		#[arg(required = true)]
		texts: Vec<String>,
	},
	/// List supported locales
	Locales {
		#[arg(long)]
		json: bool,
	},
	/// List keys present in English but missing for a language
	Missing {
		#[arg(long)]
		lang: String,
	},
	/// Inspect or clear the persisted translation cache
	Cache {
		#[command(subcommand)]
		command: CacheCommand,
	},
}

#[derive(Subcommand, Debug)]
enum CacheCommand {
	/// Show entry count and capacity
	Stats {
		#[arg(long)]
		json: bool,
	},
	/// Remove every cached translation
	Clear,
}

impl From<&Args> for CliOverrides {
	fn from(args: &Args) -> Self {
		CliOverrides {
			log_level: args.log_level.clone(),
			log_format: args.log_format.clone(),
			config_file: args.config.clone(),
		}
	}
}

fn log_level_to_tracing(level: LogLevel) -> tracing::Level {
	match level {
		LogLevel::Trace => tracing::Level::TRACE,
		LogLevel::Debug => tracing::Level::DEBUG,
		LogLevel::Info => tracing::Level::INFO,
		LogLevel::Warn => tracing::Level::WARN,
		LogLevel::Error => tracing::Level::ERROR,
	}
}

/// Logs go to stderr; stdout carries command output.
fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(format!("verba={}", log_level_to_tracing(logging.level))));

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let cli_overrides = CliOverrides::from(&args);
	let config = load_config_with_cli(cli_overrides).context("failed to load configuration")?;

	init_tracing(&config.logging);
	debug!(command = ?args.command, "starting verba");

	match &args.command {
		Command::Resolve {
			key,
			lang,
			fallback,
			vars,
		} => {
			let catalog = dictionary::load_catalog(&config.i18n)?;
			let vars = dictionary::parse_vars(vars)?;
			println!(
				"{}",
				dictionary::resolve(
					&catalog,
					&config.i18n,
					key,
					lang.as_deref(),
					fallback.as_deref(),
					&vars,
				)
			);
		}
		Command::Translate { text, to, from } => {
			let translator = remote::build_translator(&config)?;
			let source = from
				.as_deref()
				.unwrap_or(&config.translation.source_language);
			println!(
				"{}",
				translator.translate_remote_from(text, to, source).await
			);
		}
		Command::Batch { to, from, texts } => {
			let translator = remote::build_translator(&config)?;
			let source = from
				.as_deref()
				.unwrap_or(&config.translation.source_language);
			for line in translator.translate_batch_from(texts, to, source).await {
				println!("{line}");
			}
		}
		Command::Locales { json } => {
			println!("{}", dictionary::locales_report(*json)?);
		}
		Command::Missing { lang } => {
			let catalog = dictionary::load_catalog(&config.i18n)?;
			let report = dictionary::missing_report(&catalog, lang);
			if !report.is_empty() {
				println!("{report}");
			}
		}
		Command::Cache { command } => match command {
			CacheCommand::Stats { json } => {
				println!("{}", remote::cache_stats(&config.cache, *json).await?);
			}
			CacheCommand::Clear => remote::cache_clear(&config.cache).await?,
		},
	}

	Ok(())
}
