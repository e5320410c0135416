//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PilumArgs};
use crate::error::Result;

/// Result structure for index builds.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexBuildResult {
    pub documents: u64,
    pub unreadable_documents: u64,
    pub blocks_written: usize,
    pub blocks_merged: usize,
    pub blocks_skipped: usize,
    pub terms: usize,
    pub index_file: String,
    pub doc_map_file: String,
    pub duration_ms: u64,
}

/// One matching document of a phrase search.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: u64,
    pub path: String,
}

/// Result structure for phrase searches.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub terms: Vec<String>,
    pub hits: Vec<SearchHit>,
    pub duration_ms: u64,
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &PilumArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output search results, with the human format distinguishing the
/// no-terms and no-match outcomes.
pub fn output_search_results(results: &SearchResults, args: &PilumArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(results, args),
        OutputFormat::Human => {
            if results.terms.is_empty() {
                println!("The query contained no searchable terms.");
            } else if results.hits.is_empty() {
                println!("No document found for this phrase.");
            } else {
                println!("Phrase located in:");
                for hit in &results.hits {
                    println!("- {}", hit.path);
                }
            }
            if args.verbosity() > 1 {
                println!("({} ms)", results.duration_ms);
            }
            Ok(())
        }
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &PilumArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    if let Some(object) = value.as_object() {
        for (key, value) in object {
            println!("{}: {}", key.replace('_', " "), format_value(value));
        }
    } else {
        println!("{}", format_value(&value));
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PilumArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
