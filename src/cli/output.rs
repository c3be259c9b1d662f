use crate::cli::OutputFormat;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;
use githubipranges::CheckResult;
use serde::Serialize;

/*-------------------------------------------------------------------------------------------------
  Output Functions
-------------------------------------------------------------------------------------------------*/

pub const NOT_MEMBER_MESSAGE: &str = "The provided IP address is not a GitHub-owned address";

pub fn check_result(ip_address: &str, result: &CheckResult, format: OutputFormat) {
    match format {
        OutputFormat::Text => text(ip_address, result),
        OutputFormat::Table => table(ip_address, result),
        OutputFormat::Json => json(ip_address, result),
    }
}

/*--------------------------------------------------------------------------------------
  Text
--------------------------------------------------------------------------------------*/

fn text(ip_address: &str, result: &CheckResult) {
    match (&result.category, &result.matched_range) {
        (Some(category), Some(range)) if result.is_member => {
            println!("IP {ip_address} belongs to GitHub's {category} range ({range})")
        }
        _ => eprintln!("{NOT_MEMBER_MESSAGE}"),
    }
}

/*--------------------------------------------------------------------------------------
  Table
--------------------------------------------------------------------------------------*/

fn table(ip_address: &str, result: &CheckResult) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("IP Address")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("GitHub")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Category")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
        Cell::new("Range")
            .add_attribute(Attribute::Bold)
            .fg(Color::Green),
    ]);

    table.add_row(vec![
        Cell::new(ip_address).add_attribute(Attribute::Bold),
        Cell::new(if result.is_member { "yes" } else { "no" }),
        Cell::new(result.category.as_deref().unwrap_or("-")),
        Cell::new(result.matched_range.as_deref().unwrap_or("-")),
    ]);

    println!("{table}");
}

/*--------------------------------------------------------------------------------------
  JSON
--------------------------------------------------------------------------------------*/

#[derive(Serialize)]
struct JsonOutput<'r> {
    ip_address: &'r str,

    #[serde(flatten)]
    result: &'r CheckResult,
}

fn json(ip_address: &str, result: &CheckResult) {
    let output = JsonOutput { ip_address, result };
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(error) => log::error!("Failed to serialize check result: {error}"),
    }
}
