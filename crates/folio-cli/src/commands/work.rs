use anyhow::Result;

use folio_core::{content, AppConfig};

pub fn run(category: Option<&str>, json: bool) -> Result<()> {
    let items = content::load_work_or_builtin(Some(&AppConfig::work_path()));
    let filter = category.unwrap_or("all");
    let filtered = content::filter_work(&items, filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if filtered.is_empty() {
        println!("No work items match category \"{}\".", filter);
        println!("\nCategories: {}", content::categories(&items).join(", "));
        return Ok(());
    }

    println!("Work ({}):\n", filtered.len());

    for item in filtered {
        println!("  {} - {}", item.title, item.description);
        println!("    {} / {}  [{}]", item.category, item.year, item.accent);
        println!();
    }

    Ok(())
}
