use githubipranges::{Classifier, Client, Error, Result};

fn main() -> Result<()> {
    // One classifier requests the GitHub IP Ranges once and reuses them
    let classifier = Classifier::new(Client::new());

    for ip_address in ["192.30.252.1", "140.82.112.3", "8.8.8.8", "192.168.1.1"] {
        match classifier.check(ip_address) {
            Ok(result) if result.is_member => println!(
                "{ip_address}: {} ({})",
                result.category.unwrap_or_default(),
                result.matched_range.unwrap_or_default()
            ),
            Ok(_) => println!("{ip_address}: not a GitHub address"),
            Err(Error::Validation(error)) => println!("{ip_address}: {error}"),
            Err(error) => return Err(error),
        }
    }

    // Inspect the ranges behind the lookups
    let range_set = classifier.range_set()?;
    for category in range_set.categories() {
        println!("{:>14}: {} ranges", category.name, category.ranges.len());
    }

    Ok(())
}
