//! Check command implementation.

use std::fs;

use trustypub_core::Nanopub;

use crate::output;

pub fn run(file: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rdf = fs::read_to_string(&file)?;
    let np = Nanopub::new(&rdf)?;
    let report = np.check();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&file, &report);
    }

    if !report.is_valid() {
        return Err("the nanopublication did not pass verification".into());
    }
    Ok(())
}
