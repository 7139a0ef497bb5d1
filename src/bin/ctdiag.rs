use anyhow::{Context, Result};
use ctdiag::analysis::compute_transfer;
use ctdiag::arguments::{Args, ClapApp};
use ctdiag::diagnostics::Diagnostics;
use ctdiag::io::output;

fn main() -> Result<()> {
    // argument parsing
    let app = ClapApp::App.get();
    let args = Args::new(app.get_matches());
    // print splash
    println!("Charge Transfer Diagnostics ({})", env!("CARGO_PKG_VERSION"));
    println!("Running on {} threads.", args.threads.min(3));
    // the diagnostics sink lives until the end of main
    let diagnostics = Diagnostics::to_file(&args.log, &args.log_level)
        .context("Failed to set up the log file")?;
    let result = compute_transfer(&args.ground,
                                  &args.excited,
                                  &args.options(),
                                  &diagnostics)
        .context("Failed to calculate the charge transfer")?;
    print!("{}", output::summary(&result));
    diagnostics.in_scope(|| {
                   tracing::info!(dct = result.dct,
                                  qct = result.qct,
                                  centroid_plus = %output::vector(result.centroid_plus),
                                  centroid_minus = %output::vector(result.centroid_minus),
                                  "Results");
               });
    let block = output::results_block(&args.ground, &args.excited, &result);
    output::write(block, &args.output).with_context(|| {
                                          format!("Error while writing results to {}",
                                                  args.output.display())
                                      })?;
    println!("Results successfully saved to {}", args.output.display());
    Ok(())
}
