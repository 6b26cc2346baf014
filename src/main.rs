use invoicer::{GeneratorConfig, InvoiceForm, InvoiceMeta, PipelineBuilder, PipelineError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn run(form_path: &Path, output: Option<&Path>) -> Result<PathBuf, PipelineError> {
    let config = GeneratorConfig::from_env()?;
    log::info!("Loading form from {}", form_path.display());
    let json = fs::read_to_string(form_path)?;
    let invoice = InvoiceForm::from_json(&json)?.into_invoice(InvoiceMeta::now(), form_path.parent())?;
    let totals = invoice.totals();
    log::info!(
        "Invoice {}: {} items, total due {:.2} {}",
        invoice.meta().invoice_number(),
        invoice.items().len(),
        totals.total_due,
        config.currency
    );

    let pipeline = PipelineBuilder::new().with_config(config).build()?;
    match output {
        Some(path) if path.is_dir() => pipeline.generate_to_dir(&invoice, path),
        Some(path) => pipeline.generate_to_file(&invoice, path).map(|_| path.to_path_buf()),
        None => pipeline.generate_to_dir(&invoice, "."),
    }
}

/// Generates one invoice PDF from a JSON form.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("invoicer=info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Generates a PDF invoice from a JSON form.");
        eprintln!();
        eprintln!("Usage: {} <path/to/form.json> [output.pdf | output-dir]", args[0]);
        eprintln!();
        eprintln!("Environment: INVOICER_CURRENCY, INVOICER_FILENAME_PREFIX, INVOICER_PAGE_SIZE (a4|letter)");
        return ExitCode::from(2);
    }

    match run(Path::new(&args[1]), args.get(2).map(Path::new)) {
        Ok(path) => {
            println!("Successfully generated {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
