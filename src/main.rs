use clap::Parser;
use imgprep::batch;
use imgprep::cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = cli.transform_config();
    config.validate()?;

    let output_dir = match &cli.output {
        Some(dir) => dir.clone(),
        None => batch::derive_output_dir(&cli.input_dir)?,
    };

    println!(
        "==> Processing {} → {}",
        cli.input_dir.display(),
        output_dir.display()
    );

    let summary = batch::run(&cli.input_dir, &output_dir, &config)?;

    println!("==> Done: {}", summary);
    Ok(())
}
