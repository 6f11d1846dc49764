use std::path::PathBuf;

use produce_lab::{LabPaths, delete_dir_content};

#[derive(Debug)]
enum Command {
    ResetOutputs,
    PlotActuals {
        dataset: PathBuf,
        y_column: String,
        product_type: String,
        save: bool,
    },
}

#[derive(Debug)]
struct CliArgs {
    root: PathBuf,
    command: Command,
}

fn main() {
    let _ = produce_lab::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let paths = LabPaths::from_root(&args.root);

    match args.command {
        Command::ResetOutputs => {
            delete_dir_content(&paths.outputs_dir).map_err(|err| err.to_string())?;
            println!("cleared {}", paths.outputs_dir.display());
            Ok(())
        }
        Command::PlotActuals {
            dataset,
            y_column,
            product_type,
            save,
        } => plot_actuals(paths, &dataset, &y_column, &product_type, save),
    }
}

#[cfg(feature = "cairo-backend")]
fn plot_actuals(
    paths: LabPaths,
    dataset: &std::path::Path,
    y_column: &str,
    product_type: &str,
    save: bool,
) -> Result<(), String> {
    use produce_lab::core::Viewport;
    use produce_lab::render::CairoRenderer;
    use produce_lab::{CaseCharts, PlotArgs, Table};

    let dataset = if dataset.is_relative() && !dataset.exists() {
        paths.dataset_path(dataset)
    } else {
        dataset.to_path_buf()
    };
    let table = Table::read_csv(&dataset).map_err(|err| err.to_string())?;

    let viewport = Viewport::default();
    let renderer = CairoRenderer::new(viewport.width as i32, viewport.height as i32)
        .map_err(|err| err.to_string())?;
    let mut charts = CaseCharts::new(renderer, paths).with_viewport(viewport);

    let args = PlotArgs::default()
        .with("y_column", y_column)
        .with("product_type", product_type)
        .with("save_plot", save);
    let output = charts
        .plot_actuals_from_args(&table, &args)
        .map_err(|err| err.to_string())?;

    match output.saved_path {
        Some(path) => println!("rendered `{}` -> {}", output.title, path.display()),
        None => println!("rendered `{}`", output.title),
    }
    Ok(())
}

#[cfg(not(feature = "cairo-backend"))]
fn plot_actuals(
    _paths: LabPaths,
    _dataset: &std::path::Path,
    _y_column: &str,
    _product_type: &str,
    _save: bool,
) -> Result<(), String> {
    Err("plot-actuals requires feature `cairo-backend`".to_owned())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command_name = args.next().ok_or_else(|| {
        print_usage();
        "missing command".to_owned()
    })?;

    let mut root = PathBuf::from(".");
    let mut dataset: Option<PathBuf> = None;
    let mut y_column: Option<String> = None;
    let mut product_type: Option<String> = None;
    let mut save = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--root" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --root".to_owned())?;
                root = PathBuf::from(value);
            }
            "--dataset" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --dataset".to_owned())?;
                dataset = Some(PathBuf::from(value));
            }
            "--y-column" => {
                y_column = Some(
                    args.next()
                        .ok_or_else(|| "missing value for --y-column".to_owned())?,
                );
            }
            "--product-type" => {
                product_type = Some(
                    args.next()
                        .ok_or_else(|| "missing value for --product-type".to_owned())?,
                );
            }
            "--save" => save = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    let command = match command_name.as_str() {
        "reset-outputs" => Command::ResetOutputs,
        "plot-actuals" => Command::PlotActuals {
            dataset: dataset.ok_or_else(|| "plot-actuals requires --dataset".to_owned())?,
            y_column: y_column.ok_or_else(|| "plot-actuals requires --y-column".to_owned())?,
            product_type: product_type
                .ok_or_else(|| "plot-actuals requires --product-type".to_owned())?,
            save,
        },
        "--help" | "-h" => {
            print_usage();
            std::process::exit(0);
        }
        other => return Err(format!("unknown command: {other}")),
    };

    Ok(CliArgs { root, command })
}

fn print_usage() {
    println!(
        "usage:\n  produce-lab reset-outputs [--root <dir>]\n  produce-lab plot-actuals --dataset <csv> --y-column <AveragePrice|TotalVolume> --product-type <conventional|organic> [--root <dir>] [--save]"
    );
}
