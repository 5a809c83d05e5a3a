use clap::Parser;

use floodlink::cli::{Cli, OutputFormat};
use floodlink::config::Config;
use floodlink::dashboard::{self, SelectionView};
use floodlink::forecast;
use floodlink::logging::{self, Component};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before clap reads FLOODLINK_* variables
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let level = cli.log_level.unwrap_or(config.logging.level);
    logging::init_logger(level, config.logging.file.as_deref(), config.logging.timestamps);
    if let Some(path) = &cli.config {
        logging::debug(Component::Config, Some(path.display().to_string().as_str()), "config loaded");
    }

    let series = match forecast::generate(config.coverage.start, config.coverage.end, &config.rules) {
        Ok(series) => series,
        Err(e) => {
            logging::error(Component::Generator, None, &e.to_string());
            return Err(e.into());
        }
    };

    let selected = cli.date.unwrap_or(series.start());
    let view = dashboard::on_date_selected(&series, &config.site, selected);

    match cli.format {
        OutputFormat::Json => {
            let body = if cli.outlook {
                serde_json::json!({
                    "site": &config.site,
                    "selection": &view,
                    "outlook": dashboard::season_outlook(&series),
                    "chart_colors": {
                        "forecast": dashboard::FORECAST_LINE_COLOR,
                        "danger": dashboard::DANGER_LINE_COLOR,
                    },
                })
            } else {
                serde_json::to_value(&view)?
            };
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            println!("{}", dashboard::render_header(&series, &config.site));
            print!("{}", dashboard::render_selection(&view));
            if cli.outlook {
                println!();
                print!("{}", dashboard::render_outlook(&series));
                println!();
                print!("{}", dashboard::render_summary(&series));
            }
        }
    }

    if let SelectionView::Covered(report) = &view {
        logging::info(
            Component::System,
            Some(report.date.to_string().as_str()),
            &format!("{} ({:.1} mm)", report.status, report.precipitation_mm),
        );
    }

    Ok(())
}
