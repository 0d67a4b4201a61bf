mod app;
mod hit;
mod layout;
mod taxonomy;
mod util;
mod viewport;
mod visibility;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, default_value = "taxonomy.json")]
    taxonomy: String,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "taxoscope",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::TaxoscopeApp::new(cc, args.taxonomy.clone())))
        }),
    )
}
