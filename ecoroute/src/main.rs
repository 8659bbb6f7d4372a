use clap::Parser;
use ecoroute::app::EcorouteCliArguments;

fn main() {
    env_logger::init();
    let args = EcorouteCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running ecoroute: {e}");
            std::process::exit(1);
        }
    }
}
