use moodlist::{
    config::AppConfig,
    ui::app::App,
    util::{hook::install_hooks, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    let config = AppConfig::from_env();
    let mut app = App::new(&config)?;
    app.run().await
}

fn setup() -> color_eyre::Result<()> {
    install_hooks()?;
    dotenv::dotenv().ok();
    initialize_logging()
}
