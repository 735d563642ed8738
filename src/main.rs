fn main() -> responder::error::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("responder=warn"))
        .init();
    log::info!("Starting responder");

    match responder::run() {
        Ok(()) => {
            log::info!("Responder shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Responder encountered an error: {}", e);
            Err(e)
        }
    }
}
