use lan_preview::{net, server, Config};

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = match Config::from_exe_dir() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Could not resolve the directory to serve: {err}");
            std::process::exit(1);
        }
    };

    // Bind before printing anything so a taken port fails fast
    let listener = match server::bind(&config).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("Could not bind {}:{}: {err}", config.bind, config.port);
            std::process::exit(1);
        }
    };

    let local_url = config.local_url();
    let lan_url = config.lan_url(&net::display_host(net::local_ip()));
    let rule = "=".repeat(60);

    println!("{rule}");
    println!("Server running!");
    println!("{rule}");
    println!("Local access:   {local_url}");
    println!("Network access: {lan_url}");
    println!("{rule}");
    println!();
    println!("To preview on mobile:");
    println!("1. Make sure your mobile device is on the same Wi-Fi network");
    println!("2. Open {lan_url} on your mobile browser");
    println!("{rule}");
    println!();
    println!("Press Ctrl+C to stop the server");
    println!();
    println!("Opening browser...");

    if let Err(err) = open::that(format!("{local_url}index.html")) {
        log::warn!("could not open a browser: {err}");
    }

    let app = server::router(&config.doc_root);
    if let Err(err) = server::serve(listener, app).await {
        eprintln!("Server error: {err}");
        std::process::exit(1);
    }

    println!();
    println!("Server stopped.");
}
