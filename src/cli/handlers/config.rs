use crate::cli::args::ConfigArgs;
use ecoji::EcojiConfig;

pub fn handle(args: &ConfigArgs, config: &EcojiConfig) -> Result<(), Box<dyn std::error::Error>> {
    if args.path {
        let path = EcojiConfig::user_config_path()
            .ok_or("no configuration directory on this platform")?;
        println!("{}", path.display());
        return Ok(());
    }

    println!("variant = {}", config.variant());
    println!("wrap = {}", config.wrap());

    println!();
    println!("Sources:");
    println!("  (built-in defaults)");
    for source in &config.sources {
        println!("  {}", source.display());
    }

    Ok(())
}
