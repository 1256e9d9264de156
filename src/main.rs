#[tokio::main]
async fn main()
{   env_logger::init();

    let config = match tempsweep::Config::from_env()
    {   Ok(config) => config
      , Err(e) => {
          eprintln!("{}", e);
          std::process::exit(1);
        }
    };

    if let Err(e) = tempsweep::repl::run(config).await
    {   eprintln!("{}", e);
        std::process::exit(1);
    }
}
