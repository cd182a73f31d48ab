use newsletter_signup::configuration::get_configuration;
use newsletter_signup::startups::Application;
use newsletter_signup::telemetry::{init_subscriber, get_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("newsletter_signup".into(), "info".into(), std::io::stdout);

    init_subscriber(subscriber);

    let configuration = get_configuration()?;

    let application = Application::build(configuration)?;

    application.run_until_stopped().await?;

    Ok(())
}
