use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub mailing_list: MailingListSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with="deserialize_number_from_string")]
    pub port: u16,
    pub host: String
}

#[derive(serde::Deserialize, Clone)]
pub struct MailingListSettings {
    pub base_url: String,
    pub api_key: Secret<String>,
}

impl MailingListSettings {
    /// The subscribe endpoint, resolved under `base_url`'s full path.
    pub fn endpoint(&self) -> Result<reqwest::Url, String> {
        let base_url = if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        };

        reqwest::Url::parse(&base_url)
            .and_then(|base_url| base_url.join("subscribe"))
            .map_err(|err| format!("{} is not a valid mailing list url: {}", self.base_url, err))
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    let config_directory = base_path.join("configs");

    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENV");

    let env_filename = format!("{}.yaml", env.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(config::File::from(config_directory.join(env_filename)))
        .add_source(
            config::Environment::with_prefix("APP").prefix_separator("_").separator("__")
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match &self {
            Environment::Local => "local",
            Environment::Staging => "staging",
            Environment::Production => "production"
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. \
                Use either `local`, `staging` or `production`.",
                other
            ))
        }
    }
}
