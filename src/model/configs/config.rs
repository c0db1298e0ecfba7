use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::configs::{notify_config::*, pagerduty_config::*, slack_config::*};

use crate::env_configuration::env_config::*;

#[derive(Debug)]
pub struct Config {
    pub notify: Arc<NotifyConfig>,
    pub slack: Arc<SlackConfig>,
    pub pagerduty: Arc<PagerdutyConfig>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConfigNotSafe {
    pub notify: NotifyConfig,
    pub slack: SlackConfig,
    pub pagerduty: PagerdutyConfig,
}

impl Config {
    #[doc = "Loads the whole system configuration once at startup - the services receive their sections explicitly."]
    pub fn new() -> Self {
        let system_config: ConfigNotSafe =
            match read_toml_from_file::<ConfigNotSafe>(&SYSTEM_CONFIG_PATH) {
                Ok(system_config) => system_config,
                Err(e) => {
                    error!(
                        "[Error][Config->new] Failed to retrieve information 'system_config'. : {:?}",
                        e
                    );
                    panic!(
                        "[Error][Config->new] Failed to retrieve information 'system_config'. : {:?}",
                        e
                    );
                }
            };

        Config {
            notify: Arc::new(system_config.notify),
            slack: Arc::new(system_config.slack),
            pagerduty: Arc::new(system_config.pagerduty),
        }
    }
}
