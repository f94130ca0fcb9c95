use std::fs::File;
use std::io::Write;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::audit_config::AuditConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::trust_config::TrustConfig;

pub const DEFAULT_OVERRIDE_ENV: &str = "ROOTCERTS_ENABLE";

impl Default for TrustConfig {
    fn default() -> Self {
        TrustConfig {
            force_embedded: false,
            override_env: String::from(DEFAULT_OVERRIDE_ENV)
        }
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        AuditConfig {
            bundle_path: None,
            fail_after_months: 1,
            warn_after_months: 3,
            json_output: false
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            trust: TrustConfig::default(),
            audit: AuditConfig::default()
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn to_toml(&self) -> Result<String, ConfigurationError> {
        toml::to_string(self).map_err(ConfigurationError::SerializeError)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                let config_toml = Configuration::init()
                    .to_toml()
                    .map_err(|e| CustomError::new(&e.to_string()))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        parse_log_level(self.log_level.as_str())?;
        if self.trust.override_env.is_empty() || self.trust.override_env.contains('=') || self.trust.override_env.contains('\0') {
            return Err(CustomError::new(&format!("[trust] override_env '{}' is not a valid environment variable name", self.trust.override_env)));
        }
        if self.audit.warn_after_months < self.audit.fail_after_months {
            return Err(CustomError::new(&format!(
                "[audit] warn_after_months ({}) must not be smaller than fail_after_months ({})",
                self.audit.warn_after_months,
                self.audit.fail_after_months
            )));
        }
        Ok(())
    }
}
