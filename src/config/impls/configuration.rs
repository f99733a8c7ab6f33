use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::rate_limit_config::RateLimitConfig;
use crate::config::structs::udp_server_config::UdpServerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            udp_server: UdpServerConfig {
                enabled: true,
                bind_address: String::from("0.0.0.0:18888"),
                threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(1),
                recv_buffer_size: 4_194_304,
                send_buffer_size: 4_194_304,
                reuse_address: true
            },
            peer: PeerConfig {
                client_tag: String::from("TT"),
                client_version: None
            },
            rate_limit: RateLimitConfig::unlimited()
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

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        if self.udp_server.bind_address.parse::<SocketAddr>().is_err() {
            return Err(CustomError::new(&format!("[VALIDATE CONFIG] Invalid udp_server.bind_address: \"{}\"", self.udp_server.bind_address)));
        }
        if self.log_console_interval == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] log_console_interval must be at least 1"));
        }
        if self.udp_server.threads == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] udp_server.threads must be at least 1"));
        }
        Self::validate_value("peer.client_tag", &self.peer.client_tag, r"^[A-Za-z0-9]{1,8}$")?;
        if let Some(version) = &self.peer.client_version {
            Self::validate_value("peer.client_version", version, r"^[A-Za-z0-9.]{1,16}$")?;
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), CustomError>
    {
        let regex_check = Regex::new(regex).map_err(|e| CustomError::new(&e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(CustomError::new(&format!("[VALIDATE CONFIG] Error checking {} [:] Value: \"{}\" [:] Regex: \"{}\"", name, value, regex_check)));
        }
        Ok(())
    }

    /// Version string fed into the peer id; the crate version unless overridden.
    pub fn client_version(&self) -> String {
        self.peer.client_version.clone().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
    }
}
