#[cfg(test)]
mod config_tests {
    mod configuration_tests {
        use crate::config::structs::configuration::Configuration;

        #[test]
        fn test_init_is_valid() {
            let config = Configuration::init();
            assert!(config.validate().is_ok());
            assert_eq!(config.log_level, "info");
            assert!(config.udp_server.threads >= 1);
            assert!(!config.rate_limit.is_limited());
        }

        #[test]
        fn test_toml_round_trip() {
            let mut config = Configuration::init();
            config.rate_limit.download_bytes_per_second = 524_288;
            config.peer.client_version = Some(String::from("1.2.3"));
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded.rate_limit, config.rate_limit);
            assert_eq!(loaded.peer.client_version.as_deref(), Some("1.2.3"));
            assert_eq!(loaded.udp_server.bind_address, config.udp_server.bind_address);
        }

        #[test]
        fn test_rate_limit_defaults_when_missing() {
            let data = r#"
                log_level = "debug"
                log_console_interval = 10

                [udp_server]
                enabled = true
                bind_address = "127.0.0.1:18888"
                threads = 2
                recv_buffer_size = 65536
                send_buffer_size = 65536
                reuse_address = false

                [peer]
                client_tag = "TT"

                [rate_limit]
                upload_bytes_per_second = 1024
            "#;
            let config = Configuration::load(data.as_bytes()).unwrap();
            assert_eq!(config.rate_limit.upload_bytes_per_second, 1024);
            assert_eq!(config.rate_limit.download_bytes_per_second, 0);
            assert!(config.peer.client_version.is_none());
        }

        #[test]
        fn test_invalid_bind_address_rejected() {
            let mut config = Configuration::init();
            config.udp_server.bind_address = String::from("not-an-address");
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_invalid_client_tag_rejected() {
            let mut config = Configuration::init();
            config.peer.client_tag = String::from("T-T");
            assert!(config.validate().is_err());
            config.peer.client_tag = String::new();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_client_version_defaults_to_crate_version() {
            let mut config = Configuration::init();
            assert_eq!(config.client_version(), env!("CARGO_PKG_VERSION"));
            config.peer.client_version = Some(String::from("2.0"));
            assert_eq!(config.client_version(), "2.0");
        }

        #[test]
        fn test_load_file_missing() {
            let result = Configuration::load_file("/nonexistent/path/config.toml");
            assert!(result.is_err());
        }
    }

    mod configuration_error_tests {
        use crate::config::enums::configuration_error::ConfigurationError;

        #[test]
        fn test_io_error_display() {
            let error = ConfigurationError::IOError(std::io::Error::new(std::io::ErrorKind::NotFound, "file missing"));
            assert_eq!(format!("{}", error), "file missing");
        }

        #[test]
        fn test_parse_error_debug() {
            let parse = toml::from_str::<crate::config::structs::configuration::Configuration>("log_level = 5").unwrap_err();
            let error = ConfigurationError::ParseError(parse);
            assert!(format!("{:?}", error).contains("ParseError"));
        }
    }
}
