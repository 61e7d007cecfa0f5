// Command line interface
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Convert OpenNMS KSC Reports to Grafana Dashboards
#[derive(Debug, Parser)]
#[command(name = "ksc2grafana", version, about, disable_help_flag = true)]
pub struct Cli {
    /// KSC reports configuration file (ksc-performance-reports.xml)
    pub ksc_reports_config_file: PathBuf,

    /// OpenNMS base URL [default: http://localhost:8980/opennms]
    #[arg(short = 'h', long, alias = "onms_url")]
    pub onms_url: Option<String>,

    /// OpenNMS ReST API user name [default: admin]
    #[arg(short = 'u', long, alias = "onms_user")]
    pub onms_user: Option<String>,

    /// OpenNMS ReST API user password [default: admin]
    #[arg(short = 'p', long, alias = "onms_passwd")]
    pub onms_passwd: Option<String>,

    /// Grafana base URL [default: http://localhost:3000]
    #[arg(short = 'H', long, alias = "grafana_url")]
    pub grafana_url: Option<String>,

    /// Grafana API user name [default: admin]
    #[arg(short = 'U', long, alias = "grafana_user")]
    pub grafana_user: Option<String>,

    /// Grafana API user password [default: admin]
    #[arg(short = 'P', long, alias = "grafana_passwd")]
    pub grafana_passwd: Option<String>,

    /// Print the dashboards as JSON instead of saving them
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Cli {
    /// Settings keys given explicitly on the command line.
    pub fn overrides(&self) -> Vec<(&'static str, String)> {
        [
            ("onms.url", &self.onms_url),
            ("onms.user", &self.onms_user),
            ("onms.password", &self.onms_passwd),
            ("grafana.url", &self.grafana_url),
            ("grafana.user", &self.grafana_user),
            ("grafana.password", &self.grafana_passwd),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect()
    }

    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_short_options() {
        let cli = Cli::try_parse_from([
            "ksc2grafana",
            "-h",
            "http://onms:8980/opennms",
            "-P",
            "secret",
            "-vv",
            "ksc-performance-reports.xml",
        ])
        .unwrap();

        assert_eq!(cli.ksc_reports_config_file, PathBuf::from("ksc-performance-reports.xml"));
        assert_eq!(
            cli.overrides(),
            vec![
                ("onms.url", "http://onms:8980/opennms".to_string()),
                ("grafana.password", "secret".to_string()),
            ]
        );
        assert_eq!(cli.log_filter(), "trace");
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_parse_legacy_long_options() {
        let cli = Cli::try_parse_from([
            "ksc2grafana",
            "--grafana_url",
            "http://grafana:3000",
            "--dry-run",
            "reports.xml",
        ])
        .unwrap();

        assert_eq!(cli.grafana_url.as_deref(), Some("http://grafana:3000"));
        assert!(cli.dry_run);
        assert_eq!(cli.log_filter(), "info");
    }

    #[test]
    fn test_config_file_is_required() {
        assert!(Cli::try_parse_from(["ksc2grafana"]).is_err());
    }
}
