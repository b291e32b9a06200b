use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::modules::activities::core::activity::CapacityPolicy;

/// School activities API - sign students up for extracurricular activities
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    /// Address to bind the server to
    #[arg(long, env = "ACTIVITIES_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, env = "ACTIVITIES_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Reject signups once an activity reaches `max_participants`
    #[arg(long, env = "ACTIVITIES_ENFORCE_CAPACITY")]
    pub enforce_capacity: bool,

    /// Where `GET /` redirects to
    #[arg(long, env = "ACTIVITIES_LANDING_PAGE", default_value = "/static/index.html")]
    pub landing_page: String,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, env = "ACTIVITIES_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Settings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        if self.enforce_capacity {
            CapacityPolicy::Enforced
        } else {
            CapacityPolicy::Unenforced
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            enforce_capacity: false,
            landing_page: "/static/index.html".to_string(),
            log_level: "info".to_string(),
        }
    }
}
